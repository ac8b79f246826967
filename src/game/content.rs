/// ポーズの難易度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// 1ポーズ分の表示コンテンツ
///
/// 採点とは独立した静的データ。idが採点プロファイルのキーになる。
#[derive(Debug, Clone, Copy)]
pub struct PoseContent {
    pub id: &'static str,
    pub name: &'static str,
    pub instructions: &'static [&'static str],
    pub fun_fact: &'static str,
    pub difficulty: Difficulty,
}

/// 収録ポーズ（挑戦順）
pub static POSES: [PoseContent; 4] = [
    PoseContent {
        id: "tree",
        name: "Tree Pose",
        instructions: &[
            "Stand tall on both feet",
            "Lift one foot and place it on your other leg",
            "Put your hands together above your head",
            "Balance like a strong tree!",
        ],
        fun_fact: "Tree Pose improves balance and focus! Just like a tree has strong roots, \
                   you're building strength in your legs!",
        difficulty: Difficulty::Easy,
    },
    PoseContent {
        id: "cat",
        name: "Cat-Cow Pose",
        instructions: &[
            "Get on your hands and knees",
            "Arch your back up like a stretching cat",
            "Then curve your back down like a happy cow",
            "Keep moving slowly back and forth",
        ],
        fun_fact: "Cat-Cow Pose makes your spine flexible and feels great for your back! \
                   It's like giving yourself a gentle massage!",
        difficulty: Difficulty::Easy,
    },
    PoseContent {
        id: "warrior",
        name: "Warrior Pose",
        instructions: &[
            "Stand with your feet wide apart",
            "Turn one foot to the side",
            "Stretch your arms out like you're flying",
            "Feel strong and brave like a warrior!",
        ],
        fun_fact: "Warrior Pose builds strength and confidence! Warriors are brave and \
                   strong, just like you!",
        difficulty: Difficulty::Medium,
    },
    PoseContent {
        id: "downward-dog",
        name: "Downward Dog",
        instructions: &[
            "Start on your hands and knees",
            "Lift your bottom up to the sky",
            "Make a triangle shape with your body",
            "Keep your arms and legs straight",
        ],
        fun_fact: "Downward Dog stretches your whole body and gives you energy! Dogs love \
                   this stretch when they wake up!",
        difficulty: Difficulty::Medium,
    },
];

/// IDでコンテンツを引く
pub fn pose_by_id(id: &str) -> Option<&'static PoseContent> {
    POSES.iter().find(|p| p.id == id)
}
