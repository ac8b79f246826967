use crate::pose::LandmarkIndex;

/// 採点対象の関節角度メトリクス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AngleMetric {
    LeftElbow,
    RightElbow,
    LeftKnee,
    RightKnee,
    LeftShoulder,
    RightShoulder,
}

impl AngleMetric {
    pub const ALL: [AngleMetric; 6] = [
        AngleMetric::LeftElbow,
        AngleMetric::RightElbow,
        AngleMetric::LeftKnee,
        AngleMetric::RightKnee,
        AngleMetric::LeftShoulder,
        AngleMetric::RightShoulder,
    ];

    /// メトリクスを構成するランドマーク3点（近位, 頂点, 遠位）
    ///
    /// 肘 = 肩→肘→手首、膝 = 腰→膝→足首、肩 = 腰→肩→肘
    pub fn triple(self) -> (LandmarkIndex, LandmarkIndex, LandmarkIndex) {
        use LandmarkIndex::*;
        match self {
            AngleMetric::LeftElbow => (LeftShoulder, LeftElbow, LeftWrist),
            AngleMetric::RightElbow => (RightShoulder, RightElbow, RightWrist),
            AngleMetric::LeftKnee => (LeftHip, LeftKnee, LeftAnkle),
            AngleMetric::RightKnee => (RightHip, RightKnee, RightAnkle),
            AngleMetric::LeftShoulder => (LeftHip, LeftShoulder, LeftElbow),
            AngleMetric::RightShoulder => (RightHip, RightShoulder, RightElbow),
        }
    }

    /// 表示用の名前
    pub fn name(self) -> &'static str {
        match self {
            AngleMetric::LeftElbow => "left_elbow",
            AngleMetric::RightElbow => "right_elbow",
            AngleMetric::LeftKnee => "left_knee",
            AngleMetric::RightKnee => "right_knee",
            AngleMetric::LeftShoulder => "left_shoulder",
            AngleMetric::RightShoulder => "right_shoulder",
        }
    }
}

/// 1ポーズ分の目標関節角度（度）
///
/// None のメトリクスはそのポーズでは採点しない。
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TargetProfile {
    pub left_elbow: Option<f32>,
    pub right_elbow: Option<f32>,
    pub left_knee: Option<f32>,
    pub right_knee: Option<f32>,
    pub left_shoulder: Option<f32>,
    pub right_shoulder: Option<f32>,
}

impl TargetProfile {
    /// メトリクスの目標角度を引く
    pub fn target(&self, metric: AngleMetric) -> Option<f32> {
        match metric {
            AngleMetric::LeftElbow => self.left_elbow,
            AngleMetric::RightElbow => self.right_elbow,
            AngleMetric::LeftKnee => self.left_knee,
            AngleMetric::RightKnee => self.right_knee,
            AngleMetric::LeftShoulder => self.left_shoulder,
            AngleMetric::RightShoulder => self.right_shoulder,
        }
    }

    /// 採点対象メトリクス数
    pub fn metric_count(&self) -> usize {
        AngleMetric::ALL
            .iter()
            .filter(|m| self.target(**m).is_some())
            .count()
    }
}

static TREE: TargetProfile = TargetProfile {
    left_elbow: Some(40.0),
    right_elbow: Some(40.0),
    left_knee: Some(90.0),
    right_knee: Some(180.0),
    left_shoulder: None,
    right_shoulder: None,
};

static CAT: TargetProfile = TargetProfile {
    left_elbow: Some(180.0),
    right_elbow: Some(180.0),
    left_knee: Some(90.0),
    right_knee: Some(90.0),
    left_shoulder: None,
    right_shoulder: None,
};

static WARRIOR: TargetProfile = TargetProfile {
    left_elbow: Some(180.0),
    right_elbow: Some(180.0),
    left_knee: Some(90.0),
    right_knee: Some(180.0),
    left_shoulder: Some(90.0),
    right_shoulder: Some(90.0),
};

static DOWNWARD_DOG: TargetProfile = TargetProfile {
    left_elbow: Some(180.0),
    right_elbow: Some(180.0),
    left_knee: Some(180.0),
    right_knee: Some(180.0),
    left_shoulder: None,
    right_shoulder: None,
};

/// ポーズIDから目標角度プロファイルを引く
///
/// 未知のIDは None（採点側で0点扱い）。ゼロ埋めプロファイルを返すと
/// 何もしていなくても点が付くため、必ず None で区別する。
pub fn profile_for(pose_id: &str) -> Option<&'static TargetProfile> {
    match pose_id {
        "tree" => Some(&TREE),
        "cat" => Some(&CAT),
        "warrior" => Some(&WARRIOR),
        "downward-dog" => Some(&DOWNWARD_DOG),
        _ => None,
    }
}
