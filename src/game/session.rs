use crate::game::content::{PoseContent, POSES};
use crate::pose::Landmark;
use crate::scoring;

/// 1ポーズクリアで与える星の数
///
/// 子ども向けの励まし仕様として、一致度に関わらず常に満点の3つ。
pub const STARS_PER_POSE: u32 = 3;

/// ゲーム画面の状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Welcome,
    Playing,
    Complete,
}

/// ポーズ自動クリアの判定ポリシー
///
/// 一致度が threshold 以上のフレームが hold_frames 回連続したらクリア。
/// 既定値 (80, 1) は1フレームで即クリアする挙動。hold_frames を増やすと
/// ノイズの1フレームで誤クリアしなくなる。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvancePolicy {
    /// クリア閾値（以上で判定）
    pub threshold: u8,
    /// 閾値を連続で満たすべきフレーム数
    pub hold_frames: u32,
}

impl Default for AdvancePolicy {
    fn default() -> Self {
        Self {
            threshold: 80,
            hold_frames: 1,
        }
    }
}

/// フレーム観測の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// 現在のポーズを継続中
    Stayed,
    /// ポーズをクリアして次へ進んだ
    PoseCompleted { stars: u32 },
    /// 最後のポーズをクリアしてゲーム終了
    Finished { total_stars: u32 },
}

/// ウェルカム → プレイ中 → クリアの直線進行を管理するセッション
///
/// ポーズ列は収録コンテンツの順。採点自体は毎フレーム独立で、
/// セッションはポーズごとのベスト一致度とクリア判定だけを持つ。
pub struct GameSession {
    state: GameState,
    pose_index: usize,
    total_stars: u32,
    best_accuracy: u8,
    held: u32,
    policy: AdvancePolicy,
}

impl GameSession {
    pub fn new(policy: AdvancePolicy) -> Self {
        Self {
            state: GameState::Welcome,
            pose_index: 0,
            total_stars: 0,
            best_accuracy: 0,
            held: 0,
            policy,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// 挑戦中のポーズ（プレイ中以外は None）
    pub fn current_pose(&self) -> Option<&'static PoseContent> {
        match self.state {
            GameState::Playing => POSES.get(self.pose_index),
            _ => None,
        }
    }

    /// 進行度 (現在のポーズ番号（1始まり）, 総ポーズ数)
    pub fn progress(&self) -> (usize, usize) {
        (self.pose_index + 1, POSES.len())
    }

    pub fn total_stars(&self) -> u32 {
        self.total_stars
    }

    /// 現在のポーズ挑戦中に観測したベスト一致度
    pub fn best_accuracy(&self) -> u8 {
        self.best_accuracy
    }

    /// ゲーム開始。最初のポーズから
    pub fn start(&mut self) {
        self.state = GameState::Playing;
        self.pose_index = 0;
        self.total_stars = 0;
        self.best_accuracy = 0;
        self.held = 0;
    }

    /// 最初からやり直す（ウェルカム画面へ戻る）
    pub fn restart(&mut self) {
        self.state = GameState::Welcome;
        self.pose_index = 0;
        self.total_stars = 0;
        self.best_accuracy = 0;
        self.held = 0;
    }

    /// 1フレーム分の一致度を観測し、クリア判定する
    ///
    /// プレイ中以外では何もしない。
    pub fn observe(&mut self, accuracy: u8) -> Advance {
        if self.state != GameState::Playing {
            return Advance::Stayed;
        }

        self.best_accuracy = self.best_accuracy.max(accuracy);

        if accuracy >= self.policy.threshold {
            self.held += 1;
            if self.held >= self.policy.hold_frames {
                return self.advance();
            }
        } else {
            self.held = 0;
        }

        Advance::Stayed
    }

    /// ランドマーク列を現在のポーズで採点して観測する
    ///
    /// 戻り値は (一致度, クリア判定)。プレイ中以外は (0, Stayed)。
    pub fn score_frame(&mut self, landmarks: &[Landmark]) -> (u8, Advance) {
        let pose = match self.current_pose() {
            Some(p) => p,
            None => return (0, Advance::Stayed),
        };

        let accuracy = scoring::score(landmarks, pose.id);
        let advance = self.observe(accuracy);
        (accuracy, advance)
    }

    /// 現在のポーズを手動でクリア扱いにする（「できた！」ボタン相当）
    pub fn complete_pose(&mut self) -> Advance {
        if self.state != GameState::Playing {
            return Advance::Stayed;
        }
        self.advance()
    }

    fn advance(&mut self) -> Advance {
        self.total_stars += STARS_PER_POSE;
        self.best_accuracy = 0;
        self.held = 0;

        if self.pose_index + 1 < POSES.len() {
            self.pose_index += 1;
            Advance::PoseCompleted {
                stars: STARS_PER_POSE,
            }
        } else {
            self.state = GameState::Complete;
            Advance::Finished {
                total_stars: self.total_stars,
            }
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(AdvancePolicy::default())
    }
}
