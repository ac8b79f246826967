pub mod content;
pub mod screen;
pub mod session;

pub use content::{pose_by_id, Difficulty, PoseContent, POSES};
pub use session::{Advance, AdvancePolicy, GameSession, GameState, STARS_PER_POSE};
