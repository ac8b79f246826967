//! 端末向けの画面表示
//!
//! ウェルカム・ポーズ・クリアの各画面をテキストで描く。表示だけで
//! セッション状態には触らない。

use crate::game::content::POSES;
use crate::game::session::GameSession;

pub fn print_welcome() {
    println!();
    println!("==============================");
    println!("       StretchQuest");
    println!("  Yoga Adventure for Kids!");
    println!("==============================");
    println!("Learn fun yoga poses, earn stars, and become a yoga champion!");
    println!();
}

/// 挑戦中のポーズの画面（名前・進行度・手順）
pub fn print_pose(session: &GameSession) {
    let pose = match session.current_pose() {
        Some(p) => p,
        None => return,
    };
    let (current, total) = session.progress();

    println!();
    println!("--- Pose {} of {}: {} ---", current, total, pose.name);
    println!("How to do it:");
    for (i, step) in pose.instructions.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }
    println!();
}

/// ポーズクリア時の豆知識と星
pub fn print_pose_complete(fun_fact: &str, stars: u32) {
    println!();
    println!("Amazing job! {}", "★".repeat(stars as usize));
    println!("Did you know? {}", fun_fact);
}

pub fn print_complete(total_stars: u32) {
    println!();
    println!("==============================");
    println!("      Quest Complete!");
    println!("  You're a Yoga Champion!");
    println!("==============================");
    println!("You earned: {} Stars!", total_stars);
    println!();
    println!("What You Learned Today:");
    for pose in &POSES {
        println!("  - {}", pose.name);
    }
    println!();
    println!("Great job today! Come back tomorrow for more yoga fun!");
}
