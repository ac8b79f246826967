//! 録画したランドマークフレーム（JSON Lines）でセッションをオフライン再生する
//!
//! 1行 = 1フレーム: `{"landmarks":[{"x":0.5,"y":0.5},...]}`
//! `landmarks` が null の行は未検出フレームとして扱う。

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader};

use stretchquest::config::Config;
use stretchquest::game::screen;
use stretchquest::game::{Advance, GameSession};
use stretchquest::pose::Landmark;

const CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Deserialize)]
struct RecordedFrame {
    landmarks: Option<Vec<Landmark>>,
}

fn main() -> Result<()> {
    let path = env::args()
        .nth(1)
        .context("usage: replay <frames.jsonl>")?;
    let config = Config::load_or_default(CONFIG_PATH);

    let file = File::open(&path).with_context(|| format!("failed to open {}", path))?;
    let reader = BufReader::new(file);

    let mut session = GameSession::new(config.advance_policy());
    session.start();

    screen::print_welcome();
    screen::print_pose(&session);

    let mut frame_count = 0u64;
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        frame_count += 1;

        let frame: RecordedFrame = serde_json::from_str(&line)
            .with_context(|| format!("invalid frame at line {}", frame_count))?;

        let pose = match session.current_pose() {
            Some(p) => p,
            None => break,
        };

        let landmarks = frame.landmarks.as_deref().unwrap_or(&[]);
        let (accuracy, advance) = session.score_frame(landmarks);

        match advance {
            Advance::Stayed => {}
            Advance::PoseCompleted { stars } => {
                println!("frame {}: クリア (一致度 {}%)", frame_count, accuracy);
                screen::print_pose_complete(pose.fun_fact, stars);
                screen::print_pose(&session);
            }
            Advance::Finished { total_stars } => {
                println!("frame {}: クリア (一致度 {}%)", frame_count, accuracy);
                screen::print_pose_complete(pose.fun_fact, stretchquest::game::STARS_PER_POSE);
                screen::print_complete(total_stars);
                return Ok(());
            }
        }
    }

    let (current, total) = session.progress();
    bail!(
        "{}フレームを再生しましたがクリアできませんでした (ポーズ {}/{}, ベスト {}%)",
        frame_count,
        current,
        total,
        session.best_accuracy()
    );
}
