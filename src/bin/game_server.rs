//! Game server: accepts a pose-estimator connection over TCP and drives a
//! full game session from streamed landmark frames.
//!
//! Screens and progress go to the terminal; per-frame scores go back to
//! the estimator for overlay display.

use std::time::Instant;

use anyhow::{bail, Result};
use tokio::net::{TcpListener, TcpStream};

use stretchquest::config::Config;
use stretchquest::game::screen;
use stretchquest::game::{Advance, GameSession, STARS_PER_POSE};
use stretchquest::protocol::{self, FeedMessage, GameMessage};

const CONFIG_PATH: &str = "config.toml";

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load_or_default(CONFIG_PATH);

    println!("StretchQuest game server {}", env!("GIT_VERSION"));
    println!("Listen: {}", config.feed.listen_addr);
    println!(
        "Advance: threshold={}% hold_frames={}",
        config.game.advance_threshold, config.game.hold_frames
    );
    println!();

    let listener = TcpListener::bind(&config.feed.listen_addr).await?;

    loop {
        let (stream, addr) = listener.accept().await?;
        println!("Estimator connected: {}", addr);
        if let Err(e) = run_session(stream, &config).await {
            eprintln!("Session error: {:#}", e);
        }
        println!("Waiting for next estimator...");
    }
}

async fn run_session(stream: TcpStream, config: &Config) -> Result<()> {
    let mut stream = protocol::message_stream(stream);

    match protocol::recv_message::<FeedMessage>(&mut stream).await? {
        FeedMessage::Hello { estimator } => println!("Estimator: {}", estimator),
        other => bail!("expected Hello, got {:?}", other),
    }
    protocol::send_message(&mut stream, &GameMessage::Ready).await?;

    let mut session = GameSession::new(config.advance_policy());
    session.start();

    screen::print_welcome();
    screen::print_pose(&session);

    // FPS計測
    let mut frame_count = 0u32;
    let mut fps_timer = Instant::now();
    let mut banner_shown = false;

    loop {
        let landmarks = match protocol::recv_message::<FeedMessage>(&mut stream).await? {
            FeedMessage::Frame { landmarks, .. } => landmarks,
            FeedMessage::Bye => {
                println!("Estimator left");
                break;
            }
            FeedMessage::Hello { .. } => bail!("unexpected Hello mid-session"),
        };

        let pose = match session.current_pose() {
            Some(p) => p,
            None => break,
        };

        let lm = landmarks.as_deref().unwrap_or(&[]);
        let (accuracy, advance) = session.score_frame(lm);

        // クリア直後はセッションのベストがリセット済みなので送信値はmaxを取る
        let best = session.best_accuracy().max(accuracy);
        protocol::send_message(
            &mut stream,
            &GameMessage::Score {
                pose_id: pose.id.to_string(),
                accuracy,
                best,
            },
        )
        .await?;

        match advance {
            Advance::Stayed => {
                if !banner_shown && accuracy >= config.game.display_threshold {
                    println!("Great match! ({}%)", accuracy);
                    banner_shown = true;
                }
            }
            Advance::PoseCompleted { stars } => {
                screen::print_pose_complete(pose.fun_fact, stars);
                let next_pose_id = session.current_pose().map(|p| p.id.to_string());
                protocol::send_message(
                    &mut stream,
                    &GameMessage::PoseAdvanced {
                        next_pose_id,
                        stars,
                    },
                )
                .await?;
                banner_shown = false;
                screen::print_pose(&session);
            }
            Advance::Finished { total_stars } => {
                screen::print_pose_complete(pose.fun_fact, STARS_PER_POSE);
                protocol::send_message(
                    &mut stream,
                    &GameMessage::PoseAdvanced {
                        next_pose_id: None,
                        stars: STARS_PER_POSE,
                    },
                )
                .await?;
                screen::print_complete(total_stars);
                break;
            }
        }

        // FPS表示（1秒に1回）
        frame_count += 1;
        let elapsed = fps_timer.elapsed().as_secs_f32();
        if elapsed >= 1.0 {
            if let Some(current) = session.current_pose() {
                println!(
                    "FPS: {:.1} | {}: {}% (best {}%)",
                    frame_count as f32 / elapsed,
                    current.name,
                    accuracy,
                    session.best_accuracy()
                );
            }
            frame_count = 0;
            fps_timer = Instant::now();
        }
    }

    Ok(())
}
