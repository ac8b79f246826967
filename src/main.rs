use anyhow::Result;
use std::fs;
use std::io::{self, Write};

use stretchquest::game::content::POSES;
use stretchquest::pose::Landmark;
use stretchquest::scoring::{score, score_breakdown, MIN_LANDMARKS};

const DEFAULT_POSE: &str = "tree";

fn main() -> Result<()> {
    println!("=== StretchQuest - Scorer Probe ===");
    let ids: Vec<&str> = POSES.iter().map(|p| p.id).collect();
    println!("収録ポーズ: {}", ids.join(" / "));
    println!();
    println!("コマンド:");
    println!("  l <file.json>  - ランドマークJSONを読み込む (配列形式)");
    println!("  p <pose_id>    - 採点対象のポーズを設定");
    println!("  s              - 採点");
    println!("  b              - メトリクス内訳を表示");
    println!("  q              - 終了");
    println!();

    let mut landmarks: Vec<Landmark> = Vec::new();
    let mut pose_id = DEFAULT_POSE.to_string();

    loop {
        print!("[{}] > ", pose_id);
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let parts: Vec<&str> = input.trim().split_whitespace().collect();

        if parts.is_empty() {
            continue;
        }

        match parts[0] {
            "l" if parts.len() == 2 => {
                match load_landmarks(parts[1]) {
                    Ok(loaded) => {
                        println!("{}個のランドマークを読み込みました", loaded.len());
                        if loaded.len() < MIN_LANDMARKS {
                            println!("{}個未満のため未検出(0点)扱いになります", MIN_LANDMARKS);
                        }
                        landmarks = loaded;
                    }
                    Err(e) => println!("読み込み失敗: {}", e),
                }
            }
            "p" if parts.len() == 2 => {
                pose_id = parts[1].to_string();
                if !ids.contains(&pose_id.as_str()) {
                    println!("未知のポーズID: {} (採点すると0点になります)", pose_id);
                }
            }
            "s" => {
                println!("一致度: {}%", score(&landmarks, &pose_id));
            }
            "b" => {
                let breakdown = score_breakdown(&landmarks, &pose_id);
                if breakdown.is_empty() {
                    println!("内訳なし (未検出または未知のポーズ)");
                } else {
                    for m in &breakdown {
                        println!(
                            "  {:<14} 計測 {:>6.1}度  目標 {:>5.1}度  スコア {:>5.1}",
                            m.metric.name(),
                            m.measured,
                            m.target,
                            m.score
                        );
                    }
                    println!("一致度: {}%", score(&landmarks, &pose_id));
                }
            }
            "q" => {
                println!("終了します");
                break;
            }
            _ => {
                println!("不明なコマンド: {}", parts[0]);
            }
        }
    }

    Ok(())
}

fn load_landmarks(path: &str) -> Result<Vec<Landmark>> {
    let content = fs::read_to_string(path)?;
    let landmarks: Vec<Landmark> = serde_json::from_str(&content)?;
    Ok(landmarks)
}
