use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::game::AdvancePolicy;

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub feed: FeedConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GameConfig {
    /// 自動クリアの一致度閾値（以上で判定）
    #[serde(default = "default_advance_threshold")]
    pub advance_threshold: u8,
    /// 閾値を連続で満たすべきフレーム数
    #[serde(default = "default_hold_frames")]
    pub hold_frames: u32,
    /// 「いいね」表示を出す一致度閾値
    #[serde(default = "default_display_threshold")]
    pub display_threshold: u8,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FeedConfig {
    /// 推定器からの接続を待ち受けるアドレス
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

fn default_advance_threshold() -> u8 {
    80
}
fn default_hold_frames() -> u32 {
    1
}
fn default_display_threshold() -> u8 {
    70
}
fn default_listen_addr() -> String {
    "127.0.0.1:9770".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            advance_threshold: default_advance_threshold(),
            hold_frames: default_hold_frames(),
            display_threshold: default_display_threshold(),
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// ファイルがなければ既定値で起動する
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(&path) {
            Ok(config) => config,
            Err(_) => {
                eprintln!(
                    "{} が読めないため既定値で起動します",
                    path.as_ref().display()
                );
                Config::default()
            }
        }
    }

    /// ゲーム設定からクリア判定ポリシーを作る
    pub fn advance_policy(&self) -> AdvancePolicy {
        AdvancePolicy {
            threshold: self.game.advance_threshold,
            hold_frames: self.game.hold_frames,
        }
    }
}
