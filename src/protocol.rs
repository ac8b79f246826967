//! TCP protocol for pose-estimator ↔ game communication.
//!
//! The estimator process owns the camera and the pose model; per camera
//! frame it sends one `Frame` message, with `landmarks: None` when
//! detection failed. The game replies with per-frame scores for overlay
//! display and with pose transitions.

use bytes::Bytes;
use futures::{SinkExt, StreamExt};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tokio::net::TcpStream;
use tokio_util::codec::{Framed, LengthDelimitedCodec};

use crate::pose::Landmark;

// --- Message types ---

/// Estimator → Game
#[derive(Serialize, Deserialize, Debug, Clone)]
pub enum FeedMessage {
    /// Sent once right after connecting.
    Hello { estimator: String },
    /// One camera frame worth of detection output.
    Frame {
        timestamp_us: u64,
        /// None = detection failed for this frame.
        landmarks: Option<Vec<Landmark>>,
    },
    /// Graceful disconnect.
    Bye,
}

/// Game → Estimator
#[derive(Serialize, Deserialize, Debug, Clone)]
pub enum GameMessage {
    /// Handshake reply to Hello.
    Ready,
    /// Per-frame accuracy against the current target pose.
    Score {
        pose_id: String,
        accuracy: u8,
        best: u8,
    },
    /// The session advanced; `next_pose_id: None` means the game finished.
    PoseAdvanced {
        next_pose_id: Option<String>,
        stars: u32,
    },
}

// --- TCP codec helpers ---

pub type MessageStream = Framed<TcpStream, LengthDelimitedCodec>;

/// Create a framed message stream with length-delimited framing.
pub fn message_stream(stream: TcpStream) -> MessageStream {
    let codec = LengthDelimitedCodec::builder()
        .max_frame_length(16 * 1024 * 1024) // 16MB
        .new_codec();
    Framed::new(stream, codec)
}

/// Send a serializable message (bincode + length prefix).
pub async fn send_message<T: Serialize>(stream: &mut MessageStream, msg: &T) -> anyhow::Result<()> {
    let data = bincode::serialize(msg)?;
    stream.send(Bytes::from(data)).await?;
    Ok(())
}

/// Receive and deserialize a message.
pub async fn recv_message<T: DeserializeOwned>(stream: &mut MessageStream) -> anyhow::Result<T> {
    match stream.next().await {
        Some(Ok(bytes)) => Ok(bincode::deserialize(&bytes)?),
        Some(Err(e)) => Err(e.into()),
        None => Err(anyhow::anyhow!("connection closed")),
    }
}
