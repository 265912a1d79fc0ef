//! エラー型定義

use thiserror::Error;

use crate::types::SlotKey;
use crate::workflow::{EventKind, Phase};

/// 抽出開始ガードの失敗（ユーザーに表示するメッセージを持つ）
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please select an image before extracting metadata.")]
    MissingImage,

    #[error("Please select both images before extracting metadata.")]
    MissingImages,
}

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("invalid transition: {event:?} is not accepted in {phase:?}")]
    InvalidTransition { phase: Phase, event: EventKind },

    #[error("slot {0} is not used in the current mode")]
    SlotInactive(SlotKey),

    #[error("{file_name} is not an image ({mime_type})")]
    NotAnImage { file_name: String, mime_type: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
