//! Error taxonomy for transcript operations

use thiserror::Error;

/// Errors produced by the transcript core
#[derive(Error, Debug)]
pub enum TranscriptError {
    #[error("invalid timestamp format: {0} (expected MM:SS or HH:MM:SS)")]
    InvalidTimestamp(String),

    #[error("invalid cue: {0}")]
    InvalidCue(String),

    #[error("match threshold must be in (0.0, 1.0], got {0}")]
    InvalidThreshold(f64),

    #[error("claim is empty")]
    EmptyClaim,

    #[error("transcript is empty")]
    EmptyInput,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TranscriptError>;
