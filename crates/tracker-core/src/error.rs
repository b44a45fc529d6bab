use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("failed to load messages from {path}: {reason}")]
    SheetLoad { path: PathBuf, reason: String },

    #[error("failed to fetch messages: {0}")]
    Fetch(String),

    #[error("write operation failed: {0}")]
    Write(String),

    #[error("no write endpoint configured; running read-only from the spreadsheet export")]
    ReadOnly,

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
