//! Harness error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("fixture value {0:?} is not a decimal unsigned integer")]
    BadValue(String),
    #[error("unsupported value width {0} (expected 1, 2, 4, 8, or 16 bytes)")]
    UnsupportedWidth(usize),
}
