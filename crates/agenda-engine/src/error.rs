//! Error types for agenda-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgendaError {
    #[error("Invalid time '{0}': expected HH:MM or HH:MM:SS")]
    InvalidTime(String),

    #[error("Invalid block records: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AgendaError>;
