use thiserror::Error;

/// Failure of a single player command. These never leave the adapter boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AdapterError {
    #[error("player is not mounted")]
    NotMounted,

    #[error("player has not finished loading")]
    NotLoaded,

    #[error("seek to {0}ms is out of range")]
    SeekOutOfRange(u64),

    #[error("codec error: {0}")]
    Codec(String),

    #[error("backend error: {0}")]
    Backend(String),
}
