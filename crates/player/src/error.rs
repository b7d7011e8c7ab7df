use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// Frame rates must be positive.
    #[error("invalid frame rate {0}: must be a positive number of frames per second")]
    InvalidFrameRate(i64),
}
