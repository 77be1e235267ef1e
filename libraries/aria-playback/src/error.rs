//! Error types for playback management

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Index out of bounds
    #[error("Index out of bounds: {0}")]
    IndexOutOfBounds(usize),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
