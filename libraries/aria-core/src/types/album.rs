/// Album reference embedded in song records
use crate::types::AlbumId;
use serde::{Deserialize, Serialize};

/// Album summary as embedded in a [`Song`](crate::types::Song)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumRef {
    /// Unique album identifier
    pub id: AlbumId,

    /// Album title
    pub title: String,

    /// Cover art URL
    pub cover_url: Option<String>,
}

impl AlbumRef {
    /// Create an album reference
    pub fn new(id: AlbumId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            cover_url: None,
        }
    }
}
