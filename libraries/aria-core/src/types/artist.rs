/// Artist reference embedded in song records
use crate::types::ArtistId;
use serde::{Deserialize, Serialize};

/// Artist summary as embedded in a [`Song`](crate::types::Song)
///
/// The catalog service denormalizes artist name and image into each song
/// record so the player never needs a second lookup for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistRef {
    /// Unique artist identifier
    pub id: ArtistId,

    /// Artist display name
    pub name: String,

    /// Artist image URL
    pub image_url: Option<String>,
}

impl ArtistRef {
    /// Create an artist reference
    pub fn new(id: ArtistId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image_url: None,
        }
    }
}
