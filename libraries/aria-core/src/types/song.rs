/// Song domain type
use crate::types::{AlbumRef, ArtistRef, SongId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A song record from the catalog
///
/// Immutable from the player's perspective - playback components only ever
/// read song records, never mutate them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    /// Unique song identifier
    pub id: SongId,

    /// Song title
    pub title: String,

    /// Duration in seconds
    pub duration_secs: u32,

    /// Genre label
    pub genre: Option<String>,

    /// Streaming URL for the audio file
    pub audio_url: Option<String>,

    /// Artist summary
    pub artist: Option<ArtistRef>,

    /// Album summary
    pub album: Option<AlbumRef>,

    /// When the song was added to the catalog
    pub created_at: DateTime<Utc>,
}

impl Song {
    /// Create a new song with minimal metadata
    pub fn new(title: impl Into<String>, duration_secs: u32) -> Self {
        Self {
            id: SongId::generate(),
            title: title.into(),
            duration_secs,
            genre: None,
            audio_url: None,
            artist: None,
            album: None,
            created_at: Utc::now(),
        }
    }

    /// Get the song duration as a Duration
    pub fn duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.duration_secs))
    }

    /// Get the artist display name, if the record carries one
    pub fn artist_name(&self) -> Option<&str> {
        self.artist.as_ref().map(|a| a.name.as_str())
    }

    /// Whether both songs carry the same genre label
    ///
    /// Songs without a genre never match, including against each other.
    pub fn same_genre(&self, other: &Song) -> bool {
        match (&self.genre, &other.genre) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Whether both songs are credited to the same artist
    pub fn same_artist(&self, other: &Song) -> bool {
        match (self.artist_name(), other.artist_name()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}
