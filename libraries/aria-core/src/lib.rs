//! Aria Core
//!
//! Domain types shared across the Aria music player.
//!
//! The catalog, playback, and UI layers all exchange the same record shapes:
//! [`Song`] with its embedded [`ArtistRef`] and [`AlbumRef`] summaries, keyed
//! by string-backed ID newtypes.
//!
//! # Example
//!
//! ```rust
//! use aria_core::{ArtistId, ArtistRef, Song};
//!
//! let mut song = Song::new("My Favorite Song", 240);
//! song.genre = Some("Romantic Songs".to_string());
//! song.artist = Some(ArtistRef::new(ArtistId::new("artist-1"), "Asha Bhosle"));
//!
//! assert_eq!(song.artist_name(), Some("Asha Bhosle"));
//! ```

#![forbid(unsafe_code)]

pub mod types;

// Re-export commonly used types
pub use types::{AlbumId, AlbumRef, ArtistId, ArtistRef, Song, SongId};
