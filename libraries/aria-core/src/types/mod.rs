//! Domain types for Aria

mod album;
mod artist;
mod ids;
mod song;

pub use album::AlbumRef;
pub use artist::ArtistRef;
pub use ids::{AlbumId, ArtistId, SongId};
pub use song::Song;
