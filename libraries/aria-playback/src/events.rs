//! Queue events
//!
//! Event-based communication for UI synchronization. The controller
//! accumulates events synchronously as operations run; the playback surface
//! drains them after each interaction to update the audio element and show
//! toasts. Events are informational - no controller behavior depends on a
//! consumer observing them.

use aria_core::SongId;
use serde::{Deserialize, Serialize};

/// Events emitted by the queue controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum QueueEvent {
    /// The current song changed; the playback surface should load it
    SongChanged {
        /// ID of the new current song
        song_id: SongId,
        /// New queue position
        position: usize,
    },

    /// Queue contents changed (set/add/remove/reorder/clear/refill)
    QueueChanged {
        /// New queue length
        length: usize,
    },

    /// A song was appended to the end of the queue
    SongAdded {
        /// ID of the appended song
        song_id: SongId,
    },

    /// A song was inserted to play immediately after the current one
    PlayNextQueued {
        /// ID of the inserted song
        song_id: SongId,
    },

    /// Repeat-all wrapped playback back to the start of the queue
    QueueRestarted,

    /// Repeat-off playback reached the final song; no further advancement
    EndOfQueue,

    /// Smart shuffle appended recommended songs to keep the queue flowing
    SmartRefill {
        /// Number of songs appended
        added: usize,
    },

    /// The skip allowance was reset
    SkipsReset,
}
