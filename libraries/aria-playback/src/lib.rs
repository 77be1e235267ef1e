//! Aria - Playback Queue Management
//!
//! Queue and transport policy for the Aria music player.
//!
//! This crate provides:
//! - The playback queue (set/add/play-next/remove/reorder/clear)
//! - Navigation with repeat modes (Off, All, One)
//! - Shuffle with bounded anti-repeat history
//! - Smart shuffle (premium): similarity-weighted picks plus catalog refill
//! - Skip quota for free sessions
//! - Drained events for UI synchronization
//!
//! # Architecture
//!
//! [`QueueController`] is a synchronous state machine with no I/O: one
//! instance per playback session, owned by the hosting application and
//! passed explicitly to every consumer. Audio loading, timers (the hourly
//! skip reset), entitlement lookup, and toasts all live outside; the
//! controller only exposes the mutations they call and the events they
//! render.
//!
//! # Example: Basic Navigation
//!
//! ```rust
//! use aria_core::Song;
//! use aria_playback::{QueueConfig, QueueController, RepeatMode};
//!
//! let mut controller = QueueController::new(QueueConfig::default());
//!
//! let songs = vec![
//!     Song::new("First", 180),
//!     Song::new("Second", 200),
//!     Song::new("Third", 210),
//! ];
//! controller.set_queue(songs, 0);
//!
//! controller.next();
//! assert_eq!(controller.current().unwrap().title, "Second");
//!
//! // Repeat-off stops at the end of the queue
//! controller.next();
//! controller.next();
//! assert_eq!(controller.current().unwrap().title, "Third");
//!
//! controller.set_repeat(RepeatMode::All);
//! controller.next();
//! assert_eq!(controller.current().unwrap().title, "First");
//! ```
//!
//! # Example: Deterministic Shuffle for Tests
//!
//! ```rust
//! use aria_core::Song;
//! use aria_playback::{QueueConfig, QueueController};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let config = QueueConfig {
//!     shuffle: true,
//!     ..Default::default()
//! };
//! let mut controller =
//!     QueueController::with_rng(config, Box::new(StdRng::seed_from_u64(42)));
//!
//! controller.set_queue(vec![Song::new("A", 100), Song::new("B", 100)], 0);
//! controller.next();
//! assert_eq!(controller.position(), 1);
//! ```

mod error;
mod events;
mod history;
mod queue;
pub mod recommend;
mod skips;
pub mod types;

// Public exports
pub use error::{PlaybackError, Result};
pub use events::QueueEvent;
pub use queue::QueueController;
pub use skips::{SkipQuota, PREMIUM_MAX_SKIPS, STANDARD_MAX_SKIPS};
pub use types::{QueueConfig, RepeatMode};
