//! Playback queue controller
//!
//! Owns the ordered playback sequence, current position, shuffle/repeat
//! settings, shuffle history, and skip quota. All operations run
//! synchronously on the caller's thread; the controller never blocks and
//! never touches I/O, so it is safe to call `next`/`previous` again before a
//! prior audio load completes.

use crate::{
    error::{PlaybackError, Result},
    events::QueueEvent,
    history::ShuffleHistory,
    recommend,
    skips::SkipQuota,
    types::{QueueConfig, RepeatMode},
};
use aria_core::{Song, SongId};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};
use std::collections::HashSet;

/// Refill the queue when fewer than this many entries remain from the
/// current position to the end (smart shuffle only)
const SMART_REFILL_THRESHOLD: usize = 3;

/// Maximum recommendations appended per refill
const SMART_REFILL_COUNT: usize = 2;

/// Playback queue controller
///
/// One instance per playback session, passed explicitly to every consumer.
/// The playback surface reads [`current`](Self::current) after each
/// interaction and drains [`QueueEvent`]s for UI feedback.
pub struct QueueController {
    /// Play order; duplicates allowed
    queue: Vec<Song>,

    /// Index of the current song; 0 when the queue is empty
    position: usize,

    shuffle: bool,
    repeat: RepeatMode,
    smart_shuffle: bool,
    premium: bool,

    /// Recently visited positions, capped at half the queue length
    history: ShuffleHistory,

    /// Per-session skip allowance
    skips: SkipQuota,

    /// Read-only catalog used as the recommendation pool
    catalog: Vec<Song>,

    /// Events accumulated since the last drain
    pending_events: Vec<QueueEvent>,

    /// Injectable randomness source for shuffle and recommendations
    rng: Box<dyn RngCore>,
}

impl QueueController {
    /// Create a controller with entropy-seeded randomness
    pub fn new(config: QueueConfig) -> Self {
        Self::with_rng(config, Box::new(StdRng::from_entropy()))
    }

    /// Create a controller with a caller-supplied randomness source
    ///
    /// Tests seed a `StdRng` here for deterministic shuffle behavior.
    pub fn with_rng(config: QueueConfig, rng: Box<dyn RngCore>) -> Self {
        Self {
            queue: Vec::new(),
            position: 0,
            shuffle: config.shuffle,
            repeat: config.repeat,
            smart_shuffle: config.smart_shuffle,
            premium: config.premium,
            history: ShuffleHistory::new(),
            skips: SkipQuota::new(config.premium),
            catalog: Vec::new(),
            pending_events: Vec::new(),
            rng,
        }
    }

    // ===== Queue mutation =====

    /// Replace the queue entirely
    ///
    /// `start_index` is clamped into range; an empty `songs` leaves the
    /// controller with no current song. Shuffle history is cleared, settings
    /// are kept.
    pub fn set_queue(&mut self, songs: Vec<Song>, start_index: usize) {
        self.position = if songs.is_empty() {
            0
        } else {
            start_index.min(songs.len() - 1)
        };
        self.queue = songs;
        self.history.clear();
        tracing::debug!(
            "queue replaced: {} songs, starting at {}",
            self.queue.len(),
            self.position
        );
        self.emit_queue_changed();
        self.emit_song_changed();
    }

    /// Append a song to the end of the queue
    pub fn add_to_queue(&mut self, song: Song) {
        let song_id = song.id.clone();
        self.queue.push(song);
        self.pending_events.push(QueueEvent::SongAdded { song_id });
        self.emit_queue_changed();
    }

    /// Insert a song immediately after the current position
    ///
    /// The inserted song becomes the next sequential play; the current
    /// position does not move.
    pub fn play_next(&mut self, song: Song) {
        let song_id = song.id.clone();
        let at = (self.position + 1).min(self.queue.len());
        self.queue.insert(at, song);
        self.pending_events
            .push(QueueEvent::PlayNextQueued { song_id });
        self.emit_queue_changed();
    }

    /// Remove the song at `index`, returning it
    ///
    /// Out-of-range indices are a defensive no-op returning `None`. If the
    /// removal is before the current position, the position shifts left to
    /// keep tracking the same song. Removing the current song clamps the
    /// position into range without auto-advancing playback - the caller
    /// decides whether to load the song now at that position.
    pub fn remove_from_queue(&mut self, index: usize) -> Option<Song> {
        if index >= self.queue.len() {
            return None;
        }
        let song = self.queue.remove(index);

        if index < self.position {
            self.position -= 1;
        } else if self.queue.is_empty() {
            self.position = 0;
        } else if index == self.position {
            self.position = self.position.min(self.queue.len() - 1);
        }

        self.emit_queue_changed();
        Some(song)
    }

    /// Move the song at `from_index` to `to_index`
    ///
    /// The current position keeps tracking its logical song across the move.
    pub fn reorder_queue(&mut self, from_index: usize, to_index: usize) -> Result<()> {
        let len = self.queue.len();
        if from_index >= len {
            return Err(PlaybackError::IndexOutOfBounds(from_index));
        }
        if to_index >= len {
            return Err(PlaybackError::IndexOutOfBounds(to_index));
        }
        if from_index == to_index {
            return Ok(());
        }

        let song = self.queue.remove(from_index);
        self.queue.insert(to_index, song);

        if from_index == self.position {
            self.position = to_index;
        } else if from_index < self.position && self.position <= to_index {
            self.position -= 1;
        } else if to_index <= self.position && self.position < from_index {
            self.position += 1;
        }

        self.emit_queue_changed();
        Ok(())
    }

    /// Empty the queue
    ///
    /// Position and history reset; shuffle/repeat/smart-shuffle settings are
    /// deliberately kept for the next queue.
    pub fn clear_queue(&mut self) {
        self.queue.clear();
        self.position = 0;
        self.history.clear();
        self.emit_queue_changed();
    }

    /// Set the recommendation pool used by smart shuffle refills
    pub fn set_catalog(&mut self, songs: Vec<Song>) {
        self.catalog = songs;
    }

    // ===== Navigation =====

    /// Advance to the next song according to the active policy
    ///
    /// Repeat-one keeps the position; the caller is expected to restart the
    /// current song's playback rather than call `next` again. At the end of
    /// a non-shuffled queue, repeat-all wraps to the start and repeat-off
    /// stays put (terminal state, not an error). Empty queue is a no-op.
    pub fn next(&mut self) {
        if self.queue.is_empty() {
            return;
        }
        if self.repeat == RepeatMode::One {
            return;
        }

        if !self.shuffle {
            if self.position == self.queue.len() - 1 {
                if self.repeat == RepeatMode::All {
                    self.position = 0;
                    tracing::debug!("repeat-all wrapped to start");
                    self.pending_events.push(QueueEvent::QueueRestarted);
                    self.emit_song_changed();
                } else {
                    self.pending_events.push(QueueEvent::EndOfQueue);
                }
                return;
            }
            self.position += 1;
            self.emit_song_changed();
            return;
        }

        self.position = self.pick_shuffle_index();
        self.emit_song_changed();
    }

    /// Step back to the previous song
    ///
    /// While shuffling this retraces the shuffle history, falling back to a
    /// uniformly random pick once the history is exhausted. Otherwise it
    /// steps sequentially, always wrapping from the first song to the last
    /// regardless of repeat mode. Empty queue is a no-op.
    pub fn previous(&mut self) {
        if self.queue.is_empty() {
            return;
        }

        if self.shuffle {
            self.position = match self.history.pop() {
                // Guard against positions recorded before the queue shrank
                Some(index) if index < self.queue.len() => index,
                _ => self.rng.gen_range(0..self.queue.len()),
            };
        } else {
            self.position = if self.position == 0 {
                self.queue.len() - 1
            } else {
                self.position - 1
            };
        }
        self.emit_song_changed();
    }

    /// Jump to an explicitly selected queue entry
    ///
    /// Records the outgoing position in the shuffle history so `previous`
    /// can return to it.
    pub fn jump_to(&mut self, index: usize) -> Result<()> {
        if index >= self.queue.len() {
            return Err(PlaybackError::IndexOutOfBounds(index));
        }
        let cap = self.history_cap();
        self.history.push(self.position, cap);
        self.position = index;
        self.emit_song_changed();
        Ok(())
    }

    // ===== Settings =====

    /// Enable or disable shuffle
    pub fn set_shuffle(&mut self, shuffle: bool) {
        self.shuffle = shuffle;
    }

    /// Set the repeat mode
    pub fn set_repeat(&mut self, repeat: RepeatMode) {
        self.repeat = repeat;
    }

    /// Enable or disable smart shuffle
    ///
    /// Accepted in any state, but only effective while shuffle is on and
    /// the session is premium.
    pub fn set_smart_shuffle(&mut self, smart_shuffle: bool) {
        self.smart_shuffle = smart_shuffle;
    }

    // ===== Skip quota =====

    /// Whether the session may skip right now
    ///
    /// Policy check only - the controller never blocks a `next` call itself.
    /// The caller checks this before invoking `next` and decides whether to
    /// refuse the skip or show an upsell.
    pub fn can_skip(&self) -> bool {
        self.skips.can_skip()
    }

    /// Count a user-initiated skip against the quota (free sessions only)
    pub fn record_skip(&mut self) {
        self.skips.record();
    }

    /// Reset the skip counter
    ///
    /// Invoked by the hosting application on its hourly cadence; the
    /// controller owns no timer.
    pub fn reset_skip_count(&mut self) {
        self.skips.reset();
        self.pending_events.push(QueueEvent::SkipsReset);
    }

    // ===== Accessors =====

    /// The song at the current position
    pub fn current(&self) -> Option<&Song> {
        self.queue.get(self.position)
    }

    /// Current queue position
    pub fn position(&self) -> usize {
        self.position
    }

    /// All queued songs in play order
    pub fn queue(&self) -> &[Song] {
        &self.queue
    }

    /// Number of queued songs
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Check if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Whether shuffle is enabled
    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    /// Active repeat mode
    pub fn repeat(&self) -> RepeatMode {
        self.repeat
    }

    /// Whether smart shuffle is enabled (independent of entitlement)
    pub fn smart_shuffle(&self) -> bool {
        self.smart_shuffle
    }

    /// Whether the session holds premium entitlement
    pub fn is_premium(&self) -> bool {
        self.premium
    }

    /// Skips used since the last reset
    pub fn skip_count(&self) -> u32 {
        self.skips.count()
    }

    /// Maximum skips per reset window
    pub fn max_skips(&self) -> u32 {
        self.skips.max()
    }

    /// Recently visited positions, oldest first
    pub fn shuffle_history(&self) -> Vec<usize> {
        self.history.snapshot()
    }

    /// Drain all pending events
    ///
    /// Returns everything emitted since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<QueueEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Selection internals =====

    /// Pick the next position under shuffle
    ///
    /// Avoids recently visited positions; once every candidate has been
    /// visited the history resets and the pick is uniform over the whole
    /// queue. Smart shuffle (premium only) first tops up a nearly-exhausted
    /// queue with recommendations, then prefers candidates sharing genre or
    /// artist with the current song. The outgoing position is recorded after
    /// selection.
    fn pick_shuffle_index(&mut self) -> usize {
        let smart = self.smart_shuffle && self.premium;
        if smart {
            self.refill_from_catalog();
        }

        let len = self.queue.len();
        let pool: Vec<usize> = (0..len)
            .filter(|&i| i != self.position && !self.history.contains(i))
            .collect();

        if pool.is_empty() {
            self.history.clear();
            return self.rng.gen_range(0..len);
        }

        let chosen = if smart {
            let current = &self.queue[self.position];
            let similar: Vec<usize> = pool
                .iter()
                .copied()
                .filter(|&i| {
                    let song = &self.queue[i];
                    song.same_genre(current) || song.same_artist(current)
                })
                .collect();
            let candidates = if similar.is_empty() { &pool } else { &similar };
            match candidates.choose(&mut self.rng) {
                Some(&index) => index,
                None => pool[0],
            }
        } else {
            match pool.choose(&mut self.rng) {
                Some(&index) => index,
                None => pool[0],
            }
        };

        let cap = self.history_cap();
        self.history.push(self.position, cap);
        chosen
    }

    /// Append up to two recommendations when the queue is nearly exhausted
    ///
    /// Keyed on the current song, excluding everything already queued, drawn
    /// from the injected catalog.
    fn refill_from_catalog(&mut self) {
        if self.queue.len() - self.position >= SMART_REFILL_THRESHOLD {
            return;
        }
        let Some(current) = self.queue.get(self.position).cloned() else {
            return;
        };

        let exclude: HashSet<SongId> = self.queue.iter().map(|s| s.id.clone()).collect();
        let recommendations =
            recommend::recommend(&current, &exclude, &self.catalog, &mut self.rng);
        let added: Vec<Song> = recommendations
            .into_iter()
            .take(SMART_REFILL_COUNT)
            .collect();
        if added.is_empty() {
            return;
        }

        tracing::debug!("smart shuffle appended {} recommended songs", added.len());
        self.pending_events.push(QueueEvent::SmartRefill {
            added: added.len(),
        });
        self.queue.extend(added);
        self.emit_queue_changed();
    }

    /// History window: half the queue length, floored
    fn history_cap(&self) -> usize {
        self.queue.len() / 2
    }

    fn emit_song_changed(&mut self) {
        if let Some(song) = self.queue.get(self.position) {
            self.pending_events.push(QueueEvent::SongChanged {
                song_id: song.id.clone(),
                position: self.position,
            });
        }
    }

    fn emit_queue_changed(&mut self) {
        self.pending_events.push(QueueEvent::QueueChanged {
            length: self.queue.len(),
        });
    }
}

impl Default for QueueController {
    fn default() -> Self {
        Self::new(QueueConfig::default())
    }
}
