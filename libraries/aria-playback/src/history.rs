//! Shuffle history tracking
//!
//! Maintains a bounded history of visited queue positions so shuffle can
//! avoid near-term repeats and "previous" can retrace shuffled jumps.

use std::collections::VecDeque;

/// Bounded history of queue positions
///
/// The cap is supplied on each push because it tracks the live queue size
/// (half the queue length): a growing queue widens the window, a shrinking
/// one narrows it.
#[derive(Debug, Clone, Default)]
pub struct ShuffleHistory {
    /// Visited positions (most recent = back)
    positions: VecDeque<usize>,
}

impl ShuffleHistory {
    /// Create empty history
    pub fn new() -> Self {
        Self {
            positions: VecDeque::new(),
        }
    }

    /// Record a position just left, keeping at most `cap` recent entries
    ///
    /// Oldest entries are discarded first. A cap of zero empties the history.
    pub fn push(&mut self, position: usize, cap: usize) {
        self.positions.push_back(position);
        while self.positions.len() > cap {
            self.positions.pop_front();
        }
    }

    /// Pop the most recently visited position
    pub fn pop(&mut self) -> Option<usize> {
        self.positions.pop_back()
    }

    /// Whether `position` was visited recently
    pub fn contains(&self, position: usize) -> bool {
        self.positions.contains(&position)
    }

    /// All recorded positions (oldest first)
    pub fn snapshot(&self) -> Vec<usize> {
        self.positions.iter().copied().collect()
    }

    /// Number of recorded positions
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Check if history is empty
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Forget all recorded positions
    pub fn clear(&mut self) {
        self.positions.clear();
    }
}
