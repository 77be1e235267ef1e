//! Core types for queue management

use serde::{Deserialize, Serialize};

/// Repeat mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepeatMode {
    /// Stop when queue ends
    Off,

    /// Loop entire queue
    All,

    /// Loop current song only
    One,
}

impl RepeatMode {
    /// Cycle to the next mode (Off -> All -> One -> Off)
    ///
    /// Matches the single repeat button in the player UI.
    pub fn cycled(self) -> Self {
        match self {
            RepeatMode::Off => RepeatMode::All,
            RepeatMode::All => RepeatMode::One,
            RepeatMode::One => RepeatMode::Off,
        }
    }
}

/// Configuration for the queue controller
///
/// Captured at construction from the playback session. `premium` is the
/// entitlement flag injected by the hosting application; the controller
/// never derives it from user records itself.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct QueueConfig {
    /// Whether the session holds premium entitlement
    pub premium: bool,

    /// Initial shuffle state (default: off)
    pub shuffle: bool,

    /// Initial repeat mode (default: Off)
    pub repeat: RepeatMode,

    /// Initial smart shuffle state (default: off)
    ///
    /// Only effective while shuffle is on and the session is premium.
    pub smart_shuffle: bool,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            premium: false,
            shuffle: false,
            repeat: RepeatMode::Off,
            smart_shuffle: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = QueueConfig::default();
        assert!(!config.premium);
        assert!(!config.shuffle);
        assert_eq!(config.repeat, RepeatMode::Off);
        assert!(!config.smart_shuffle);
    }

    #[test]
    fn repeat_mode_cycles() {
        assert_eq!(RepeatMode::Off.cycled(), RepeatMode::All);
        assert_eq!(RepeatMode::All.cycled(), RepeatMode::One);
        assert_eq!(RepeatMode::One.cycled(), RepeatMode::Off);
    }
}
