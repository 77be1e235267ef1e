//! Skip quota tracking
//!
//! Free sessions get a bounded number of skips per hour; premium sessions
//! are effectively unlimited. The hourly reset timer lives in the hosting
//! application, which calls [`SkipQuota::reset`] on its cadence - the quota
//! itself owns no clock.

use serde::{Deserialize, Serialize};

/// Skip allowance for premium sessions (effectively unlimited)
pub const PREMIUM_MAX_SKIPS: u32 = 999;

/// Skip allowance for free sessions per reset window
pub const STANDARD_MAX_SKIPS: u32 = 6;

/// Per-session skip counter with an entitlement-derived limit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkipQuota {
    count: u32,
    max: u32,
    premium: bool,
}

impl SkipQuota {
    /// Create a quota for a session with the given entitlement
    pub fn new(premium: bool) -> Self {
        Self {
            count: 0,
            max: if premium {
                PREMIUM_MAX_SKIPS
            } else {
                STANDARD_MAX_SKIPS
            },
            premium,
        }
    }

    /// Whether another skip is currently allowed
    pub fn can_skip(&self) -> bool {
        self.premium || self.count < self.max
    }

    /// Record a user-initiated skip
    ///
    /// Premium sessions are not counted.
    pub fn record(&mut self) {
        if !self.premium {
            self.count += 1;
            tracing::debug!("skip recorded: {}/{}", self.count, self.max);
        }
    }

    /// Reset the counter (called by the hosting application's hourly timer)
    pub fn reset(&mut self) {
        self.count = 0;
    }

    /// Skips used since the last reset
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Maximum skips per window
    pub fn max(&self) -> u32 {
        self.max
    }
}
