//! Motor sequencing configuration from TOML.

use serde::Deserialize;

/// Upper bound for the enable settle delay, in microseconds.
pub const MAX_SETTLE_US: u32 = 10_000;

/// Bridge wake time after nSLEEP rises.
const DEFAULT_SETTLE_US: u32 = 50;

/// Power sequencing settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MotorConfig {
    /// Busy-wait after raising the enable line, in microseconds.
    pub settle_us: u32,
}

impl Default for MotorConfig {
    fn default() -> Self {
        Self {
            settle_us: DEFAULT_SETTLE_US,
        }
    }
}
