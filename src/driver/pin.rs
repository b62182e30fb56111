//! Pin identifiers, levels and the driver trait.

use serde::Deserialize;

use crate::error::DriverError;

/// Physical pin identifier (port-relative GPIO number).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct PinId(pub u8);

/// Logical role of an H-bridge control line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinRole {
    /// Sleep/enable line (nSLEEP). High wakes the bridge.
    Enable,
    /// First phase input (IN1).
    PhaseA,
    /// Second phase input (IN2).
    PhaseB,
}

impl PinRole {
    /// All roles, in initialisation order.
    pub const ALL: [PinRole; 3] = [PinRole::Enable, PinRole::PhaseA, PinRole::PhaseB];

    /// Role name for display/debugging.
    pub fn name(self) -> &'static str {
        match self {
            PinRole::Enable => "enable",
            PinRole::PhaseA => "phase_a",
            PinRole::PhaseB => "phase_b",
        }
    }
}

/// Logic level of an output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Driven low (inactive).
    #[default]
    Low,
    /// Driven high (active).
    High,
}

impl Level {
    /// Whether the line is asserted.
    #[inline]
    pub fn is_high(self) -> bool {
        self == Level::High
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

/// Digital output primitive for the motor control lines.
///
/// # Implementations
/// - **Production:** [`HBridgePins`](super::HBridgePins) over embedded-hal `OutputPin`s
/// - **Testing:** a recording fake that keeps the last level per pin
///
/// Writing the same level twice must be harmless; implementations do not
/// need to track what they last wrote.
pub trait PinDriver {
    /// Whether the underlying GPIO controller has finished initialisation.
    fn is_ready(&self) -> bool;

    /// Put `pin` in output mode, driven low.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::DeviceNotReady`] if the controller is not ready.
    fn configure(&mut self, pin: PinId) -> Result<(), DriverError>;

    /// Drive `pin` to `level`.
    ///
    /// A failure here leaves the hardware in an unknown state. Callers must
    /// treat it as fatal and must not retry.
    fn set_level(&mut self, pin: PinId, level: Level) -> Result<(), DriverError>;
}

impl<T: PinDriver + ?Sized> PinDriver for &mut T {
    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }

    fn configure(&mut self, pin: PinId) -> Result<(), DriverError> {
        (**self).configure(pin)
    }

    fn set_level(&mut self, pin: PinId, level: Level) -> Result<(), DriverError> {
        (**self).set_level(pin, level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_bool() {
        assert_eq!(Level::from(true), Level::High);
        assert_eq!(Level::from(false), Level::Low);
        assert!(!Level::default().is_high());
    }
}
