//! embedded-hal adapter for the H-bridge control lines.

use embedded_hal::digital::OutputPin;

use crate::config::PinAssignment;
use crate::error::{ConfigError, DriverError};

use super::pin::{Level, PinDriver, PinId, PinRole};

/// [`PinDriver`] over three embedded-hal output pins.
///
/// Generic over:
/// - `EN`: sleep/enable pin type (must implement `OutputPin`)
/// - `A`: phase-A pin type (must implement `OutputPin`)
/// - `B`: phase-B pin type (must implement `OutputPin`)
///
/// Pins are addressed by the physical ids of the [`PinAssignment`] table.
/// The HAL has already taken the pins as outputs by the time they are handed
/// over, so the adapter is always ready and `configure` only drives the line
/// to its inactive level.
///
/// The controller driving this adapter addresses pins through its own copy
/// of the table; both must come from the same [`PinAssignment`], otherwise
/// every write fails with [`DriverError::UnknownPin`].
pub struct HBridgePins<EN, A, B>
where
    EN: OutputPin,
    A: OutputPin,
    B: OutputPin,
{
    enable: EN,
    phase_a: A,
    phase_b: B,
    assignment: PinAssignment,
}

impl<EN, A, B> HBridgePins<EN, A, B>
where
    EN: OutputPin,
    A: OutputPin,
    B: OutputPin,
{
    /// Wrap three output pins under the given assignment table.
    ///
    /// Fails with [`ConfigError::DuplicatePin`] if two roles share a pin id.
    pub fn new(
        enable: EN,
        phase_a: A,
        phase_b: B,
        assignment: PinAssignment,
    ) -> Result<Self, ConfigError> {
        if let Some(pin) = assignment.duplicate() {
            return Err(ConfigError::DuplicatePin(pin));
        }

        Ok(Self {
            enable,
            phase_a,
            phase_b,
            assignment,
        })
    }

    /// Get the assignment table.
    #[inline]
    pub fn assignment(&self) -> &PinAssignment {
        &self.assignment
    }

    /// Give the pins back.
    pub fn release(self) -> (EN, A, B) {
        (self.enable, self.phase_a, self.phase_b)
    }

    fn write(&mut self, pin: PinId, level: Level) -> Result<(), DriverError> {
        match self.assignment.role_of(pin) {
            Some(PinRole::Enable) => drive(&mut self.enable, pin, level),
            Some(PinRole::PhaseA) => drive(&mut self.phase_a, pin, level),
            Some(PinRole::PhaseB) => drive(&mut self.phase_b, pin, level),
            None => Err(DriverError::UnknownPin(pin)),
        }
    }
}

fn drive<P: OutputPin>(pin: &mut P, id: PinId, level: Level) -> Result<(), DriverError> {
    let result = match level {
        Level::High => pin.set_high(),
        Level::Low => pin.set_low(),
    };
    result.map_err(|_| DriverError::WriteFailed(id))
}

impl<EN, A, B> PinDriver for HBridgePins<EN, A, B>
where
    EN: OutputPin,
    A: OutputPin,
    B: OutputPin,
{
    fn is_ready(&self) -> bool {
        true
    }

    fn configure(&mut self, pin: PinId) -> Result<(), DriverError> {
        self.write(pin, Level::Low)
    }

    fn set_level(&mut self, pin: PinId, level: Level) -> Result<(), DriverError> {
        self.write(pin, level)
    }
}
