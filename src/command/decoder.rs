//! Payload decoder.

use embedded_hal::delay::DelayNs;

use crate::driver::PinDriver;
use crate::error::Result;
use crate::motor::{Direction, MotorController};

/// Token that turns the motor on.
pub const ON_TOKEN: &[u8] = b"ON";

/// Token that turns the motor off.
pub const OFF_TOKEN: &[u8] = b"OFF";

/// Command carried by one inbound payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Wake the bridge and drive forward.
    MotorOn,
    /// Coast and put the bridge to sleep.
    MotorOff,
    /// Anything else; ignored.
    Unrecognized,
}

/// Decode a payload.
///
/// Case-sensitive prefix match against `"ON"` and `"OFF"`. Trailing bytes
/// after a recognized token are accepted, so framing appended by the
/// transport (a NUL, a newline) does not break the command.
///
/// Total: every input maps to exactly one [`Command`].
///
/// # Examples
///
/// ```
/// use haptic_link::{decode, Command};
///
/// assert_eq!(decode(b"ON"), Command::MotorOn);
/// assert_eq!(decode(b"OFF\n"), Command::MotorOff);
/// assert_eq!(decode(b"on"), Command::Unrecognized);
/// ```
pub fn decode(payload: &[u8]) -> Command {
    if payload.starts_with(ON_TOKEN) {
        Command::MotorOn
    } else if payload.starts_with(OFF_TOKEN) {
        Command::MotorOff
    } else {
        Command::Unrecognized
    }
}

impl Command {
    /// Apply the command to a motor controller.
    ///
    /// - `MotorOn`: enable, then drive forward
    /// - `MotorOff`: coast, then disable
    /// - `Unrecognized`: nothing
    pub fn apply<D, DELAY>(self, motor: &mut MotorController<D, DELAY>) -> Result<()>
    where
        D: PinDriver,
        DELAY: DelayNs,
    {
        match self {
            Command::MotorOn => {
                motor.enable()?;
                motor.drive(Direction::Forward)
            }
            Command::MotorOff => {
                motor.coast()?;
                motor.disable()
            }
            Command::Unrecognized => Ok(()),
        }
    }

    /// Command name for display/debugging.
    pub fn name(self) -> &'static str {
        match self {
            Command::MotorOn => "MotorOn",
            Command::MotorOff => "MotorOff",
            Command::Unrecognized => "Unrecognized",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_tokens() {
        assert_eq!(decode(b"ON"), Command::MotorOn);
        assert_eq!(decode(b"OFF"), Command::MotorOff);
    }

    #[test]
    fn test_trailing_bytes_are_tolerated() {
        assert_eq!(decode(b"ONxyz"), Command::MotorOn);
        assert_eq!(decode(b"OFFZZZ"), Command::MotorOff);
        assert_eq!(decode(b"ON\0"), Command::MotorOn);
    }

    #[test]
    fn test_short_or_unknown_payloads() {
        assert_eq!(decode(b""), Command::Unrecognized);
        assert_eq!(decode(b"O"), Command::Unrecognized);
        assert_eq!(decode(b"OF"), Command::Unrecognized);
        assert_eq!(decode(b"xyz"), Command::Unrecognized);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        assert_eq!(decode(b"on"), Command::Unrecognized);
        assert_eq!(decode(b"Off"), Command::Unrecognized);
        assert_eq!(decode(b" ON"), Command::Unrecognized);
    }
}
