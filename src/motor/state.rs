//! Motor state and transition vocabulary.

/// Logical state of the motor.
///
/// `DrivingForward` is only reachable from `Coasting`, i.e. while the bridge
/// is awake. `Disabled` is reachable from every state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorState {
    /// Bridge asleep, all lines low.
    #[default]
    Disabled,
    /// Bridge awake, both phase lines low.
    Coasting,
    /// Bridge awake, phase A high and phase B low.
    DrivingForward,
}

impl MotorState {
    /// Whether the enable line is high in this state.
    #[inline]
    pub fn is_enabled(self) -> bool {
        !matches!(self, MotorState::Disabled)
    }

    /// State name for display/debugging.
    pub fn name(self) -> &'static str {
        match self {
            MotorState::Disabled => "Disabled",
            MotorState::Coasting => "Coasting",
            MotorState::DrivingForward => "DrivingForward",
        }
    }
}

/// Drive direction.
///
/// The board only wires the forward polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Phase A high, phase B low.
    #[default]
    Forward,
}

/// Controller operation, used to report refused transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Wake the bridge.
    Enable,
    /// Put the bridge to sleep.
    Disable,
    /// Assert a drive polarity.
    Drive,
    /// Release both phase lines.
    Coast,
}

impl Action {
    /// Action name for display/debugging.
    pub fn name(self) -> &'static str {
        match self {
            Action::Enable => "enable",
            Action::Disable => "disable",
            Action::Drive => "drive",
            Action::Coast => "coast",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_disabled() {
        assert_eq!(MotorState::default(), MotorState::Disabled);
        assert!(!MotorState::Disabled.is_enabled());
        assert!(MotorState::Coasting.is_enabled());
        assert!(MotorState::DrivingForward.is_enabled());
    }
}
