//! Pin assignment table.

use serde::Deserialize;

use crate::driver::{PinId, PinRole};

/// nSLEEP on P0.28.
pub const DEFAULT_ENABLE_PIN: PinId = PinId(28);
/// IN1 on P0.29.
pub const DEFAULT_PHASE_A_PIN: PinId = PinId(29);
/// IN2 on P0.30.
pub const DEFAULT_PHASE_B_PIN: PinId = PinId(30);

/// Maps the three logical H-bridge roles to physical pins.
///
/// Fixed once the firmware is configured; never mutated at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(default)]
pub struct PinAssignment {
    /// Sleep/enable line.
    pub enable: PinId,
    /// Phase-A input.
    pub phase_a: PinId,
    /// Phase-B input.
    pub phase_b: PinId,
}

impl Default for PinAssignment {
    fn default() -> Self {
        Self {
            enable: DEFAULT_ENABLE_PIN,
            phase_a: DEFAULT_PHASE_A_PIN,
            phase_b: DEFAULT_PHASE_B_PIN,
        }
    }
}

impl PinAssignment {
    /// Create an assignment table.
    pub const fn new(enable: PinId, phase_a: PinId, phase_b: PinId) -> Self {
        Self {
            enable,
            phase_a,
            phase_b,
        }
    }

    /// Physical pin for a role.
    #[inline]
    pub fn pin(&self, role: PinRole) -> PinId {
        match role {
            PinRole::Enable => self.enable,
            PinRole::PhaseA => self.phase_a,
            PinRole::PhaseB => self.phase_b,
        }
    }

    /// Role served by a physical pin, if any.
    pub fn role_of(&self, pin: PinId) -> Option<PinRole> {
        PinRole::ALL.into_iter().find(|role| self.pin(*role) == pin)
    }

    /// First pin id that appears under more than one role.
    pub fn duplicate(&self) -> Option<PinId> {
        if self.enable == self.phase_a || self.enable == self.phase_b {
            Some(self.enable)
        } else if self.phase_a == self.phase_b {
            Some(self.phase_a)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_lookup() {
        let pins = PinAssignment::default();
        assert_eq!(pins.role_of(PinId(28)), Some(PinRole::Enable));
        assert_eq!(pins.role_of(PinId(30)), Some(PinRole::PhaseB));
        assert_eq!(pins.role_of(PinId(0)), None);
        assert_eq!(pins.pin(PinRole::PhaseA), PinId(29));
    }

    #[test]
    fn test_duplicate_detection() {
        assert_eq!(PinAssignment::default().duplicate(), None);
        let pins = PinAssignment::new(PinId(4), PinId(5), PinId(4));
        assert_eq!(pins.duplicate(), Some(PinId(4)));
    }
}
