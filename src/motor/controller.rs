//! H-bridge motor controller.
//!
//! Generic over a [`PinDriver`] and an embedded-hal 1.0 delay provider.

use embedded_hal::delay::DelayNs;

use crate::config::PinAssignment;
use crate::driver::{Level, PinDriver, PinRole};
use crate::error::{DriverError, Error, MotorError, Result};

use super::state::{Action, Direction, MotorState};

/// Owns the motor state and enforces power sequencing.
///
/// Generic over:
/// - `D`: pin driver for the enable and phase lines
/// - `DELAY`: delay provider for the wake settle time (must implement `DelayNs`)
///
/// Sequencing rules:
/// - the bridge is woken (`enable`) before any polarity is asserted
/// - the phase lines are released before the enable line drops, so the
///   bridge never sleeps with a phase line high
pub struct MotorController<D, DELAY>
where
    D: PinDriver,
    DELAY: DelayNs,
{
    /// Pin driver.
    driver: D,

    /// Delay provider for the wake settle time.
    delay: DELAY,

    /// Physical pins for each role.
    pins: PinAssignment,

    /// Busy-wait after raising the enable line, in microseconds.
    settle_us: u32,

    /// Current logical state.
    state: MotorState,
}

impl<D, DELAY> MotorController<D, DELAY>
where
    D: PinDriver,
    DELAY: DelayNs,
{
    /// Create a controller in the `Disabled` state.
    ///
    /// Pins are not touched until [`init`](Self::init).
    pub fn new(driver: D, delay: DELAY, pins: PinAssignment, settle_us: u32) -> Self {
        Self {
            driver,
            delay,
            pins,
            settle_us,
            state: MotorState::Disabled,
        }
    }

    /// Configure the three control lines as outputs, driven low.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::DeviceNotReady`] if the GPIO controller is not
    /// ready. No pin is configured in that case.
    pub fn init(&mut self) -> Result<()> {
        if !self.driver.is_ready() {
            error!("GPIO device not ready");
            return Err(Error::Driver(DriverError::DeviceNotReady));
        }

        for role in PinRole::ALL {
            self.driver.configure(self.pins.pin(role))?;
        }
        self.state = MotorState::Disabled;

        info!("Motor pins initialized");
        Ok(())
    }

    /// Get the current state.
    #[inline]
    pub fn state(&self) -> MotorState {
        self.state
    }

    /// Whether the bridge is awake.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.state.is_enabled()
    }

    /// Get the pin assignment table.
    #[inline]
    pub fn pins(&self) -> &PinAssignment {
        &self.pins
    }

    /// Get the configured settle delay in microseconds.
    #[inline]
    pub fn settle_us(&self) -> u32 {
        self.settle_us
    }

    /// Borrow the pin driver.
    #[inline]
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Give back the driver and delay provider.
    pub fn release(self) -> (D, DELAY) {
        (self.driver, self.delay)
    }

    /// Wake the bridge: `Disabled` -> `Coasting`.
    ///
    /// Raises the enable line and then busy-waits for the settle time.
    /// No-op if already enabled.
    pub fn enable(&mut self) -> Result<()> {
        if self.state.is_enabled() {
            return Ok(());
        }

        self.write(PinRole::Enable, Level::High)?;
        self.delay.delay_us(self.settle_us);
        self.state = MotorState::Coasting;

        debug!("Motor enabled");
        Ok(())
    }

    /// Assert a drive polarity: `Coasting` -> `DrivingForward`.
    ///
    /// # Errors
    ///
    /// Returns [`MotorError::InvalidTransition`] while `Disabled`; no pin is
    /// touched in that case.
    pub fn drive(&mut self, direction: Direction) -> Result<()> {
        if !self.state.is_enabled() {
            return Err(Error::Motor(MotorError::InvalidTransition {
                from: self.state,
                action: Action::Drive,
            }));
        }

        match direction {
            Direction::Forward => {
                self.write(PinRole::PhaseA, Level::High)?;
                self.write(PinRole::PhaseB, Level::Low)?;
                self.state = MotorState::DrivingForward;
            }
        }

        debug!("Motor driving {:?}", direction);
        Ok(())
    }

    /// Release both phase lines: `DrivingForward` -> `Coasting`.
    ///
    /// Electrical coast, not braking. Harmless in `Coasting` and `Disabled`.
    pub fn coast(&mut self) -> Result<()> {
        self.write(PinRole::PhaseA, Level::Low)?;
        self.write(PinRole::PhaseB, Level::Low)?;

        if self.state == MotorState::DrivingForward {
            self.state = MotorState::Coasting;
            debug!("Motor coasting");
        }
        Ok(())
    }

    /// Put the bridge to sleep: any state -> `Disabled`.
    ///
    /// Always releases both phase lines before dropping the enable line, so a
    /// phase left high by a half-finished `drive` is cleared too.
    pub fn disable(&mut self) -> Result<()> {
        self.coast()?;

        self.write(PinRole::Enable, Level::Low)?;
        self.state = MotorState::Disabled;

        debug!("Motor disabled");
        Ok(())
    }

    /// Coast and disable regardless of the current state.
    ///
    /// Used whenever the motor has to end up in a known-off state.
    pub fn force_off(&mut self) -> Result<()> {
        self.disable()
    }

    fn write(&mut self, role: PinRole, level: Level) -> Result<()> {
        let pin = self.pins.pin(role);
        self.driver.set_level(pin, level).map_err(|e| {
            error!("Setting {} (pin {}) failed", role.name(), pin.0);
            Error::Motor(MotorError::Driver(e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::PinId;
    use embedded_hal_mock::eh1::delay::NoopDelay;

    /// Keeps the last written level per role and every write in order.
    #[derive(Default)]
    struct FakePins {
        levels: [Level; 3],
        writes: Vec<(PinId, Level)>,
        not_ready: bool,
        fail_on: Option<PinId>,
    }

    impl FakePins {
        fn level(&self, pin: PinId) -> Level {
            self.levels[(pin.0 - 28) as usize]
        }
    }

    impl PinDriver for FakePins {
        fn is_ready(&self) -> bool {
            !self.not_ready
        }

        fn configure(&mut self, pin: PinId) -> core::result::Result<(), DriverError> {
            self.set_level(pin, Level::Low)
        }

        fn set_level(
            &mut self,
            pin: PinId,
            level: Level,
        ) -> core::result::Result<(), DriverError> {
            if self.fail_on == Some(pin) {
                return Err(DriverError::WriteFailed(pin));
            }
            self.levels[(pin.0 - 28) as usize] = level;
            self.writes.push((pin, level));
            Ok(())
        }
    }

    fn controller(pins: FakePins) -> MotorController<FakePins, NoopDelay> {
        MotorController::new(pins, NoopDelay::new(), PinAssignment::default(), 50)
    }

    #[test]
    fn test_init_configures_all_pins_low() {
        let mut motor = controller(FakePins::default());
        motor.init().unwrap();

        assert_eq!(motor.state(), MotorState::Disabled);
        assert_eq!(
            motor.driver().writes,
            vec![
                (PinId(28), Level::Low),
                (PinId(29), Level::Low),
                (PinId(30), Level::Low)
            ]
        );
    }

    #[test]
    fn test_init_fails_when_not_ready() {
        let mut motor = controller(FakePins {
            not_ready: true,
            ..Default::default()
        });

        assert_eq!(
            motor.init(),
            Err(Error::Driver(DriverError::DeviceNotReady))
        );
        assert!(motor.driver().writes.is_empty());
    }

    #[test]
    fn test_enable_is_idempotent() {
        let mut motor = controller(FakePins::default());
        motor.enable().unwrap();
        motor.enable().unwrap();

        assert_eq!(motor.state(), MotorState::Coasting);
        assert_eq!(motor.driver().writes, vec![(PinId(28), Level::High)]);
    }

    #[test]
    fn test_drive_sets_forward_polarity() {
        let mut motor = controller(FakePins::default());
        motor.enable().unwrap();
        motor.drive(Direction::Forward).unwrap();

        assert_eq!(motor.state(), MotorState::DrivingForward);
        assert_eq!(motor.driver().level(PinId(29)), Level::High);
        assert_eq!(motor.driver().level(PinId(30)), Level::Low);
    }

    #[test]
    fn test_drive_while_disabled_is_rejected() {
        let mut motor = controller(FakePins::default());

        let result = motor.drive(Direction::Forward);
        assert_eq!(
            result,
            Err(Error::Motor(MotorError::InvalidTransition {
                from: MotorState::Disabled,
                action: Action::Drive,
            }))
        );
        assert_eq!(motor.state(), MotorState::Disabled);
        assert!(motor.driver().writes.is_empty());
    }

    #[test]
    fn test_disable_coasts_before_dropping_enable() {
        let mut motor = controller(FakePins::default());
        motor.enable().unwrap();
        motor.drive(Direction::Forward).unwrap();
        motor.driver.writes.clear();

        motor.disable().unwrap();

        assert_eq!(motor.state(), MotorState::Disabled);
        assert_eq!(
            motor.driver().writes,
            vec![
                (PinId(29), Level::Low),
                (PinId(30), Level::Low),
                (PinId(28), Level::Low)
            ]
        );
    }

    #[test]
    fn test_coast_while_disabled_stays_disabled() {
        let mut motor = controller(FakePins::default());
        motor.coast().unwrap();
        assert_eq!(motor.state(), MotorState::Disabled);
    }

    #[test]
    fn test_pin_failure_propagates() {
        let mut motor = controller(FakePins {
            fail_on: Some(PinId(29)),
            ..Default::default()
        });
        motor.enable().unwrap();

        let result = motor.drive(Direction::Forward);
        assert_eq!(
            result,
            Err(Error::Motor(MotorError::Driver(DriverError::WriteFailed(
                PinId(29)
            ))))
        );
        assert_eq!(motor.state(), MotorState::Coasting);
    }

    #[test]
    fn test_disable_after_partial_drive_clears_phase_a() {
        let mut motor = controller(FakePins {
            fail_on: Some(PinId(30)),
            ..Default::default()
        });
        motor.enable().unwrap();

        assert!(motor.drive(Direction::Forward).is_err());
        assert_eq!(motor.state(), MotorState::Coasting);
        assert_eq!(motor.driver().level(PinId(29)), Level::High);

        motor.driver.fail_on = None;
        motor.driver.writes.clear();
        motor.disable().unwrap();

        assert_eq!(motor.state(), MotorState::Disabled);
        assert_eq!(
            motor.driver().writes,
            vec![
                (PinId(29), Level::Low),
                (PinId(30), Level::Low),
                (PinId(28), Level::Low)
            ]
        );
    }
}
