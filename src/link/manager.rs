//! Link session manager.

use embedded_hal::delay::DelayNs;

use crate::command::{decode, Command};
use crate::driver::PinDriver;
use crate::error::{Error, MotorError, Result};
use crate::motor::{MotorController, MotorState};

use super::event::LinkEvent;
use super::session::Session;

/// Single point of truth for "is a peer connected".
///
/// Owns the motor controller, so the only way a payload reaches the motor
/// is through [`on_data_received`](Self::on_data_received) on the active
/// session.
///
/// Generic over:
/// - `H`: connection handle handed over by the stack
/// - `D`, `DELAY`: the motor controller's pin driver and delay provider
///
/// Entry points run to completion and must not be re-entered; the stack's
/// callback dispatch serialises them.
pub struct LinkSessionManager<H, D, DELAY>
where
    D: PinDriver,
    DELAY: DelayNs,
{
    motor: MotorController<D, DELAY>,
    session: Option<Session<H>>,
}

impl<H, D, DELAY> LinkSessionManager<H, D, DELAY>
where
    H: PartialEq,
    D: PinDriver,
    DELAY: DelayNs,
{
    /// Create a manager with no active session.
    pub fn new(motor: MotorController<D, DELAY>) -> Self {
        Self {
            motor,
            session: None,
        }
    }

    /// Get the motor controller.
    #[inline]
    pub fn motor(&self) -> &MotorController<D, DELAY> {
        &self.motor
    }

    /// Current motor state.
    #[inline]
    pub fn motor_state(&self) -> MotorState {
        self.motor.state()
    }

    /// Get the active session, if any.
    #[inline]
    pub fn session(&self) -> Option<&Session<H>> {
        self.session.as_ref()
    }

    /// Whether a peer is connected.
    #[inline]
    pub fn is_connected(&self) -> bool {
        self.session.is_some()
    }

    /// Give back the motor controller, ending any session.
    pub fn into_motor(self) -> MotorController<D, DELAY> {
        self.motor
    }

    /// Dispatch one inbound event.
    pub fn handle_event(&mut self, event: LinkEvent<'_, H>) -> Result<()> {
        match event {
            LinkEvent::Connected(handle) => {
                self.on_connected(handle);
                Ok(())
            }
            LinkEvent::ConnectionFailed { error } => {
                self.on_connection_failed(error);
                Ok(())
            }
            LinkEvent::Disconnected { handle, reason } => self.on_disconnected(handle, reason),
            LinkEvent::DataReceived { handle, data } => {
                self.on_data_received(handle, data).map(|_| ())
            }
        }
    }

    /// A peer connected.
    ///
    /// The new handle is authoritative: a previous session is released
    /// before the new one is recorded.
    pub fn on_connected(&mut self, handle: H) {
        if let Some(stale) = self.session.take() {
            warn!("Replacing active session");
            drop(stale);
        }

        self.session = Some(Session::new(handle));
        info!("Connected");
    }

    /// A connection attempt failed. No session is created.
    pub fn on_connection_failed(&mut self, error: u8) {
        error!("Connection failed (err {})", error);
    }

    /// A peer disconnected.
    ///
    /// Releases the session if `handle` is the active one, then forces the
    /// motor off whatever its state.
    pub fn on_disconnected(&mut self, handle: &H, reason: u8) -> Result<()> {
        info!("Disconnected (reason {})", reason);

        match &self.session {
            Some(session) if session.matches(handle) => {
                self.session = None;
            }
            Some(_) => warn!("Disconnect from a stale connection, keeping active session"),
            None => {}
        }

        self.motor.force_off()
    }

    /// A peer wrote a payload.
    ///
    /// Returns `Ok(None)` when the payload was dropped because `handle` is
    /// not the active session, otherwise the decoded command. A refused
    /// transition is logged and swallowed; pin failures are returned.
    pub fn on_data_received(&mut self, handle: &H, data: &[u8]) -> Result<Option<Command>> {
        let active = self
            .session
            .as_ref()
            .is_some_and(|session| session.matches(handle));
        if !active {
            warn!("Dropping {} bytes from an inactive connection", data.len());
            return Ok(None);
        }

        let command = decode(data);
        info!("Received {} bytes: {:?}", data.len(), command);

        match command.apply(&mut self.motor) {
            Ok(()) => {}
            Err(Error::Motor(err @ MotorError::InvalidTransition { .. })) => {
                warn!("Ignoring {:?}: {:?}", command, err);
            }
            Err(e) => return Err(e),
        }

        if command == Command::Unrecognized {
            debug!("Unrecognized payload ignored");
        }

        Ok(Some(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PinAssignment;
    use crate::driver::{Level, PinId};
    use crate::error::DriverError;
    use embedded_hal_mock::eh1::delay::NoopDelay;

    #[derive(Default)]
    struct LevelPins {
        levels: [Level; 3],
    }

    impl PinDriver for LevelPins {
        fn is_ready(&self) -> bool {
            true
        }

        fn configure(&mut self, pin: PinId) -> core::result::Result<(), DriverError> {
            self.set_level(pin, Level::Low)
        }

        fn set_level(
            &mut self,
            pin: PinId,
            level: Level,
        ) -> core::result::Result<(), DriverError> {
            self.levels[(pin.0 - 28) as usize] = level;
            Ok(())
        }
    }

    fn manager() -> LinkSessionManager<u16, LevelPins, NoopDelay> {
        let motor = MotorController::new(
            LevelPins::default(),
            NoopDelay::new(),
            PinAssignment::default(),
            0,
        );
        LinkSessionManager::new(motor)
    }

    #[test]
    fn test_data_without_session_is_dropped() {
        let mut link = manager();
        assert_eq!(link.on_data_received(&1, b"ON"), Ok(None));
        assert_eq!(link.motor_state(), MotorState::Disabled);
    }

    #[test]
    fn test_on_then_off() {
        let mut link = manager();
        link.on_connected(7);

        assert_eq!(link.on_data_received(&7, b"ON"), Ok(Some(Command::MotorOn)));
        assert_eq!(link.motor_state(), MotorState::DrivingForward);

        assert_eq!(link.on_data_received(&7, b"OFF"), Ok(Some(Command::MotorOff)));
        assert_eq!(link.motor_state(), MotorState::Disabled);
        assert_eq!(link.motor().driver().levels, [Level::Low; 3]);
    }

    #[test]
    fn test_unrecognized_leaves_motor_alone() {
        let mut link = manager();
        link.on_connected(7);
        link.on_data_received(&7, b"ON").unwrap();

        assert_eq!(
            link.on_data_received(&7, b"BUZZ"),
            Ok(Some(Command::Unrecognized))
        );
        assert_eq!(link.motor_state(), MotorState::DrivingForward);
    }

    #[test]
    fn test_stale_disconnect_keeps_session_but_stops_motor() {
        let mut link = manager();
        link.on_connected(1);
        link.on_connected(2);
        link.on_data_received(&2, b"ON").unwrap();

        link.on_disconnected(&1, 0x13).unwrap();

        assert!(link.session().is_some_and(|s| s.matches(&2)));
        assert_eq!(link.motor_state(), MotorState::Disabled);
    }

    #[test]
    fn test_connection_failure_keeps_existing_session() {
        let mut link = manager();
        link.on_connected(4);
        link.handle_event(LinkEvent::ConnectionFailed { error: 0x3e })
            .unwrap();
        assert!(link.is_connected());
    }
}
