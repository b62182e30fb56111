//! Shared fakes for the integration tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::collections::BTreeMap;
use std::rc::Rc;

use embedded_hal_mock::eh1::delay::NoopDelay;
use haptic_link::error::DriverError;
use haptic_link::link::{AdvertisingPayload, StackError, WirelessStack};
use haptic_link::{Level, MotorController, PinAssignment, PinDriver, PinId};

// ============================================================================
// Recording pin driver
// ============================================================================

/// Pin driver that records every write and watches the bridge invariant.
pub struct RecordingPins {
    pub assignment: PinAssignment,
    pub levels: BTreeMap<PinId, Level>,
    pub writes: Vec<(PinId, Level)>,
    pub configured: Vec<PinId>,
    pub ready: bool,
    /// Set if a phase line was ever high while the enable line was low.
    pub violated: bool,
}

impl RecordingPins {
    pub fn new(assignment: PinAssignment) -> Self {
        Self {
            assignment,
            levels: BTreeMap::new(),
            writes: Vec::new(),
            configured: Vec::new(),
            ready: true,
            violated: false,
        }
    }

    pub fn level(&self, pin: PinId) -> Level {
        self.levels.get(&pin).copied().unwrap_or_default()
    }

    pub fn all_low(&self) -> bool {
        [
            self.assignment.enable,
            self.assignment.phase_a,
            self.assignment.phase_b,
        ]
        .iter()
        .all(|pin| self.level(*pin) == Level::Low)
    }

    fn check_invariant(&mut self) {
        let enable = self.level(self.assignment.enable);
        let a = self.level(self.assignment.phase_a);
        let b = self.level(self.assignment.phase_b);
        if enable == Level::Low && (a == Level::High || b == Level::High) {
            self.violated = true;
        }
    }
}

impl Default for RecordingPins {
    fn default() -> Self {
        Self::new(PinAssignment::default())
    }
}

impl PinDriver for RecordingPins {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn configure(&mut self, pin: PinId) -> Result<(), DriverError> {
        if !self.ready {
            return Err(DriverError::DeviceNotReady);
        }
        self.configured.push(pin);
        self.levels.insert(pin, Level::Low);
        Ok(())
    }

    fn set_level(&mut self, pin: PinId, level: Level) -> Result<(), DriverError> {
        self.levels.insert(pin, level);
        self.writes.push((pin, level));
        self.check_invariant();
        Ok(())
    }
}

pub type TestMotor = MotorController<RecordingPins, NoopDelay>;

/// Motor on the default pins, zero settle time.
pub fn test_motor() -> TestMotor {
    MotorController::new(
        RecordingPins::default(),
        NoopDelay::new(),
        PinAssignment::default(),
        0,
    )
}

// ============================================================================
// Fake wireless stack
// ============================================================================

#[derive(Default)]
pub struct FakeStack {
    pub fail_enable: Option<StackError>,
    pub fail_service: Option<StackError>,
    pub fail_advertising: Option<StackError>,
    pub calls: Vec<&'static str>,
    pub advertised_name: Option<String>,
    pub advertising_data: Vec<u8>,
}

impl WirelessStack for FakeStack {
    fn enable(&mut self) -> Result<(), StackError> {
        self.calls.push("enable");
        self.fail_enable.map_or(Ok(()), Err)
    }

    fn register_service(&mut self) -> Result<(), StackError> {
        self.calls.push("register_service");
        self.fail_service.map_or(Ok(()), Err)
    }

    fn start_advertising(
        &mut self,
        name: &str,
        payload: &AdvertisingPayload,
    ) -> Result<(), StackError> {
        self.calls.push("start_advertising");
        self.fail_advertising.map_or(Ok(()), Err)?;
        self.advertised_name = Some(name.to_string());
        self.advertising_data = payload.advertising_data().to_vec();
        Ok(())
    }
}

// ============================================================================
// Reference-counted connection handle
// ============================================================================

/// Hands out handles and counts the references still held.
#[derive(Default, Clone)]
pub struct Connections {
    live: Rc<Cell<usize>>,
}

impl Connections {
    pub fn open(&self, id: u16) -> ConnHandle {
        self.live.set(self.live.get() + 1);
        ConnHandle {
            id,
            live: Rc::clone(&self.live),
        }
    }

    pub fn live(&self) -> usize {
        self.live.get()
    }
}

/// Connection reference; dropping it gives the reference back.
#[derive(Debug)]
pub struct ConnHandle {
    pub id: u16,
    live: Rc<Cell<usize>>,
}

impl PartialEq for ConnHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Drop for ConnHandle {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}
