//! Builder pattern for MotorController.

use embedded_hal::delay::DelayNs;

use crate::config::{FirmwareConfig, MotorConfig, PinAssignment};
use crate::driver::PinDriver;
use crate::error::{ConfigError, Error, Result};

use super::controller::MotorController;

/// Builder for creating MotorController instances.
pub struct MotorControllerBuilder<D, DELAY>
where
    D: PinDriver,
    DELAY: DelayNs,
{
    driver: Option<D>,
    delay: Option<DELAY>,
    pins: PinAssignment,
    settle_us: u32,
}

impl<D, DELAY> Default for MotorControllerBuilder<D, DELAY>
where
    D: PinDriver,
    DELAY: DelayNs,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<D, DELAY> MotorControllerBuilder<D, DELAY>
where
    D: PinDriver,
    DELAY: DelayNs,
{
    /// Create a new builder with the board's default pins and settle time.
    pub fn new() -> Self {
        Self {
            driver: None,
            delay: None,
            pins: PinAssignment::default(),
            settle_us: MotorConfig::default().settle_us,
        }
    }

    /// Set the pin driver.
    pub fn driver(mut self, driver: D) -> Self {
        self.driver = Some(driver);
        self
    }

    /// Set the delay provider.
    pub fn delay(mut self, delay: DELAY) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Set the pin assignment table.
    pub fn pins(mut self, pins: PinAssignment) -> Self {
        self.pins = pins;
        self
    }

    /// Set the wake settle time in microseconds.
    pub fn settle_us(mut self, settle_us: u32) -> Self {
        self.settle_us = settle_us;
        self
    }

    /// Take pins and settle time from a FirmwareConfig.
    pub fn from_config(mut self, config: &FirmwareConfig) -> Self {
        self.pins = config.pins;
        self.settle_us = config.motor.settle_us;
        self
    }

    /// Build the MotorController.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver or delay is missing, or if the pin
    /// table assigns one pin to two roles.
    pub fn build(self) -> Result<MotorController<D, DELAY>> {
        let driver = self
            .driver
            .ok_or(Error::Config(ConfigError::MissingField("driver")))?;

        let delay = self
            .delay
            .ok_or(Error::Config(ConfigError::MissingField("delay")))?;

        if let Some(pin) = self.pins.duplicate() {
            return Err(Error::Config(ConfigError::DuplicatePin(pin)));
        }

        Ok(MotorController::new(driver, delay, self.pins, self.settle_us))
    }
}
