//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::{FirmwareConfig, MAX_DEVICE_NAME_LEN, MAX_SETTLE_US};

/// Validate a firmware configuration.
///
/// Checks:
/// - Each H-bridge role has its own pin
/// - Device name is non-empty and fits a scan response
/// - Settle delay is bounded
pub fn validate_config(config: &FirmwareConfig) -> Result<()> {
    if let Some(pin) = config.pins.duplicate() {
        return Err(Error::Config(ConfigError::DuplicatePin(pin)));
    }

    let name_len = config.device.name.len();
    if name_len == 0 {
        return Err(Error::Config(ConfigError::EmptyDeviceName));
    }
    if name_len > MAX_DEVICE_NAME_LEN {
        return Err(Error::Config(ConfigError::DeviceNameTooLong(name_len)));
    }

    // The settle wait busy-loops inside a radio callback
    if config.motor.settle_us > MAX_SETTLE_US {
        return Err(Error::Config(ConfigError::SettleDelayTooLong(
            config.motor.settle_us,
        )));
    }

    Ok(())
}
