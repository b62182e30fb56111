//! Firmware configuration - root configuration structure.

use serde::Deserialize;

use super::device::{AdvertisingConfig, DeviceConfig};
use super::motor::MotorConfig;
use super::pins::PinAssignment;

/// Root configuration structure from TOML.
///
/// Every section is optional; missing sections fall back to the values the
/// board ships with.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FirmwareConfig {
    /// Device identity.
    pub device: DeviceConfig,

    /// Pin assignment table.
    pub pins: PinAssignment,

    /// Power sequencing.
    pub motor: MotorConfig,

    /// Advertising payload.
    pub advertising: AdvertisingConfig,
}

impl FirmwareConfig {
    /// Advertised device name.
    #[inline]
    pub fn device_name(&self) -> &str {
        self.device.name.as_str()
    }
}
