//! Device identity and advertising configuration.

use heapless::String;
use serde::Deserialize;
use uuid::Uuid;

/// Nordic UART Service, the transport the commands arrive on.
pub const NUS_SERVICE_UUID: Uuid = Uuid::from_u128(0x6E400001_B5A3_F393_E0A9_E50E24DCCA9E);

/// Longest name that fits a Complete Local Name AD structure.
pub const MAX_DEVICE_NAME_LEN: usize = 29;

const DEFAULT_DEVICE_NAME: &str = "VibMotor";

/// Device identity.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Advertised device name.
    pub name: String<32>,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        let mut name = String::new();
        let _ = name.push_str(DEFAULT_DEVICE_NAME);
        Self { name }
    }
}

/// Advertising payload settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AdvertisingConfig {
    /// 128-bit service identifier listed in the advertising data.
    pub service_uuid: Uuid,
}

impl Default for AdvertisingConfig {
    fn default() -> Self {
        Self {
            service_uuid: NUS_SERVICE_UUID,
        }
    }
}
