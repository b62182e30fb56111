//! Configuration module for haptic-link.
//!
//! Provides types for loading and validating the firmware configuration
//! from TOML files (with `std` feature) or compiled-in defaults.

mod device;
#[cfg(feature = "std")]
mod loader;
mod motor;
mod pins;
mod system;
mod validation;

pub use device::{AdvertisingConfig, DeviceConfig, MAX_DEVICE_NAME_LEN, NUS_SERVICE_UUID};
pub use motor::{MotorConfig, MAX_SETTLE_US};
pub use pins::PinAssignment;
pub use system::FirmwareConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};
