//! Error types for haptic-link.
//!
//! Provides unified error handling across configuration, pin driving, motor
//! sequencing and the wireless link.

use core::fmt;

use crate::driver::PinId;
use crate::link::StackError;
use crate::motor::{Action, MotorState};

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all haptic-link operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Pin driver error
    Driver(DriverError),
    /// Motor sequencing error
    Motor(MotorError),
    /// Wireless link setup error
    Link(LinkError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// A builder was finalised without a required part
    MissingField(&'static str),
    /// The same physical pin is assigned to more than one role
    DuplicatePin(PinId),
    /// Device name is empty
    EmptyDeviceName,
    /// Device name does not fit in a scan response (max 29 bytes)
    DeviceNameTooLong(usize),
    /// Enable settle delay is unreasonably long (max 10 000 us)
    SettleDelayTooLong(u32),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Pin driver errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverError {
    /// The GPIO controller has not finished initialisation
    DeviceNotReady,
    /// The pin is not part of the assignment table
    UnknownPin(PinId),
    /// The hardware rejected a level change
    WriteFailed(PinId),
}

/// Motor sequencing errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorError {
    /// The requested action is not allowed from the current state
    InvalidTransition {
        /// State the motor was in
        from: MotorState,
        /// Action that was refused
        action: Action,
    },
    /// A pin write failed mid-transition; hardware state is unknown
    Driver(DriverError),
}

/// Wireless link setup errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkError {
    /// The wireless stack failed to come up
    StackEnable(StackError),
    /// The UART service could not be registered
    ServiceRegistration(StackError),
    /// Advertising could not be started
    AdvertisingStart(StackError),
    /// Advertising data does not fit in a legacy 31-byte payload
    PayloadOverflow,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Driver(e) => write!(f, "Driver error: {}", e),
            Error::Motor(e) => write!(f, "Motor error: {}", e),
            Error::Link(e) => write!(f, "Link error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::MissingField(name) => write!(f, "{} is required", name),
            ConfigError::DuplicatePin(pin) => {
                write!(f, "Pin {} is assigned to more than one role", pin.0)
            }
            ConfigError::EmptyDeviceName => write!(f, "Device name must not be empty"),
            ConfigError::DeviceNameTooLong(len) => {
                write!(f, "Device name is {} bytes, max is 29", len)
            }
            ConfigError::SettleDelayTooLong(us) => {
                write!(f, "Settle delay {} us exceeds 10000 us", us)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::DeviceNotReady => write!(f, "GPIO device not ready"),
            DriverError::UnknownPin(pin) => write!(f, "Pin {} is not assigned", pin.0),
            DriverError::WriteFailed(pin) => write!(f, "Write to pin {} failed", pin.0),
        }
    }
}

impl fmt::Display for MotorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorError::InvalidTransition { from, action } => {
                write!(f, "Cannot {} while {}", action.name(), from.name())
            }
            MotorError::Driver(e) => write!(f, "Pin failure during transition: {}", e),
        }
    }
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkError::StackEnable(e) => write!(f, "Bluetooth init failed (err {})", e.0),
            LinkError::ServiceRegistration(e) => {
                write!(f, "Failed to init UART service (err {})", e.0)
            }
            LinkError::AdvertisingStart(e) => {
                write!(f, "Advertising failed to start (err {})", e.0)
            }
            LinkError::PayloadOverflow => write!(f, "Advertising payload exceeds 31 bytes"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", defmt::Display2Format(self))
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<DriverError> for Error {
    fn from(e: DriverError) -> Self {
        Error::Driver(e)
    }
}

impl From<MotorError> for Error {
    fn from(e: MotorError) -> Self {
        Error::Motor(e)
    }
}

impl From<LinkError> for Error {
    fn from(e: LinkError) -> Self {
        Error::Link(e)
    }
}

impl From<DriverError> for MotorError {
    fn from(e: DriverError) -> Self {
        MotorError::Driver(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for DriverError {}

#[cfg(feature = "std")]
impl std::error::Error for MotorError {}

#[cfg(feature = "std")]
impl std::error::Error for LinkError {}
