//! # haptic-link
//!
//! Wireless command-to-actuation core for a coin vibration motor driven
//! through an H-bridge.
//!
//! A remote peer connects over a short-range link and writes short text
//! commands; this crate turns them into H-bridge pin states while keeping the
//! bridge's power sequencing safe.
//!
//! ## Features
//!
//! - **Session gating**: commands are accepted only from the single active connection
//! - **Power sequencing**: the bridge is woken before driving and coasted before sleeping
//! - **Safe disconnect**: losing the peer always leaves the motor off
//! - **embedded-hal 1.0**: `OutputPin` for the control lines, `DelayNs` for the wake time
//! - **no_std compatible**: core library works without standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use haptic_link::{Firmware, FirmwareConfig, HBridgePins, LinkEvent, MotorControllerBuilder};
//!
//! let config: FirmwareConfig = haptic_link::load_config("firmware.toml")?;
//!
//! let pins = HBridgePins::new(nsleep, in1, in2, config.pins)?;
//! let motor = MotorControllerBuilder::new()
//!     .driver(pins)
//!     .delay(delay)
//!     .from_config(&config)
//!     .build()?;
//!
//! let mut firmware = Firmware::start(motor, &mut radio, &config);
//!
//! // From the radio's callbacks:
//! firmware.handle_event(LinkEvent::Connected(conn))?;
//! firmware.handle_event(LinkEvent::DataReceived { handle: &conn, data: b"ON" })?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `log`: Routes diagnostics through the `log` facade
//! - `defmt`: Routes diagnostics through defmt for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

// Must come first so the logging macros are visible to every module
#[macro_use]
mod fmt;

// Core modules
pub mod command;
pub mod config;
pub mod driver;
pub mod error;
pub mod firmware;
pub mod link;
pub mod motor;

// Re-exports for ergonomic API
pub use command::{decode, Command};
pub use config::{validate_config, FirmwareConfig, PinAssignment};
pub use driver::{HBridgePins, Level, PinDriver, PinId, PinRole};
pub use error::{Error, Result};
pub use firmware::{BootStage, Firmware};
pub use link::{AdvertisingPayload, LinkEvent, LinkSessionManager, Session, StackError, WirelessStack};
pub use motor::{Direction, MotorController, MotorControllerBuilder, MotorState};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};
