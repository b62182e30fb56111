//! Pin driver module for haptic-link.
//!
//! Wraps the raw digital-output primitive for the three H-bridge control lines
//! behind the [`PinDriver`] trait.

mod hal;
mod pin;

pub use hal::HBridgePins;
pub use pin::{Level, PinDriver, PinId, PinRole};
