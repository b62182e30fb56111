//! Command module for haptic-link.
//!
//! Decodes inbound payloads into motor commands.

mod decoder;

pub use decoder::{decode, Command, OFF_TOKEN, ON_TOKEN};
