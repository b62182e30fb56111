//! Link module for haptic-link.
//!
//! Tracks the single remote session, gates command delivery on it and
//! describes the outbound configuration handed to the wireless stack.

mod advertising;
mod event;
mod manager;
mod session;
mod stack;

pub use advertising::{
    AdvertisingPayload, AD_TYPE_FLAGS, AD_TYPE_NAME_COMPLETE, AD_TYPE_UUID128_ALL,
    FLAG_BR_EDR_NOT_SUPPORTED, FLAG_LE_GENERAL_DISCOVERABLE, MAX_AD_LEN,
};
pub use event::LinkEvent;
pub use manager::LinkSessionManager;
pub use session::Session;
pub use stack::{StackError, WirelessStack};
