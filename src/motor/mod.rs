//! Motor module for haptic-link.
//!
//! Provides the H-bridge motor controller and its power-sequencing state machine.

mod builder;
mod controller;
mod state;

pub use builder::MotorControllerBuilder;
pub use controller::MotorController;
pub use state::{Action, Direction, MotorState};
