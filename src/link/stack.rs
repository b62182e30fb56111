//! Wireless stack seam.

use super::AdvertisingPayload;

/// Status code returned by the wireless stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StackError(pub i32);

/// Outbound calls made once at startup.
///
/// Connection establishment stays inside the stack; it reports back through
/// [`LinkEvent`](super::LinkEvent)s.
pub trait WirelessStack {
    /// Bring the radio and host stack up.
    fn enable(&mut self) -> Result<(), StackError>;

    /// Register the UART service whose writes become `DataReceived` events.
    fn register_service(&mut self) -> Result<(), StackError>;

    /// Start connectable advertising under `name` with the given payload.
    fn start_advertising(
        &mut self,
        name: &str,
        payload: &AdvertisingPayload,
    ) -> Result<(), StackError>;
}
