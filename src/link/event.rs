//! Inbound wireless events.

/// Event delivered by the wireless stack.
///
/// Events are dispatched one at a time through
/// [`LinkSessionManager::handle_event`](super::LinkSessionManager::handle_event).
#[derive(Debug)]
pub enum LinkEvent<'a, H> {
    /// A peer connected. Carries the reference taken on the connection.
    Connected(H),
    /// A connection attempt failed with a stack error code.
    ConnectionFailed {
        /// Stack error code
        error: u8,
    },
    /// A peer disconnected.
    Disconnected {
        /// Connection that went away
        handle: &'a H,
        /// HCI reason code
        reason: u8,
    },
    /// A peer wrote to the UART service.
    DataReceived {
        /// Connection the data arrived on
        handle: &'a H,
        /// Raw payload
        data: &'a [u8],
    },
}
