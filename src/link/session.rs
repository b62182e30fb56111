//! Remote session.

/// The single active remote connection.
///
/// Owns the connection handle, i.e. the reference taken on the stack's
/// connection object. Dropping the session drops the handle, which is how
/// the reference is given back; handle types that wrap a ref-counted stack
/// object release it in their `Drop`.
#[derive(Debug)]
pub struct Session<H> {
    handle: H,
}

impl<H> Session<H> {
    /// Start a session on a freshly connected handle.
    pub fn new(handle: H) -> Self {
        Self { handle }
    }

    /// Get the connection handle.
    #[inline]
    pub fn handle(&self) -> &H {
        &self.handle
    }

    /// End the session and take the handle back.
    pub fn into_handle(self) -> H {
        self.handle
    }
}

impl<H: PartialEq> Session<H> {
    /// Whether `handle` refers to this session's connection.
    #[inline]
    pub fn matches(&self, handle: &H) -> bool {
        self.handle == *handle
    }
}
