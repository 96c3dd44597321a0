use std::fmt;

use crate::error::BindError;

/// Opaque token identifying one registration on a connection.
///
/// Handed to the transport when a base path is bound, and handed back by
/// the transport on every inbound message so the connection can resolve
/// the owning registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegistrationId(u64);

impl RegistrationId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for RegistrationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Boundary to the bus transport that owns connection setup, message
/// serialization and delivery.
///
/// Exact bindings receive precise-match delivery. Fallback bindings
/// receive longest-matching-prefix delivery for any path not otherwise
/// exactly claimed. For each delivered message the transport calls back
/// into [`Connection::resolve`] with the binding's token and the
/// message's addressed path.
///
/// [`Connection::resolve`]: crate::Connection::resolve
pub trait PathTransport {
    /// Bind `path` for precise-match delivery.
    fn register_exact_path(&mut self, path: &str, token: RegistrationId) -> Result<(), BindError>;

    /// Bind `path` as a fallback catching every path below it.
    fn register_fallback_path(&mut self, path: &str, token: RegistrationId)
    -> Result<(), BindError>;

    /// Release a binding. Best-effort; failures are not reported.
    fn unregister_path(&mut self, path: &str);
}
