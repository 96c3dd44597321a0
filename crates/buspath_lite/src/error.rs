use thiserror::Error;

/// Refusal from the transport when asked to bind a base path, e.g.
/// because another connection already claims the exact path.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct BindError(String);

impl BindError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// Errors that can occur while registering an interface on a connection.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RegisterError {
    /// The registration request was malformed. A caller bug, never retried.
    #[error("invalid registration argument: {0}")]
    InvalidArgument(String),

    /// An interface with the identical literal pattern is already
    /// registered on this connection. The existing registration is left
    /// untouched.
    #[error("interface already registered at '{0}'")]
    DuplicateRegistration(String),

    /// The transport refused to bind the base path. The routing table is
    /// left unchanged.
    #[error("transport refused to bind '{path}'")]
    RegistrationFailed {
        path: String,
        #[source]
        source: BindError,
    },
}
