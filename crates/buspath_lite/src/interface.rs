use std::fmt;
use std::sync::Arc;

/// The identity block every capability table exposes: which named bus
/// interface the handler set implements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDescriptor {
    /// Interface name, e.g. `org.example.Service.Manager`.
    pub name: String,
}

impl InterfaceDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for InterfaceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// The capability table for one registration: the handler set an
/// interface exposes for the paths it owns.
///
/// Implementations carry their own per-registration state, so only
/// conforming handler sets can be registered and no untyped context
/// pointer travels alongside the table.
pub trait InterfaceHandler {
    /// The identity block describing this interface.
    fn descriptor(&self) -> &InterfaceDescriptor;
}

/// One registered handler: its path pattern and its capability table.
/// Owned by the connection's routing table once registered.
pub struct Interface {
    path: String,
    handler: Arc<dyn InterfaceHandler>,
}

impl Interface {
    pub(crate) fn new(path: impl Into<String>, handler: Arc<dyn InterfaceHandler>) -> Self {
        Self {
            path: path.into(),
            handler,
        }
    }

    /// The pattern this interface was registered with, wildcard suffix
    /// included.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The capability table to forward matching messages to.
    pub fn handler(&self) -> &Arc<dyn InterfaceHandler> {
        &self.handler
    }
}

impl fmt::Debug for Interface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interface")
            .field("path", &self.path)
            .field("interface", &self.handler.descriptor().name)
            .finish()
    }
}
