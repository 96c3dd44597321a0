use std::mem;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::RegisterError;
use crate::interface::{Interface, InterfaceHandler};
use crate::path;
use crate::transport::{PathTransport, RegistrationId};

/// One interface registration bound on a connection.
struct RegistrationEntry {
    id: RegistrationId,
    interface: Interface,
    /// The pattern with any `/*` suffix stripped; the string the
    /// transport binds.
    base_path: String,
}

/// A bus connection's routing table.
///
/// Owns every interface registered on the connection, in registration
/// order, together with the transport the registrations are bound on.
/// All calls are expected from the single event-loop thread that drives
/// the transport; the table provides no interior locking.
///
/// Dropping the connection releases every registration.
pub struct Connection<T: PathTransport> {
    transport: T,
    entries: Vec<RegistrationEntry>,
    next_id: u64,
}

impl<T: PathTransport> Connection<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Register `handler` for every path matching `pattern`.
    ///
    /// Concrete patterns are bound at the transport for exact delivery;
    /// patterns ending in `/*` are bound as fallbacks at their base
    /// path. The entry is recorded only after the transport accepts the
    /// binding, so the table and the transport never disagree.
    ///
    /// Duplicate detection is on the literal pattern string: `/a` and
    /// `/a/*` are distinct registrations even though they overlap. Two
    /// subtree patterns normalizing to the same base path are only
    /// caught by the transport at bind time.
    pub fn register_interface(
        &mut self,
        handler: Arc<dyn InterfaceHandler>,
        pattern: &str,
    ) -> Result<(), RegisterError> {
        if pattern.is_empty() {
            return Err(RegisterError::InvalidArgument(
                "path pattern must not be empty".to_string(),
            ));
        }

        if self.contains(pattern) {
            warn!(pattern = %pattern, "Rejecting registration with identical pattern");
            return Err(RegisterError::DuplicateRegistration(pattern.to_string()));
        }

        let fallback = path::is_subtree(pattern);
        let base_path = path::base_path(pattern);
        let id = RegistrationId::new(self.next_id);

        debug!(
            base_path = %base_path,
            fallback,
            interface = %handler.descriptor().name,
            "Binding registration path"
        );

        let bound = if fallback {
            self.transport.register_fallback_path(&base_path, id)
        } else {
            self.transport.register_exact_path(&base_path, id)
        };
        if let Err(source) = bound {
            warn!(
                base_path = %base_path,
                error = %source,
                "Transport refused path binding"
            );
            return Err(RegisterError::RegistrationFailed {
                path: base_path,
                source,
            });
        }

        self.next_id += 1;
        self.entries.push(RegistrationEntry {
            id,
            interface: Interface::new(pattern, handler),
            base_path,
        });

        Ok(())
    }

    /// True if an interface is registered with exactly this literal
    /// pattern. Not subtree-aware.
    pub fn contains(&self, pattern: &str) -> bool {
        self.entries.iter().any(|e| e.interface.path() == pattern)
    }

    /// Routing decision for one inbound message: does the registration
    /// named by `token` own `path`? False for unknown tokens.
    pub fn handles(&self, token: RegistrationId, path: &str) -> bool {
        self.entry(token)
            .is_some_and(|e| path::matches(path, e.interface.path()))
    }

    /// Resolve an inbound message to its capability table.
    ///
    /// Returns `None` when the token is unknown or the path falls
    /// outside the registration's pattern. Forwarding the message
    /// payload to the returned handler is the caller's job.
    pub fn resolve(&self, token: RegistrationId, path: &str) -> Option<&Arc<dyn InterfaceHandler>> {
        let entry = self.entry(token)?;

        if !path::matches(path, entry.interface.path()) {
            return None;
        }

        Some(entry.interface.handler())
    }

    /// Release every registration, most recently registered first.
    ///
    /// Issues one unregistration request per entry and empties the
    /// table. Unregistration is best-effort; teardown itself cannot
    /// fail. Also runs when the connection is dropped.
    pub fn unregister_all(&mut self) {
        let entries = mem::take(&mut self.entries);

        for entry in entries.iter().rev() {
            debug!(base_path = %entry.base_path, "Releasing registration path");
            self.transport.unregister_path(&entry.base_path);
        }
    }

    /// Registered interfaces, in registration order.
    pub fn interfaces(&self) -> impl Iterator<Item = &Interface> {
        self.entries.iter().map(|e| &e.interface)
    }

    /// Number of active registrations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    fn entry(&self, token: RegistrationId) -> Option<&RegistrationEntry> {
        self.entries.iter().find(|e| e.id == token)
    }
}

impl<T: PathTransport> Drop for Connection<T> {
    fn drop(&mut self) {
        if !self.entries.is_empty() {
            self.unregister_all();
        }
    }
}
