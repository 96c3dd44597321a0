//! Object-path routing for a message-bus IPC connection.
//!
//! Maps inbound bus messages, addressed by hierarchical object paths, to
//! the interface handler registered for that path. A registration is
//! either exact (`/org/service/object`) or a subtree fallback
//! (`/org/service/objects/*`) catching everything below a prefix.
//!
//! The bus transport itself (connection setup, serialization, delivery)
//! is external and reached through [`PathTransport`]. Registration binds
//! a base path at the transport together with a [`RegistrationId`]
//! token; on every inbound message the transport hands the token back
//! and [`Connection::resolve`] answers with the owning capability table.
//!
//! # Example
//!
//! ```ignore
//! let mut conn = Connection::new(transport);
//! conn.register_interface(manager, "/org/example/Manager")?;
//! conn.register_interface(objects, "/org/example/objects/*")?;
//!
//! // Later, from the transport's dispatch callback:
//! if let Some(handler) = conn.resolve(token, path) {
//!     // forward the message payload to `handler`
//! }
//! ```

pub mod connection;
pub mod error;
pub mod interface;
pub mod path;
pub mod transport;

pub use connection::Connection;
pub use error::{BindError, RegisterError};
pub use interface::{Interface, InterfaceDescriptor, InterfaceHandler};
pub use transport::{PathTransport, RegistrationId};
