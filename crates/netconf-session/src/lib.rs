//! PCE NETCONF Session
//!
//! A bounded NETCONF 1.0 session state machine over a caller-supplied
//! transport stream: hello handshake, message-id'd RPC exchange with
//! `]]>]]>` framing, `<ok/>`-enforcing configuration calls and idempotent
//! disconnect. The SSH transport itself is an external collaborator behind
//! the [`TransportConnector`] seam.

pub mod config;
pub mod error;
pub mod frame;
pub mod session;
pub mod transport;

pub use config::SessionConfig;
pub use error::NetconfError;
pub use frame::{Framed, END_OF_MESSAGE};
pub use session::{NetconfSession, SessionState};
pub use transport::TransportConnector;

/// Result type for NETCONF session operations
pub type Result<T> = std::result::Result<T, NetconfError>;
