//! Transport connector seam
//!
//! The SSH subsystem channel (or any other byte transport) is an external
//! collaborator; sessions only require an established duplex stream. Tests
//! substitute an in-memory pipe.

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncWrite};

use crate::config::SessionConfig;

/// Establishes the byte stream a [`crate::NetconfSession`] runs over.
#[async_trait]
pub trait TransportConnector: Send + Sync {
    type Stream: AsyncRead + AsyncWrite + Unpin + Send;

    /// Connect to `host`, honoring the configured port, username and
    /// connect timeout.
    async fn connect(&self, host: &str, config: &SessionConfig) -> anyhow::Result<Self::Stream>;
}
