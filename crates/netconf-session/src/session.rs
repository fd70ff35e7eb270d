//! NETCONF session state machine
//!
//! One session owns one transport stream and is driven through
//! `Disconnected -> Connected -> HelloExchanged -> Configuring ->
//! Disconnected`. All methods take `&mut self`, so a session cannot be
//! shared across threads; callers serialize connect/exchange/disconnect per
//! instance.

use std::fmt;
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncWrite};
use tokio::time::timeout;

use crate::config::SessionConfig;
use crate::error::NetconfError;
use crate::frame::Framed;
use crate::Result;

pub const BASE_CAPABILITY: &str = "urn:ietf:params:netconf:base:1.0";

const NETCONF_NS: &str = "urn:ietf:params:xml:ns:netconf:base:1.0";

/// Session lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Disconnected,
    Connected,
    HelloExchanged,
    Configuring,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionState::Disconnected => "disconnected",
            SessionState::Connected => "connected",
            SessionState::HelloExchanged => "hello-exchanged",
            SessionState::Configuring => "configuring",
        };
        f.write_str(s)
    }
}

/// A NETCONF 1.0 client session over a generic transport stream.
pub struct NetconfSession<S> {
    config: SessionConfig,
    state: SessionState,
    transport: Option<Framed<S>>,
    message_id: u64,
}

impl<S: AsyncRead + AsyncWrite + Unpin> NetconfSession<S> {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            state: SessionState::Disconnected,
            transport: None,
            message_id: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Attach an established stream and perform the hello handshake.
    ///
    /// A reply without a hello element, or one carrying an rpc-error, fails
    /// fast and tears the stream down.
    pub async fn connect(&mut self, stream: S) -> Result<()> {
        if self.state != SessionState::Disconnected {
            return Err(NetconfError::InvalidState {
                expected: "disconnected",
                actual: self.state,
            });
        }

        let mut framed = Framed::new(stream);
        framed.write_frame(&client_hello()).await?;
        self.state = SessionState::Connected;

        let seconds = self.config.hello_timeout_secs;
        let reply = match timeout(Duration::from_secs(seconds), framed.read_frame()).await {
            Ok(read) => read,
            Err(_) => {
                self.state = SessionState::Disconnected;
                return Err(NetconfError::Timeout {
                    operation: "hello",
                    seconds,
                });
            }
        };
        // The stream is dropped on any handshake failure.
        let reply = match reply {
            Ok(reply) => reply,
            Err(error) => {
                self.state = SessionState::Disconnected;
                return Err(error);
            }
        };
        if reply.contains("<rpc-error") {
            self.state = SessionState::Disconnected;
            return Err(NetconfError::HelloRejected { reply });
        }
        if !reply.contains("<hello") {
            self.state = SessionState::Disconnected;
            return Err(NetconfError::MalformedHello { reply });
        }

        log::info!("netconf hello exchange complete");
        self.transport = Some(framed);
        self.state = SessionState::HelloExchanged;
        Ok(())
    }

    /// Send one RPC and block for its framed reply.
    ///
    /// There is no read timeout: a hung exchange is bounded only by the
    /// underlying transport.
    pub async fn exchange(&mut self, rpc_body: &str) -> Result<String> {
        if !matches!(
            self.state,
            SessionState::HelloExchanged | SessionState::Configuring
        ) {
            return Err(NetconfError::InvalidState {
                expected: "hello-exchanged",
                actual: self.state,
            });
        }
        let Some(framed) = self.transport.as_mut() else {
            return Err(NetconfError::InvalidState {
                expected: "hello-exchanged",
                actual: SessionState::Disconnected,
            });
        };

        self.message_id += 1;
        let rpc = format!(
            "<rpc message-id=\"{}\" xmlns=\"{}\">{}</rpc>",
            self.message_id, NETCONF_NS, rpc_body
        );
        log::debug!("sending rpc message-id {}", self.message_id);
        framed.write_frame(&rpc).await?;
        framed.read_frame().await
    }

    /// Send an edit-config and enforce an `<ok/>` reply.
    pub async fn edit_config(&mut self, target: &str, config: &str) -> Result<()> {
        if !matches!(
            self.state,
            SessionState::HelloExchanged | SessionState::Configuring
        ) {
            return Err(NetconfError::InvalidState {
                expected: "hello-exchanged",
                actual: self.state,
            });
        }
        self.state = SessionState::Configuring;

        let body = format!(
            "<edit-config><target><{}/></target><config>{}</config></edit-config>",
            target, config
        );
        let reply = self.exchange(&body).await?;
        if reply.contains("<rpc-error") || !reply.contains("<ok/>") {
            log::error!("edit-config rejected: {}", reply);
            return Err(NetconfError::RpcError { reply });
        }
        Ok(())
    }

    /// Best-effort close-session RPC, transport shutdown and state reset.
    /// Idempotent: disconnecting twice or on a never-connected session is a
    /// no-op.
    pub async fn disconnect(&mut self) -> Result<()> {
        if let Some(mut framed) = self.transport.take() {
            self.message_id += 1;
            let rpc = format!(
                "<rpc message-id=\"{}\" xmlns=\"{}\"><close-session/></rpc>",
                self.message_id, NETCONF_NS
            );
            // Reply ignored; the peer may already be gone.
            if let Err(error) = framed.write_frame(&rpc).await {
                log::debug!("close-session send failed: {}", error);
            }
            if let Err(error) = framed.shutdown().await {
                log::debug!("transport shutdown failed: {}", error);
            }
            log::info!("netconf session closed");
        }
        self.state = SessionState::Disconnected;
        self.message_id = 0;
        Ok(())
    }
}

fn client_hello() -> String {
    format!(
        "<hello xmlns=\"{}\"><capabilities><capability>{}</capability></capabilities></hello>",
        NETCONF_NS, BASE_CAPABILITY
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::DuplexStream;

    const SERVER_HELLO: &str = "<hello xmlns=\"urn:ietf:params:xml:ns:netconf:base:1.0\">\
         <capabilities><capability>urn:ietf:params:netconf:base:1.0</capability></capabilities>\
         <session-id>1</session-id></hello>";

    fn session() -> NetconfSession<DuplexStream> {
        NetconfSession::new(SessionConfig::default())
    }

    async fn serve_hello(server: DuplexStream) -> Framed<DuplexStream> {
        let mut framed = Framed::new(server);
        let hello = framed.read_frame().await.unwrap();
        assert!(hello.contains("<hello"));
        assert!(hello.contains(BASE_CAPABILITY));
        framed.write_frame(SERVER_HELLO).await.unwrap();
        framed
    }

    #[tokio::test]
    async fn full_session_lifecycle() {
        let (client, server) = tokio::io::duplex(4096);
        let server_task = tokio::spawn(async move {
            let mut framed = serve_hello(server).await;

            let request = framed.read_frame().await.unwrap();
            assert!(request.contains("message-id=\"1\""));
            assert!(request.contains("<edit-config>"));
            assert!(request.contains("<target><running/></target>"));
            framed
                .write_frame("<rpc-reply message-id=\"1\"><ok/></rpc-reply>")
                .await
                .unwrap();

            let close = framed.read_frame().await.unwrap();
            assert!(close.contains("<close-session/>"));
        });

        let mut session = session();
        session.connect(client).await.unwrap();
        assert_eq!(session.state(), SessionState::HelloExchanged);

        session.edit_config("running", "<mtu>9000</mtu>").await.unwrap();
        assert_eq!(session.state(), SessionState::Configuring);

        session.disconnect().await.unwrap();
        assert_eq!(session.state(), SessionState::Disconnected);
        // Idempotent.
        session.disconnect().await.unwrap();

        server_task.await.unwrap();
    }

    #[tokio::test]
    async fn hello_with_rpc_error_is_rejected() {
        let (client, server) = tokio::io::duplex(4096);
        tokio::spawn(async move {
            let mut framed = Framed::new(server);
            let _ = framed.read_frame().await;
            let _ = framed
                .write_frame("<rpc-reply><rpc-error>denied</rpc-error></rpc-reply>")
                .await;
        });

        let mut session = session();
        let err = session.connect(client).await.unwrap_err();
        assert!(matches!(err, NetconfError::HelloRejected { .. }));
        assert_eq!(session.state(), SessionState::Disconnected);
    }

    #[tokio::test]
    async fn reply_without_hello_element_is_malformed() {
        let (client, server) = tokio::io::duplex(4096);
        tokio::spawn(async move {
            let mut framed = Framed::new(server);
            let _ = framed.read_frame().await;
            let _ = framed.write_frame("<greetings/>").await;
        });

        let mut session = session();
        let err = session.connect(client).await.unwrap_err();
        assert!(matches!(err, NetconfError::MalformedHello { .. }));
    }

    #[tokio::test]
    async fn edit_config_requires_ok_reply() {
        let (client, server) = tokio::io::duplex(4096);
        tokio::spawn(async move {
            let mut framed = serve_hello(server).await;
            let _ = framed.read_frame().await;
            let _ = framed
                .write_frame(
                    "<rpc-reply message-id=\"1\"><rpc-error>bad config</rpc-error></rpc-reply>",
                )
                .await;
        });

        let mut session = session();
        session.connect(client).await.unwrap();
        let err = session
            .edit_config("candidate", "<bad/>")
            .await
            .unwrap_err();
        assert!(matches!(err, NetconfError::RpcError { .. }));
    }

    #[tokio::test]
    async fn exchange_before_connect_is_an_invalid_state() {
        let mut session = session();
        let err = session.exchange("<get/>").await.unwrap_err();
        assert!(matches!(
            err,
            NetconfError::InvalidState {
                actual: SessionState::Disconnected,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn message_ids_increment_per_session() {
        let (client, server) = tokio::io::duplex(4096);
        tokio::spawn(async move {
            let mut framed = serve_hello(server).await;
            for _ in 0..2 {
                let request = framed.read_frame().await.unwrap();
                let reply = if request.contains("message-id=\"1\"") {
                    "<rpc-reply message-id=\"1\"><data/></rpc-reply>"
                } else {
                    "<rpc-reply message-id=\"2\"><data/></rpc-reply>"
                };
                framed.write_frame(reply).await.unwrap();
            }
        });

        let mut session = session();
        session.connect(client).await.unwrap();
        let first = session.exchange("<get/>").await.unwrap();
        assert!(first.contains("message-id=\"1\""));
        let second = session.exchange("<get/>").await.unwrap();
        assert!(second.contains("message-id=\"2\""));
    }
}
