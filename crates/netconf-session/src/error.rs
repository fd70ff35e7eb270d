//! Error types for NETCONF sessions

use thiserror::Error;

use crate::session::SessionState;

/// Errors raised by the session state machine and the framing layer.
#[derive(Debug, Error)]
pub enum NetconfError {
    #[error("Invalid session state: expected {expected}, found {actual}")]
    InvalidState {
        expected: &'static str,
        actual: SessionState,
    },

    #[error("Malformed hello from server: {reply}")]
    MalformedHello { reply: String },

    #[error("Server rejected session during hello: {reply}")]
    HelloRejected { reply: String },

    #[error("RPC returned an error: {reply}")]
    RpcError { reply: String },

    #[error("Timed out waiting for {operation} after {seconds}s")]
    Timeout {
        operation: &'static str,
        seconds: u64,
    },

    #[error("Connection closed by peer")]
    ConnectionClosed,

    #[error("Message is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
