//! NETCONF 1.0 message framing
//!
//! Messages are delimited by the `]]>]]>` end-of-message sequence. The
//! reader accumulates bytes until a delimiter appears, so pipelined messages
//! arriving in one read are split correctly across calls.

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::error::NetconfError;
use crate::Result;

/// NETCONF 1.0 end-of-message delimiter.
pub const END_OF_MESSAGE: &str = "]]>]]>";

const READ_CHUNK: usize = 4096;

/// A transport stream with NETCONF message framing on both directions.
#[derive(Debug)]
pub struct Framed<S> {
    stream: S,
    buffer: Vec<u8>,
}

impl<S: AsyncRead + AsyncWrite + Unpin> Framed<S> {
    pub fn new(stream: S) -> Self {
        Self {
            stream,
            buffer: Vec::new(),
        }
    }

    /// Read one message, stripping the delimiter and surrounding
    /// whitespace. Bytes past the delimiter stay buffered for the next
    /// call. EOF before a complete message is a protocol error.
    pub async fn read_frame(&mut self) -> Result<String> {
        loop {
            if let Some(position) = find_delimiter(&self.buffer) {
                let mut frame: Vec<u8> = self
                    .buffer
                    .drain(..position + END_OF_MESSAGE.len())
                    .collect();
                frame.truncate(position);
                let message = String::from_utf8(frame)?;
                return Ok(message.trim().to_string());
            }

            let mut chunk = [0u8; READ_CHUNK];
            let read = self.stream.read(&mut chunk).await?;
            if read == 0 {
                return Err(NetconfError::ConnectionClosed);
            }
            self.buffer.extend_from_slice(&chunk[..read]);
        }
    }

    /// Write one message followed by the delimiter and flush.
    pub async fn write_frame(&mut self, message: &str) -> Result<()> {
        self.stream.write_all(message.as_bytes()).await?;
        self.stream.write_all(END_OF_MESSAGE.as_bytes()).await?;
        self.stream.flush().await?;
        Ok(())
    }

    /// Shut down the write half of the transport.
    pub async fn shutdown(&mut self) -> Result<()> {
        self.stream.shutdown().await?;
        Ok(())
    }
}

fn find_delimiter(buffer: &[u8]) -> Option<usize> {
    let delimiter = END_OF_MESSAGE.as_bytes();
    if buffer.len() < delimiter.len() {
        return None;
    }
    buffer
        .windows(delimiter.len())
        .position(|window| window == delimiter)
}
