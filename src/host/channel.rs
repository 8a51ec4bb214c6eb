//! Newline-delimited JSON over any async byte stream
//!
//! One JSON-RPC message per line. TCP to a host in production;
//! `tokio::io::duplex` in tests.

use anyhow::{Context, Result};
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

pub struct JsonLinesChannel {
    reader: Box<dyn AsyncBufRead + Unpin + Send>,
    writer: Box<dyn AsyncWrite + Unpin + Send>,
}

impl JsonLinesChannel {
    pub fn new<R, W>(reader: R, writer: W) -> Self
    where
        R: AsyncRead + Unpin + Send + 'static,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        Self {
            reader: Box::new(BufReader::new(reader)),
            writer: Box::new(writer),
        }
    }

    /// Connect to a host listening on TCP
    pub async fn connect(addr: &str) -> Result<Self> {
        let stream = TcpStream::connect(addr)
            .await
            .with_context(|| format!("Failed to connect to host at {}", addr))?;
        let (reader, writer) = stream.into_split();
        Ok(Self::new(reader, writer))
    }

    pub async fn send(&mut self, message: &Value) -> Result<()> {
        let mut line = serde_json::to_string(message)?;
        line.push('\n');
        self.writer
            .write_all(line.as_bytes())
            .await
            .context("Failed to write to host channel")?;
        self.writer.flush().await?;
        Ok(())
    }

    /// Next message, or None once the peer has closed the stream
    ///
    /// Blank lines are skipped; lines that are not JSON are logged and skipped.
    pub async fn recv(&mut self) -> Result<Option<Value>> {
        let mut line = String::new();
        loop {
            line.clear();
            let read = self
                .reader
                .read_line(&mut line)
                .await
                .context("Failed to read from host channel")?;
            if read == 0 {
                return Ok(None);
            }

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            match serde_json::from_str(trimmed) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => tracing::warn!("Skipping malformed host message: {}", e),
            }
        }
    }
}
