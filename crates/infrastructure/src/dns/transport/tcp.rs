//! Length-framed TCP exchange (RFC 1035 §4.2.2), used when a UDP answer
//! comes back truncated.

use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use soawatch_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

pub struct TcpTransport {
    upstream: SocketAddr,
}

impl TcpTransport {
    pub fn new(upstream: SocketAddr) -> Self {
        Self { upstream }
    }

    async fn exchange(&self, query: &[u8]) -> Result<Vec<u8>, DomainError> {
        let mut stream = TcpStream::connect(self.upstream).await.map_err(|e| {
            DomainError::Transport(format!("TCP connect to {} failed: {}", self.upstream, e))
        })?;
        // Single small request; don't wait on Nagle.
        let _ = stream.set_nodelay(true);

        write_framed(&mut stream, query).await?;
        debug!(upstream = %self.upstream, len = query.len(), "SOA query sent over TCP");

        read_framed(&mut stream).await
    }
}

#[async_trait]
impl DnsTransport for TcpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let bytes = tokio::time::timeout(timeout, self.exchange(message_bytes))
            .await
            .map_err(|_| DomainError::TransportTimeout {
                server: self.upstream.to_string(),
            })??;

        debug!(upstream = %self.upstream, len = bytes.len(), "TCP answer received");

        Ok(TransportResponse {
            bytes,
            protocol_used: "TCP",
        })
    }
}

/// Writes one DNS message preceded by its big-endian `u16` length.
pub(crate) async fn write_framed<W>(writer: &mut W, message: &[u8]) -> Result<(), DomainError>
where
    W: AsyncWrite + Unpin,
{
    let len = u16::try_from(message.len()).map_err(|_| {
        DomainError::Transport(format!("{}-byte message exceeds TCP frame limit", message.len()))
    })?;

    let io_err = |e: std::io::Error| DomainError::Transport(format!("TCP write failed: {}", e));
    writer.write_u16(len).await.map_err(io_err)?;
    writer.write_all(message).await.map_err(io_err)?;
    writer.flush().await.map_err(io_err)
}

/// Reads one length-prefixed DNS message.
pub(crate) async fn read_framed<R>(reader: &mut R) -> Result<Vec<u8>, DomainError>
where
    R: AsyncRead + Unpin,
{
    let io_err = |e: std::io::Error| DomainError::Transport(format!("TCP read failed: {}", e));

    let len = reader.read_u16().await.map_err(io_err)?;
    let mut message = vec![0u8; usize::from(len)];
    reader.read_exact(&mut message).await.map_err(io_err)?;

    Ok(message)
}
