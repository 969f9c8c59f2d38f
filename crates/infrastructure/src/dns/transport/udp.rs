//! Plain UDP exchange with the upstream resolver (RFC 1035 §4.2.1).
//!
//! The socket is connected to the upstream, so datagrams from any other
//! source never reach us. Truncation is left to the caller.

use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use soawatch_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::debug;

/// Large enough for any EDNS(0) answer an SOA query can produce.
const RECV_BUFFER_SIZE: usize = 4096;

pub struct UdpTransport {
    upstream: SocketAddr,
}

impl UdpTransport {
    pub fn new(upstream: SocketAddr) -> Self {
        Self { upstream }
    }

    async fn connected_socket(&self) -> Result<UdpSocket, DomainError> {
        let local: SocketAddr = match self.upstream {
            SocketAddr::V4(_) => (Ipv4Addr::UNSPECIFIED, 0).into(),
            SocketAddr::V6(_) => (Ipv6Addr::UNSPECIFIED, 0).into(),
        };

        let socket = UdpSocket::bind(local)
            .await
            .map_err(|e| DomainError::Transport(format!("UDP bind failed: {}", e)))?;
        socket.connect(self.upstream).await.map_err(|e| {
            DomainError::Transport(format!("UDP connect to {} failed: {}", self.upstream, e))
        })?;

        Ok(socket)
    }

    async fn exchange(&self, query: &[u8]) -> Result<Vec<u8>, DomainError> {
        let socket = self.connected_socket().await?;

        socket.send(query).await.map_err(|e| {
            DomainError::Transport(format!("UDP send to {} failed: {}", self.upstream, e))
        })?;
        debug!(upstream = %self.upstream, len = query.len(), "SOA query sent over UDP");

        let mut buf = vec![0u8; RECV_BUFFER_SIZE];
        let len = socket.recv(&mut buf).await.map_err(|e| {
            DomainError::Transport(format!("UDP receive from {} failed: {}", self.upstream, e))
        })?;
        buf.truncate(len);

        Ok(buf)
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
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

        debug!(upstream = %self.upstream, len = bytes.len(), "UDP answer received");

        Ok(TransportResponse {
            bytes,
            protocol_used: "UDP",
        })
    }
}
