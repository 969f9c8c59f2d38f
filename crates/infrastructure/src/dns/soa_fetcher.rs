use super::forwarding::{DnsResponse, MessageBuilder, ResponseParser};
use super::transport::{DnsTransport, TcpTransport, UdpTransport};
use async_trait::async_trait;
use hickory_proto::rr::{RData, RecordType};
use soawatch_application::ports::SoaFetcher;
use soawatch_domain::{DomainError, DomainName, SoaSnapshot};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Fetches SOA records from a single upstream resolver.
///
/// Queries go out over UDP; a truncated UDP answer is retried once over TCP
/// against the same resolver.
pub struct UpstreamSoaFetcher {
    upstream: SocketAddr,
    timeout: Duration,
    udp: UdpTransport,
    tcp: TcpTransport,
}

impl UpstreamSoaFetcher {
    pub fn new(upstream: SocketAddr) -> Self {
        Self {
            upstream,
            timeout: DEFAULT_QUERY_TIMEOUT,
            udp: UdpTransport::new(upstream),
            tcp: TcpTransport::new(upstream),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn upstream(&self) -> SocketAddr {
        self.upstream
    }

    async fn exchange(&self, domain: &DomainName) -> Result<DnsResponse, DomainError> {
        let fqdn = domain.to_fqdn();
        let (id, query) = MessageBuilder::build_query_with_id(&fqdn, RecordType::SOA)?;

        let response = self.send_checked(&self.udp, id, &query).await?;
        if !response.truncated {
            return Ok(response);
        }

        debug!(domain = %fqdn, upstream = %self.upstream, "UDP answer truncated, retrying over TCP");
        self.send_checked(&self.tcp, id, &query).await
    }

    async fn send_checked(
        &self,
        transport: &dyn DnsTransport,
        id: u16,
        query: &[u8],
    ) -> Result<DnsResponse, DomainError> {
        let raw = transport.send(query, self.timeout).await?;
        let response = ResponseParser::parse(&raw.bytes)?;

        if response.id != id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "{} response ID {} does not match query ID {}",
                raw.protocol_used, response.id, id
            )));
        }

        Ok(response)
    }
}

#[async_trait]
impl SoaFetcher for UpstreamSoaFetcher {
    async fn fetch_soa(&self, domain: &DomainName) -> Result<SoaSnapshot, DomainError> {
        let response = self
            .exchange(domain)
            .await
            .map_err(|e| DomainError::resolver(domain.as_str(), e))?;

        let record = response
            .first_answer()
            .ok_or_else(|| DomainError::no_record(domain.as_str()))?;

        match record.data() {
            RData::SOA(_) => Ok(SoaSnapshot::new(record.to_string())),
            _ => {
                debug!(
                    domain = %domain,
                    record_type = %record.record_type(),
                    "First answer is not an SOA record"
                );
                Err(DomainError::no_record(domain.as_str()))
            }
        }
    }
}
