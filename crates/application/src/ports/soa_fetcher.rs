use async_trait::async_trait;
use soawatch_domain::{DomainError, DomainName, SoaSnapshot};

/// Port for retrieving the current SOA record of a zone.
///
/// Implementations perform exactly one upstream exchange per call and
/// report both "no answer" and "wrong record type" as
/// [`DomainError::NoRecord`].
#[async_trait]
pub trait SoaFetcher: Send + Sync {
    async fn fetch_soa(&self, domain: &DomainName) -> Result<SoaSnapshot, DomainError>;
}
