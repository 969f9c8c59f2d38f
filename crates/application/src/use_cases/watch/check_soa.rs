use crate::ports::SoaFetcher;
use soawatch_domain::{DomainError, DomainName, SoaChange, SoaSnapshot};
use std::sync::Arc;
use tracing::{debug, info};

/// Use case: one periodic step of a watch session.
///
/// Fetches the current SOA and compares it with `baseline`. The baseline is
/// replaced only when the fetch succeeds and the snapshot text differs.
pub struct CheckSoaUseCase {
    fetcher: Arc<dyn SoaFetcher>,
}

impl CheckSoaUseCase {
    pub fn new(fetcher: Arc<dyn SoaFetcher>) -> Self {
        Self { fetcher }
    }

    pub async fn execute(
        &self,
        domain: &DomainName,
        baseline: &mut SoaSnapshot,
    ) -> Result<Option<SoaChange>, DomainError> {
        let current = self.fetcher.fetch_soa(domain).await?;

        if current == *baseline {
            debug!(domain = %domain, "SOA unchanged");
            return Ok(None);
        }

        info!(
            domain = %domain,
            previous = %baseline,
            current = %current,
            "SOA changed"
        );

        *baseline = current.clone();
        Ok(Some(SoaChange::new(domain.as_str(), current)))
    }
}
