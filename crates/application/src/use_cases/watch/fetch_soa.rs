use crate::ports::SoaFetcher;
use soawatch_domain::{DomainError, DomainName, SoaSnapshot};
use std::sync::Arc;
use tracing::{debug, warn};

/// Use case: fetch the baseline SOA snapshot that starts a watch session.
pub struct FetchSoaUseCase {
    fetcher: Arc<dyn SoaFetcher>,
}

impl FetchSoaUseCase {
    pub fn new(fetcher: Arc<dyn SoaFetcher>) -> Self {
        Self { fetcher }
    }

    pub async fn execute(&self, domain: &DomainName) -> Result<SoaSnapshot, DomainError> {
        debug!(domain = %domain, "Fetching initial SOA");

        match self.fetcher.fetch_soa(domain).await {
            Ok(snapshot) => {
                debug!(domain = %domain, snapshot = %snapshot, "Initial SOA fetched");
                Ok(snapshot)
            }
            Err(e) => {
                warn!(domain = %domain, error = %e, "Initial SOA fetch failed");
                Err(e)
            }
        }
    }
}
