use soawatch_application::ports::SoaFetcher;
use soawatch_application::use_cases::{CheckSoaUseCase, FetchSoaUseCase};
use soawatch_domain::Config;
use soawatch_infrastructure::dns::UpstreamSoaFetcher;
use std::sync::Arc;
use tracing::info;

pub struct UseCases {
    pub fetch_soa: Arc<FetchSoaUseCase>,
    pub check_soa: Arc<CheckSoaUseCase>,
}

impl UseCases {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let upstream_fetcher = UpstreamSoaFetcher::new(config.resolver.upstream_addr()?)
            .with_timeout(config.resolver.timeout());

        info!(
            upstream = %upstream_fetcher.upstream(),
            timeout_secs = config.resolver.query_timeout,
            "SOA fetcher configured"
        );

        let fetcher: Arc<dyn SoaFetcher> = Arc::new(upstream_fetcher);

        Ok(Self {
            fetch_soa: Arc::new(FetchSoaUseCase::new(fetcher.clone())),
            check_soa: Arc::new(CheckSoaUseCase::new(fetcher)),
        })
    }
}
