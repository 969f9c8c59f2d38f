pub mod forwarding;
pub mod soa_fetcher;
pub mod transport;

pub use soa_fetcher::UpstreamSoaFetcher;
