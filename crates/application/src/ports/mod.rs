mod soa_fetcher;

pub use soa_fetcher::SoaFetcher;
