
pub use mock_fetcher::{soa, MockSoaFetcher};
