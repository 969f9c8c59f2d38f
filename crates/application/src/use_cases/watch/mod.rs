mod check_soa;
mod fetch_soa;

pub use check_soa::CheckSoaUseCase;
pub use fetch_soa::FetchSoaUseCase;
