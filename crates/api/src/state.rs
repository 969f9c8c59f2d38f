use crate::sessions::SessionLimiter;
use soawatch_application::use_cases::{CheckSoaUseCase, FetchSoaUseCase};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

#[derive(Clone)]
pub struct AppState {
    pub fetch_soa: Arc<FetchSoaUseCase>,
    pub check_soa: Arc<CheckSoaUseCase>,
    pub watch_interval_secs: u64,
    pub sessions: SessionLimiter,
    /// Parent of every session's cancellation token.
    pub shutdown: CancellationToken,
}
