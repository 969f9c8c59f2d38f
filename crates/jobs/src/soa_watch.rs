use soawatch_application::use_cases::CheckSoaUseCase;
use soawatch_domain::{DomainName, SoaSnapshot, WatchEvent};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

const DEFAULT_INTERVAL_SECS: u64 = 600;

/// Why a watch session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchExit {
    /// The session's cancellation token fired.
    Cancelled,
    /// The event receiver was dropped.
    ConsumerClosed,
    /// A periodic fetch failed; a `WatchEvent::Failed` was offered to the consumer.
    FetchFailed,
    /// The interval was zero or too large to schedule; no fetch was made.
    InvalidInterval,
}

/// One watch session: polls the SOA of a single domain on a fixed interval
/// and reports changes against the last successfully fetched snapshot.
///
/// The first periodic check happens one full interval after the session
/// starts, since the caller already holds the initial snapshot.
pub struct SoaWatchJob {
    check_soa: Arc<CheckSoaUseCase>,
    domain: DomainName,
    baseline: SoaSnapshot,
    interval_secs: u64,
    events: mpsc::Sender<WatchEvent>,
    shutdown: CancellationToken,
}

impl SoaWatchJob {
    pub fn new(
        check_soa: Arc<CheckSoaUseCase>,
        domain: DomainName,
        baseline: SoaSnapshot,
        events: mpsc::Sender<WatchEvent>,
    ) -> Self {
        Self {
            check_soa,
            domain,
            baseline,
            interval_secs: DEFAULT_INTERVAL_SECS,
            events,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn start(self) -> JoinHandle<WatchExit> {
        tokio::spawn(self.run())
    }

    pub async fn run(mut self) -> WatchExit {
        info!(
            domain = %self.domain,
            interval_secs = self.interval_secs,
            "Starting SOA watch session"
        );

        let period = Duration::from_secs(self.interval_secs);
        let start = match Instant::now().checked_add(period) {
            Some(start) if !period.is_zero() => start,
            _ => {
                warn!(
                    domain = %self.domain,
                    interval_secs = self.interval_secs,
                    "Watch interval cannot be scheduled, ending session"
                );
                return WatchExit::InvalidInterval;
            }
        };
        let mut interval = tokio::time::interval_at(start, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!(domain = %self.domain, "SoaWatchJob: shutting down");
                    return WatchExit::Cancelled;
                }
                _ = self.events.closed() => {
                    info!(domain = %self.domain, "SoaWatchJob: consumer went away");
                    return WatchExit::ConsumerClosed;
                }
                _ = interval.tick() => {
                    if let Some(exit) = self.tick().await {
                        return exit;
                    }
                }
            }
        }
    }

    async fn tick(&mut self) -> Option<WatchExit> {
        match self.check_soa.execute(&self.domain, &mut self.baseline).await {
            Ok(Some(change)) => {
                if self.events.send(WatchEvent::Changed(change)).await.is_err() {
                    info!(domain = %self.domain, "SoaWatchJob: consumer went away");
                    return Some(WatchExit::ConsumerClosed);
                }
                None
            }
            Ok(None) => {
                debug!(domain = %self.domain, "No SOA change");
                None
            }
            Err(e) => {
                warn!(domain = %self.domain, error = %e, "SOA fetch failed, ending watch session");
                let _ = self.events.send(WatchEvent::Failed(e)).await;
                Some(WatchExit::FetchFailed)
            }
        }
    }
}
