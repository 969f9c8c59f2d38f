use soawatch_domain::DomainError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

/// Admission control for watch sessions.
///
/// Without a limit every request is admitted; the active count is tracked
/// either way for logging.
#[derive(Clone, Default)]
pub struct SessionLimiter {
    semaphore: Option<Arc<Semaphore>>,
    active: Arc<AtomicUsize>,
}

impl SessionLimiter {
    pub fn new(max_sessions: Option<usize>) -> Self {
        Self {
            semaphore: max_sessions.map(|max| Arc::new(Semaphore::new(max))),
            active: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn unlimited() -> Self {
        Self::new(None)
    }

    pub fn try_acquire(&self) -> Result<SessionPermit, DomainError> {
        let permit = match &self.semaphore {
            Some(semaphore) => Some(
                Arc::clone(semaphore)
                    .try_acquire_owned()
                    .map_err(|_| DomainError::TooManySessions)?,
            ),
            None => None,
        };

        self.active.fetch_add(1, Ordering::Relaxed);
        Ok(SessionPermit {
            _permit: permit,
            active: Arc::clone(&self.active),
        })
    }

    pub fn active_sessions(&self) -> usize {
        self.active.load(Ordering::Relaxed)
    }
}

/// Held for the lifetime of one session; releases its slot on drop.
pub struct SessionPermit {
    _permit: Option<OwnedSemaphorePermit>,
    active: Arc<AtomicUsize>,
}

impl Drop for SessionPermit {
    fn drop(&mut self) {
        self.active.fetch_sub(1, Ordering::Relaxed);
    }
}
