use crate::{DomainError, SoaChange};
use std::fmt;

/// What a watch session reports to its consumer.
///
/// `Failed` is always the last event of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchEvent {
    Changed(SoaChange),
    Failed(DomainError),
}

impl WatchEvent {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl fmt::Display for WatchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Changed(change) => change.fmt(f),
            Self::Failed(err) => err.fmt(f),
        }
    }
}
