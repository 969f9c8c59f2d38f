use std::fmt;
use std::sync::Arc;

/// Opaque rendering of an SOA resource record.
///
/// Two snapshots are equal only when their text is byte-for-byte equal;
/// the fields are never parsed back out.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SoaSnapshot(Arc<str>);

impl SoaSnapshot {
    pub fn new(rendered: impl Into<Arc<str>>) -> Self {
        Self(rendered.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SoaSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A detected change of the SOA record for one watched domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoaChange {
    pub domain: Arc<str>,
    pub snapshot: SoaSnapshot,
}

impl SoaChange {
    pub fn new(domain: impl Into<Arc<str>>, snapshot: SoaSnapshot) -> Self {
        Self {
            domain: domain.into(),
            snapshot,
        }
    }
}

impl fmt::Display for SoaChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SOA for domain {} has changed to {}",
            self.domain, self.snapshot
        )
    }
}
