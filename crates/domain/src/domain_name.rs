use crate::DomainError;
use std::fmt;
use std::sync::Arc;

/// A zone name as supplied by a client.
///
/// Only surrounding whitespace is stripped; case and any trailing dot are
/// kept so notifications echo the name the client asked for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainName(Arc<str>);

impl DomainName {
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidDomainName(
                "domain name must not be empty".to_string(),
            ));
        }
        Ok(Self(Arc::from(trimmed)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Fully-qualified form with exactly one trailing dot.
    pub fn to_fqdn(&self) -> String {
        if self.0.ends_with('.') {
            self.0.to_string()
        } else {
            format!("{}.", self.0)
        }
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DomainName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
