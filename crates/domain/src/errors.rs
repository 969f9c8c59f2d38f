use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Missing domain parameter")]
    MissingDomain,

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Resolver error for domain {domain}: {reason}")]
    Resolver { domain: String, reason: String },

    #[error("No SOA record found for domain {domain}")]
    NoRecord { domain: String },

    #[error("Transport timeout talking to {server}")]
    TransportTimeout { server: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Too many active watch sessions")]
    TooManySessions,
}

impl DomainError {
    /// Wraps a lower-level failure as a resolver error for `domain`.
    ///
    /// Errors that already name a domain are passed through unchanged.
    pub fn resolver(domain: &str, cause: DomainError) -> Self {
        match cause {
            Self::MissingDomain
            | Self::InvalidDomainName(_)
            | Self::Resolver { .. }
            | Self::NoRecord { .. } => cause,
            other => Self::Resolver {
                domain: domain.to_string(),
                reason: other.to_string(),
            },
        }
    }

    pub fn no_record(domain: &str) -> Self {
        Self::NoRecord {
            domain: domain.to_string(),
        }
    }

    /// True for errors caused by the caller's input rather than the resolver.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::MissingDomain | Self::InvalidDomainName(_))
    }
}
