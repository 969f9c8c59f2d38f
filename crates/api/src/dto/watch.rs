use serde::Deserialize;
use soawatch_domain::{DomainError, DomainName};

/// Query string of `GET /watch`.
///
/// Deserialized from the raw key/value pairs so a repeated `domain` does not
/// reject the request: the first occurrence wins, later ones are ignored.
#[derive(Deserialize, Debug, Default)]
#[serde(from = "Vec<(String, String)>")]
pub struct WatchQuery {
    pub domain: Option<String>,
}

impl From<Vec<(String, String)>> for WatchQuery {
    fn from(pairs: Vec<(String, String)>) -> Self {
        let domain = pairs
            .into_iter()
            .find(|(key, _)| key == "domain")
            .map(|(_, value)| value);
        Self { domain }
    }
}

impl WatchQuery {
    /// The requested zone; absent and blank values are both "missing".
    pub fn domain(&self) -> Result<DomainName, DomainError> {
        match self.domain.as_deref().map(str::trim) {
            None | Some("") => Err(DomainError::MissingDomain),
            Some(name) => DomainName::parse(name),
        }
    }
}
