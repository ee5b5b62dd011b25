use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("HTTP client error: {0}")]
    Http(String),
}

/// Failure of a single provider lookup.
///
/// Both variants mean "no match" to the classifier; the split only exists so
/// logs can tell a missing symbol from one that could not be checked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Provider says the symbol does not exist (or redirected / refused).
    #[error("Not found: {0}")]
    NotFound(String),

    /// Network error, malformed payload or parse failure.
    #[error("Transient failure: {0}")]
    Transient(String),
}

impl LookupError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::NotFound(_))
    }
}
