use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker that identifies a string as a ticker symbol.
pub const SIGIL: char = '$';

/// Remove a single leading sigil, if present.
pub fn strip(symbol: &str) -> &str {
    symbol.strip_prefix(SIGIL).unwrap_or(symbol)
}

/// Prefix with one sigil. Inverse of [`strip`].
pub fn attach_sigil(symbol: &str) -> String {
    format!("{SIGIL}{symbol}")
}

/// Canonical form: exactly one leading sigil, whole string upper-cased.
pub fn normalize(symbol: &str) -> String {
    attach_sigil(symbol.trim_start_matches(SIGIL)).to_uppercase()
}

/// Canonical ticker. Always sigil-prefixed and upper-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Ticker(String);

impl Ticker {
    pub fn new(symbol: &str) -> Self {
        Ticker(normalize(symbol))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The ticker without its sigil.
    pub fn bare(&self) -> &str {
        strip(&self.0)
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Ticker {
    fn from(value: String) -> Self {
        Ticker::new(&value)
    }
}

impl From<Ticker> for String {
    fn from(value: Ticker) -> Self {
        value.0
    }
}
