use crate::domain::error::LookupError;
use crate::domain::values::price_point::PricePoint;
use async_trait::async_trait;

/// What one domain resolver found for a stripped symbol.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Resolution {
    /// Display name, already cleaned and suppressed if it repeats the symbol.
    pub name: Option<String>,
    /// Chronological daily prices. Empty when no history was retrievable.
    pub price_chart: Vec<PricePoint>,
}

/// Resolves a stripped symbol within one domain.
///
/// Implementations are fail-soft: missing symbols and transport trouble both
/// come back as `Err(LookupError)`, never as a panic.
#[async_trait]
pub trait SymbolResolver: Send + Sync {
    async fn resolve(&self, symbol: &str) -> Result<Resolution, LookupError>;
}

/// `None` if `name` is blank or repeats `symbol` (case-insensitively).
pub fn suppress_redundant_name(name: Option<String>, symbol: &str) -> Option<String> {
    name.filter(|n| {
        let trimmed = n.trim();
        !trimmed.is_empty() && trimmed.to_uppercase() != symbol.to_uppercase()
    })
}
