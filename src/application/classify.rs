use crate::domain::entities::entity::{Entity, ResolutionAttempt};
use crate::domain::ports::symbol_resolver::SymbolResolver;
use crate::domain::values::asset_domain::AssetDomain;
use crate::domain::values::ticker;
use serde::Serialize;
use std::sync::Arc;

/// One input symbol and what it resolved to.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedSymbol {
    pub input_symbol: String,
    pub domain: AssetDomain,
    pub entity: Option<Entity>,
}

/// Totals for a batch, so callers can report unresolved inputs.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub resolved: usize,
    pub overflowing: usize,
    pub unresolved: Vec<String>,
}

impl BatchSummary {
    pub fn from_records(records: &[ClassifiedSymbol]) -> Self {
        let mut summary = BatchSummary {
            total: records.len(),
            ..Default::default()
        };
        for record in records {
            match &record.entity {
                Some(entity) => {
                    summary.resolved += 1;
                    if entity.is_overflowing() {
                        summary.overflowing += 1;
                    }
                }
                None => summary.unresolved.push(record.input_symbol.clone()),
            }
        }
        summary
    }
}

/// Probes both domains for every symbol and builds entities for the domain
/// the symbol was submitted under.
pub struct EntityClassifier {
    equity: Arc<dyn SymbolResolver>,
    crypto: Arc<dyn SymbolResolver>,
}

impl EntityClassifier {
    pub fn new(equity: Arc<dyn SymbolResolver>, crypto: Arc<dyn SymbolResolver>) -> Self {
        Self { equity, crypto }
    }

    /// Run both probes concurrently and keep both outcomes.
    pub async fn probe(&self, symbol: &str) -> ResolutionAttempt {
        let stripped = ticker::strip(symbol);
        let (equity, crypto) = tokio::join!(
            self.equity.resolve(stripped),
            self.crypto.resolve(stripped)
        );
        ResolutionAttempt::new(symbol, equity, crypto)
    }

    /// Entity for `symbol` in `domain`, or `None` if that domain has no match.
    pub async fn classify(&self, symbol: &str, domain: AssetDomain) -> Option<Entity> {
        let attempt = self.probe(symbol).await;

        if let Err(e) = attempt.outcome(domain) {
            if e.is_not_found() {
                tracing::info!(symbol, %domain, "symbol not found");
            } else {
                tracing::warn!(symbol, %domain, error = %e, "symbol could not be checked");
            }
        }

        let entity = attempt.into_entity(domain);
        if let Some(entity) = &entity {
            tracing::info!(
                symbol,
                ticker = %entity.ticker(),
                %domain,
                overflowing = entity.is_overflowing(),
                points = entity.price_chart().len(),
                "symbol resolved"
            );
        }
        entity
    }

    /// Classify each symbol in turn, equities first. Failures never stop the
    /// batch; every input gets a record.
    pub async fn classify_batch(
        &self,
        equities: &[String],
        cryptos: &[String],
    ) -> Vec<ClassifiedSymbol> {
        let inputs = equities
            .iter()
            .map(|s| (s, AssetDomain::Equity))
            .chain(cryptos.iter().map(|s| (s, AssetDomain::Crypto)));

        let mut records = Vec::with_capacity(equities.len() + cryptos.len());
        for (symbol, domain) in inputs {
            let entity = self.classify(symbol, domain).await;
            records.push(ClassifiedSymbol {
                input_symbol: symbol.clone(),
                domain,
                entity,
            });
        }
        records
    }
}
