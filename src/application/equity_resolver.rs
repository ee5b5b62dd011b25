use crate::domain::error::LookupError;
use crate::domain::ports::equity_source::EquityDataSource;
use crate::domain::ports::symbol_resolver::{suppress_redundant_name, Resolution, SymbolResolver};
use crate::domain::values::company_name::CompanyNameNormalizer;
use crate::domain::values::price_point::zip_by_index;
use crate::domain::values::research_window::ResearchWindow;
use async_trait::async_trait;
use std::sync::Arc;

/// Resolves equity symbols: one chart request, cleaned company name.
pub struct EquityResolver {
    source: Arc<dyn EquityDataSource>,
    names: CompanyNameNormalizer,
    window: ResearchWindow,
}

impl EquityResolver {
    pub fn new(
        source: Arc<dyn EquityDataSource>,
        names: CompanyNameNormalizer,
        window: ResearchWindow,
    ) -> Self {
        Self {
            source,
            names,
            window,
        }
    }
}

#[async_trait]
impl SymbolResolver for EquityResolver {
    async fn resolve(&self, symbol: &str) -> Result<Resolution, LookupError> {
        let symbol = symbol.to_uppercase();
        let symbol = symbol.as_str();
        let chart = self
            .source
            .daily_chart(symbol, &self.window)
            .await
            .map_err(|e| {
                tracing::debug!(symbol, source = self.source.name(), error = %e, "equity lookup failed");
                e
            })?;

        let name = chart
            .long_name
            .as_deref()
            .map(|raw| self.names.normalize(raw));
        let price_chart = zip_by_index(&chart.timestamps, &chart.adjusted_closes);

        tracing::debug!(
            symbol,
            points = price_chart.len(),
            timestamps = chart.timestamps.len(),
            "equity chart resolved"
        );

        Ok(Resolution {
            name: suppress_redundant_name(name, symbol),
            price_chart,
        })
    }
}
