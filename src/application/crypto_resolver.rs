use crate::domain::error::LookupError;
use crate::domain::ports::crypto_source::CryptoDataSource;
use crate::domain::ports::symbol_resolver::{suppress_redundant_name, Resolution, SymbolResolver};
use crate::domain::values::price_point::{points_from_rows, PricePoint};
use crate::domain::values::research_window::ResearchWindow;
use crate::domain::values::ticker;
use async_trait::async_trait;
use std::sync::Arc;

/// Resolves digital-currency symbols.
///
/// Existence is decided by the currency metadata endpoint alone. The chart is
/// best effort: quote currencies are tried one at a time, in priority order,
/// until one pair returns candles.
pub struct CryptoResolver {
    source: Arc<dyn CryptoDataSource>,
    quote_currencies: Vec<String>,
    success_code: String,
    window: ResearchWindow,
}

impl CryptoResolver {
    pub fn new(
        source: Arc<dyn CryptoDataSource>,
        quote_currencies: Vec<String>,
        success_code: String,
        window: ResearchWindow,
    ) -> Self {
        Self {
            source,
            quote_currencies: quote_currencies
                .into_iter()
                .map(|q| q.to_uppercase())
                .collect(),
            success_code,
            window,
        }
    }

    /// Quotes to try. An explicit quote that is in the priority list narrows
    /// the search to itself; anything else means the whole list.
    pub fn candidate_quotes(&self, explicit: Option<&str>) -> Vec<&str> {
        let listed = explicit.and_then(|e| self.quote_currencies.iter().find(|q| q.as_str() == e));
        match listed {
            Some(quote) => vec![quote.as_str()],
            None => self.quote_currencies.iter().map(String::as_str).collect(),
        }
    }

    async fn fetch_chart(&self, base: &str, explicit_quote: Option<&str>) -> Vec<PricePoint> {
        for quote in self.candidate_quotes(explicit_quote) {
            let pair = format!("{base}-{quote}");
            match self.source.daily_candles(&pair, &self.window).await {
                Ok(series) if series.code == self.success_code => {
                    let points = points_from_rows(&series.rows);
                    tracing::debug!(pair = %pair, points = points.len(), "crypto chart resolved");
                    return points;
                }
                Ok(series) => {
                    tracing::debug!(pair = %pair, code = %series.code, "no candles for pair");
                }
                Err(e) => {
                    tracing::debug!(pair = %pair, error = %e, "candle request failed");
                }
            }
        }

        tracing::debug!(base, "no quote currency produced a chart");
        Vec::new()
    }
}

/// Split `BASE-QUOTE` once on the first `-`. Both halves are upper-cased.
pub fn split_pair(symbol: &str) -> (String, Option<String>) {
    match symbol.split_once('-') {
        Some((base, quote)) => (base.to_uppercase(), Some(quote.to_uppercase())),
        None => (symbol.to_uppercase(), None),
    }
}

#[async_trait]
impl SymbolResolver for CryptoResolver {
    async fn resolve(&self, symbol: &str) -> Result<Resolution, LookupError> {
        let (base, quote) = split_pair(symbol);
        if base.is_empty() {
            return Err(LookupError::NotFound(format!("no base currency in '{symbol}'")));
        }

        let info = self.source.currency(&base).await.map_err(|e| {
            tracing::debug!(base = %base, source = self.source.name(), error = %e, "currency lookup failed");
            e
        })?;

        if info.code != self.success_code {
            return Err(LookupError::NotFound(format!(
                "{base}: provider code {}",
                info.code
            )));
        }

        let price_chart = self.fetch_chart(&base, quote.as_deref()).await;

        Ok(Resolution {
            name: suppress_redundant_name(info.full_name, &ticker::normalize(symbol)),
            price_chart,
        })
    }
}
