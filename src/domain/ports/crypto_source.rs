use crate::domain::error::LookupError;
use crate::domain::values::research_window::ResearchWindow;
use async_trait::async_trait;

/// Currency metadata response. `code` is the provider's application-level
/// status, which is what decides existence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurrencyInfo {
    pub code: String,
    pub full_name: Option<String>,
}

/// Daily candle response for one trading pair.
///
/// Each row is `[timestamp, close, ...]`; cells may be numbers or numeric
/// strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandleSeries {
    pub code: String,
    pub rows: Vec<Vec<serde_json::Value>>,
}

/// Digital-currency market-data endpoints.
///
/// Any decodable response is returned as-is, whatever its code; only network
/// and decode errors become `Err`.
#[async_trait]
pub trait CryptoDataSource: Send + Sync {
    fn name(&self) -> &str;

    async fn currency(&self, base: &str) -> Result<CurrencyInfo, LookupError>;

    /// `pair` is `BASE-QUOTE`.
    async fn daily_candles(
        &self,
        pair: &str,
        window: &ResearchWindow,
    ) -> Result<CandleSeries, LookupError>;
}
