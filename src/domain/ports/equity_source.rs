use crate::domain::error::LookupError;
use crate::domain::values::research_window::ResearchWindow;
use async_trait::async_trait;

/// Daily chart payload from an equities provider.
///
/// `timestamps` and `adjusted_closes` are parallel arrays; the closes may be
/// shorter and may contain holes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EquityChart {
    pub long_name: Option<String>,
    pub timestamps: Vec<i64>,
    pub adjusted_closes: Vec<Option<f64>>,
}

/// Equities market-data endpoint.
///
/// Redirects and non-success statuses map to `LookupError::NotFound`;
/// network and decode errors to `LookupError::Transient`.
#[async_trait]
pub trait EquityDataSource: Send + Sync {
    fn name(&self) -> &str;

    async fn daily_chart(
        &self,
        symbol: &str,
        window: &ResearchWindow,
    ) -> Result<EquityChart, LookupError>;
}
