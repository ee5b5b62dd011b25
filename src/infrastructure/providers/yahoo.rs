use super::{build_client, endpoint};
use crate::domain::error::{DomainError, LookupError};
use crate::domain::ports::equity_source::{EquityChart, EquityDataSource};
use crate::domain::values::research_window::ResearchWindow;
use async_trait::async_trait;
use std::time::Duration;

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/120.0.0.0 Safari/537.36";

/// Yahoo Finance daily chart source using the v8 chart API (no auth required).
///
/// Redirects are not followed: Yahoo answers unknown or renamed symbols with
/// one, and that counts as "not found".
pub struct YahooChartSource {
    base_url: String,
    client: reqwest::Client,
}

impl YahooChartSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, DomainError> {
        Ok(Self {
            base_url: base_url.into(),
            client: build_client(BROWSER_USER_AGENT, timeout)?,
        })
    }
}

#[derive(Debug, serde::Deserialize)]
struct ChartResponse {
    chart: ChartResult,
}

#[derive(Debug, serde::Deserialize)]
struct ChartResult {
    result: Option<Vec<ChartData>>,
    error: Option<serde_json::Value>,
}

#[derive(Debug, serde::Deserialize)]
struct ChartData {
    meta: ChartMeta,
    #[serde(default)]
    timestamp: Vec<i64>,
    #[serde(default)]
    indicators: Option<Indicators>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChartMeta {
    #[serde(default)]
    long_name: Option<String>,
    #[serde(default)]
    short_name: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
struct Indicators {
    #[serde(default)]
    adjclose: Vec<AdjClose>,
}

#[derive(Debug, serde::Deserialize)]
struct AdjClose {
    #[serde(default)]
    adjclose: Vec<Option<f64>>,
}

fn into_chart(symbol: &str, data: ChartResponse) -> Result<EquityChart, LookupError> {
    if let Some(err) = data.chart.error.filter(|e| !e.is_null()) {
        return Err(LookupError::NotFound(format!("Yahoo error for {symbol}: {err}")));
    }

    let first = data
        .chart
        .result
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| LookupError::NotFound(format!("No chart results for {symbol}")))?;

    let adjusted_closes = first
        .indicators
        .and_then(|ind| ind.adjclose.into_iter().next())
        .map(|a| a.adjclose)
        .unwrap_or_default();

    Ok(EquityChart {
        long_name: first.meta.long_name.or(first.meta.short_name),
        timestamps: first.timestamp,
        adjusted_closes,
    })
}

#[async_trait]
impl EquityDataSource for YahooChartSource {
    fn name(&self) -> &str {
        "yahoo_finance"
    }

    async fn daily_chart(
        &self,
        symbol: &str,
        window: &ResearchWindow,
    ) -> Result<EquityChart, LookupError> {
        let url = endpoint(&self.base_url, &["v8", "finance", "chart", symbol])?;
        let period1 = window.start_timestamp().to_string();
        let period2 = window.end_timestamp().to_string();

        let resp = self
            .client
            .get(url)
            .query(&[
                ("period1", period1.as_str()),
                ("period2", period2.as_str()),
                ("interval", "1d"),
                ("events", "history"),
            ])
            .send()
            .await
            .map_err(|e| LookupError::Transient(e.to_string()))?;

        let status = resp.status();
        if status.is_redirection() {
            return Err(LookupError::NotFound(format!(
                "Yahoo redirected {symbol} ({status})"
            )));
        }
        if !status.is_success() {
            return Err(LookupError::NotFound(format!(
                "Yahoo API returned {status} for {symbol}"
            )));
        }

        let data: ChartResponse = resp
            .json()
            .await
            .map_err(|e| LookupError::Transient(e.to_string()))?;

        into_chart(symbol, data)
    }
}
