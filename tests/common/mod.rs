//! Shared test helpers: in-memory market-data sources.
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tickerlens::config::ResolverConfig;
use tickerlens::domain::error::LookupError;
use tickerlens::domain::ports::crypto_source::{CandleSeries, CryptoDataSource, CurrencyInfo};
use tickerlens::domain::ports::equity_source::{EquityChart, EquityDataSource};
use tickerlens::domain::values::research_window::ResearchWindow;
use tickerlens::TickerLens;

pub const OK: &str = "200000";
pub const DAY: i64 = 86_400;
/// 2024-03-01T14:30:00Z
pub const T0: i64 = 1_709_303_400;

pub fn window() -> ResearchWindow {
    ResearchWindow::trailing_months(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(), 1)
}

pub fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
}

/// `n` consecutive daily timestamps starting at `T0`.
pub fn timestamps(n: usize) -> Vec<i64> {
    (0..n as i64).map(|i| T0 + i * DAY).collect()
}

#[derive(Default)]
pub struct StubEquities {
    charts: HashMap<String, Result<EquityChart, LookupError>>,
    pub requests: Mutex<Vec<String>>,
}

impl StubEquities {
    pub fn with(mut self, symbol: &str, name: &str, closes: Vec<Option<f64>>, days: usize) -> Self {
        self.charts.insert(
            symbol.to_string(),
            Ok(EquityChart {
                long_name: Some(name.to_string()),
                timestamps: timestamps(days),
                adjusted_closes: closes,
            }),
        );
        self
    }

    pub fn failing(mut self, symbol: &str, err: LookupError) -> Self {
        self.charts.insert(symbol.to_string(), Err(err));
        self
    }
}

#[async_trait]
impl EquityDataSource for StubEquities {
    fn name(&self) -> &str {
        "stub-equities"
    }

    async fn daily_chart(
        &self,
        symbol: &str,
        _window: &ResearchWindow,
    ) -> Result<EquityChart, LookupError> {
        self.requests.lock().unwrap().push(symbol.to_string());
        self.charts
            .get(symbol)
            .cloned()
            .unwrap_or_else(|| Err(LookupError::NotFound(symbol.to_string())))
    }
}

#[derive(Default)]
pub struct StubCryptos {
    currencies: HashMap<String, Result<CurrencyInfo, LookupError>>,
    candles: HashMap<String, Result<CandleSeries, LookupError>>,
    pub currency_requests: Mutex<Vec<String>>,
    pub pair_requests: Mutex<Vec<String>>,
}

impl StubCryptos {
    pub fn currency(mut self, base: &str, full_name: &str) -> Self {
        self.currencies.insert(
            base.to_string(),
            Ok(CurrencyInfo {
                code: OK.into(),
                full_name: Some(full_name.to_string()),
            }),
        );
        self
    }

    pub fn currency_response(mut self, base: &str, result: Result<CurrencyInfo, LookupError>) -> Self {
        self.currencies.insert(base.to_string(), result);
        self
    }

    /// Successful candles for `pair`, one row per close, oldest first.
    pub fn candles(mut self, pair: &str, closes: &[&str]) -> Self {
        let rows = timestamps(closes.len())
            .into_iter()
            .zip(closes)
            .map(|(ts, close)| vec![json!(ts.to_string()), json!(close), json!("0")])
            .collect();
        self.candles.insert(
            pair.to_string(),
            Ok(CandleSeries {
                code: OK.into(),
                rows,
            }),
        );
        self
    }

    /// Same as [`candles`](Self::candles) but rows arrive newest first.
    pub fn candles_newest_first(mut self, pair: &str, closes: &[&str]) -> Self {
        self = self.candles(pair, closes);
        if let Some(Ok(series)) = self.candles.get_mut(pair) {
            series.rows.reverse();
        }
        self
    }

    /// Candle response for `pair` carrying a non-success code.
    pub fn rejected_pair(mut self, pair: &str, code: &str) -> Self {
        self.candles.insert(
            pair.to_string(),
            Ok(CandleSeries {
                code: code.into(),
                rows: vec![],
            }),
        );
        self
    }

    pub fn broken_pair(mut self, pair: &str) -> Self {
        self.candles
            .insert(pair.to_string(), Err(LookupError::Transient("connection reset".into())));
        self
    }

    pub fn pairs_requested(&self) -> Vec<String> {
        self.pair_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CryptoDataSource for StubCryptos {
    fn name(&self) -> &str {
        "stub-cryptos"
    }

    async fn currency(&self, base: &str) -> Result<CurrencyInfo, LookupError> {
        self.currency_requests.lock().unwrap().push(base.to_string());
        self.currencies.get(base).cloned().unwrap_or_else(|| {
            Ok(CurrencyInfo {
                code: "900003".into(),
                full_name: None,
            })
        })
    }

    async fn daily_candles(
        &self,
        pair: &str,
        _window: &ResearchWindow,
    ) -> Result<CandleSeries, LookupError> {
        self.pair_requests.lock().unwrap().push(pair.to_string());
        self.candles.get(pair).cloned().unwrap_or_else(|| {
            Ok(CandleSeries {
                code: "400100".into(),
                rows: vec![],
            })
        })
    }
}

pub fn config(quotes: &[&str]) -> ResolverConfig {
    ResolverConfig {
        quote_currencies: quotes.iter().map(|q| q.to_string()).collect(),
        ..ResolverConfig::default()
    }
}

pub fn setup(
    quotes: &[&str],
    equities: Arc<StubEquities>,
    cryptos: Arc<StubCryptos>,
) -> TickerLens {
    TickerLens::with_window(&config(quotes), window(), equities, cryptos)
}
