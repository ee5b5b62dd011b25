use super::{build_client, endpoint};
use crate::domain::error::{DomainError, LookupError};
use crate::domain::ports::crypto_source::{CandleSeries, CryptoDataSource, CurrencyInfo};
use crate::domain::values::research_window::ResearchWindow;
use async_trait::async_trait;
use std::time::Duration;

/// KuCoin public market data: currency metadata and daily candles.
///
/// KuCoin reports the outcome in the body's `code` field (`"200000"` on
/// success), often alongside a non-200 HTTP status, so bodies are decoded
/// whatever the status.
pub struct KucoinSource {
    base_url: String,
    client: reqwest::Client,
}

impl KucoinSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, DomainError> {
        Ok(Self {
            base_url: base_url.into(),
            client: build_client("TickerLens/0.1", timeout)?,
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: reqwest::Url,
        query: &[(&str, &str)],
    ) -> Result<T, LookupError> {
        let resp = self
            .client
            .get(url.clone())
            .query(query)
            .send()
            .await
            .map_err(|e| LookupError::Transient(e.to_string()))?;

        if resp.status().is_redirection() {
            return Err(LookupError::NotFound(format!(
                "KuCoin redirected {url} ({})",
                resp.status()
            )));
        }

        resp.json()
            .await
            .map_err(|e| LookupError::Transient(format!("KuCoin response for {url}: {e}")))
    }
}

#[derive(Debug, serde::Deserialize)]
struct CurrencyResponse {
    code: String,
    #[serde(default)]
    data: Option<CurrencyData>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct CurrencyData {
    #[serde(default)]
    full_name: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
struct CandlesResponse {
    code: String,
    #[serde(default)]
    data: Option<Vec<Vec<serde_json::Value>>>,
}

/// KuCoin rows are `[time, open, close, high, low, volume, turnover]`;
/// move close next to the timestamp.
fn close_first(mut row: Vec<serde_json::Value>) -> Vec<serde_json::Value> {
    if row.len() >= 3 {
        row.swap(1, 2);
    }
    row
}

#[async_trait]
impl CryptoDataSource for KucoinSource {
    fn name(&self) -> &str {
        "kucoin"
    }

    async fn currency(&self, base: &str) -> Result<CurrencyInfo, LookupError> {
        let url = endpoint(&self.base_url, &["api", "v3", "currencies", base])?;
        let body: CurrencyResponse = self.get_json(url, &[]).await?;

        Ok(CurrencyInfo {
            code: body.code,
            full_name: body.data.and_then(|d| d.full_name),
        })
    }

    async fn daily_candles(
        &self,
        pair: &str,
        window: &ResearchWindow,
    ) -> Result<CandleSeries, LookupError> {
        let url = endpoint(&self.base_url, &["api", "v1", "market", "candles"])?;
        let start_at = window.start_timestamp().to_string();
        let end_at = window.end_timestamp().to_string();

        let body: CandlesResponse = self
            .get_json(
                url,
                &[
                    ("type", "1day"),
                    ("symbol", pair),
                    ("startAt", start_at.as_str()),
                    ("endAt", end_at.as_str()),
                ],
            )
            .await?;

        Ok(CandleSeries {
            code: body.code,
            rows: body
                .data
                .unwrap_or_default()
                .into_iter()
                .map(close_first)
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_close_moves_next_to_timestamp() {
        let row = vec![json!("1709251200"), json!("61000"), json!("62000"), json!("63000")];
        let row = close_first(row);
        assert_eq!(row[0], json!("1709251200"));
        assert_eq!(row[1], json!("62000"));
        assert_eq!(row[2], json!("61000"));
    }

    #[test]
    fn test_short_rows_left_alone() {
        assert_eq!(close_first(vec![json!(1)]), vec![json!(1)]);
    }

    #[test]
    fn test_decodes_error_body() {
        let body: CurrencyResponse =
            serde_json::from_str(r#"{"code":"900003","msg":"Currency not exist"}"#).unwrap();
        assert_eq!(body.code, "900003");
        assert!(body.data.is_none());
    }

    #[test]
    fn test_decodes_currency() {
        let body: CurrencyResponse = serde_json::from_str(
            r#"{"code":"200000","data":{"currency":"BTC","name":"BTC","fullName":"Bitcoin"}}"#,
        )
        .unwrap();
        assert_eq!(body.data.and_then(|d| d.full_name).as_deref(), Some("Bitcoin"));
    }
}
