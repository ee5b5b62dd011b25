use crate::domain::error::DomainError;
use crate::domain::values::company_name::{CompanyNameNormalizer, DEFAULT_CORPORATE_SUFFIXES};

/// Quote currencies tried for a crypto chart, highest priority first.
pub const DEFAULT_QUOTE_CURRENCIES: &[&str] = &["USDT", "USDC", "BTC", "ETH", "EUR"];

/// Application-level success code of the crypto provider.
pub const DEFAULT_CRYPTO_SUCCESS_CODE: &str = "200000";

const SUFFIXES_VAR: &str = "TICKERLENS_CORPORATE_SUFFIXES";

pub const DEFAULT_YAHOO_URL: &str = "https://query1.finance.yahoo.com";
pub const DEFAULT_KUCOIN_URL: &str = "https://api.kucoin.com";

/// Read-only resolver settings, loaded once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolverConfig {
    pub quote_currencies: Vec<String>,
    pub corporate_suffixes: Vec<String>,
    pub history_months: u32,
    pub crypto_success_code: String,
    pub yahoo_base_url: String,
    pub kucoin_base_url: String,
    pub http_timeout_secs: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            quote_currencies: to_owned(DEFAULT_QUOTE_CURRENCIES),
            corporate_suffixes: to_owned(DEFAULT_CORPORATE_SUFFIXES),
            history_months: 1,
            crypto_success_code: DEFAULT_CRYPTO_SUCCESS_CODE.into(),
            yahoo_base_url: DEFAULT_YAHOO_URL.into(),
            kucoin_base_url: DEFAULT_KUCOIN_URL.into(),
            http_timeout_secs: 10,
        }
    }
}

impl ResolverConfig {
    /// Defaults overridden by `TICKERLENS_*` environment variables.
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(list) = lookup("TICKERLENS_QUOTE_CURRENCIES") {
            config.quote_currencies = parse_list(&list)
                .into_iter()
                .map(|q| q.to_uppercase())
                .collect();
            if config.quote_currencies.is_empty() {
                return Err(DomainError::Config(
                    "TICKERLENS_QUOTE_CURRENCIES must name at least one currency".into(),
                ));
            }
        }
        if let Some(list) = lookup(SUFFIXES_VAR) {
            config.corporate_suffixes = parse_list(&list);
        }
        if let Some(months) = lookup("TICKERLENS_HISTORY_MONTHS") {
            config.history_months = parse_number("TICKERLENS_HISTORY_MONTHS", &months)?;
        }
        if let Some(code) = lookup("TICKERLENS_CRYPTO_SUCCESS_CODE") {
            config.crypto_success_code = code.trim().to_string();
        }
        if let Some(url) = lookup("TICKERLENS_YAHOO_URL") {
            config.yahoo_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(url) = lookup("TICKERLENS_KUCOIN_URL") {
            config.kucoin_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(secs) = lookup("TICKERLENS_HTTP_TIMEOUT_SECS") {
            config.http_timeout_secs = parse_number("TICKERLENS_HTTP_TIMEOUT_SECS", &secs)?;
        }

        Ok(config)
    }
}

/// Name normalizer that reads only `TICKERLENS_CORPORATE_SUFFIXES`, so it
/// works offline and ignores unrelated settings.
pub fn name_normalizer_from_env() -> CompanyNameNormalizer {
    name_normalizer_from_lookup(|key| std::env::var(key).ok())
}

pub fn name_normalizer_from_lookup<F>(lookup: F) -> CompanyNameNormalizer
where
    F: Fn(&str) -> Option<String>,
{
    let suffixes = lookup(SUFFIXES_VAR)
        .map(|list| parse_list(&list))
        .unwrap_or_else(|| to_owned(DEFAULT_CORPORATE_SUFFIXES));
    CompanyNameNormalizer::new(suffixes)
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn parse_number<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, DomainError> {
    raw.trim()
        .parse()
        .map_err(|_| DomainError::Config(format!("{key} must be a non-negative integer, got '{raw}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = ResolverConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ResolverConfig::default());
        assert_eq!(config.quote_currencies[0], "USDT");
        assert_eq!(config.history_months, 1);
    }

    #[test]
    fn test_overrides() {
        let config = ResolverConfig::from_lookup(lookup(&[
            ("TICKERLENS_QUOTE_CURRENCIES", "eur, usdt ,"),
            ("TICKERLENS_HISTORY_MONTHS", "3"),
            ("TICKERLENS_KUCOIN_URL", "http://localhost:9000/"),
        ]))
        .unwrap();
        assert_eq!(config.quote_currencies, vec!["EUR", "USDT"]);
        assert_eq!(config.history_months, 3);
        assert_eq!(config.kucoin_base_url, "http://localhost:9000");
    }

    #[test]
    fn test_name_normalizer_ignores_unrelated_bad_values() {
        let names = name_normalizer_from_lookup(lookup(&[
            ("TICKERLENS_HISTORY_MONTHS", "soon"),
            ("TICKERLENS_CORPORATE_SUFFIXES", "bank"),
        ]));
        assert_eq!(names.normalize("First Republic Bank Corp"), "First Republic");

        let defaults = name_normalizer_from_lookup(lookup(&[("TICKERLENS_QUOTE_CURRENCIES", "")]));
        assert_eq!(defaults.normalize("Acme Holdings, Inc."), "Acme");
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(ResolverConfig::from_lookup(lookup(&[("TICKERLENS_HISTORY_MONTHS", "soon")])).is_err());
        assert!(ResolverConfig::from_lookup(lookup(&[("TICKERLENS_QUOTE_CURRENCIES", " , ")])).is_err());
    }
}
