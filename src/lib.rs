pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;

use crate::application::classify::{ClassifiedSymbol, EntityClassifier};
use crate::application::crypto_resolver::CryptoResolver;
use crate::application::equity_resolver::EquityResolver;
use crate::application::keywords::research_keywords;
use crate::config::ResolverConfig;
use crate::domain::entities::entity::{Entity, ResolutionAttempt};
use crate::domain::error::DomainError;
use crate::domain::ports::crypto_source::CryptoDataSource;
use crate::domain::ports::equity_source::EquityDataSource;
use crate::domain::values::asset_domain::AssetDomain;
use crate::domain::values::company_name::CompanyNameNormalizer;
use crate::domain::values::research_window::ResearchWindow;
use crate::infrastructure::providers::kucoin::KucoinSource;
use crate::infrastructure::providers::yahoo::YahooChartSource;
use std::sync::Arc;
use std::time::Duration;

pub struct TickerLens {
    classifier: EntityClassifier,
    window: ResearchWindow,
}

impl TickerLens {
    /// Live Yahoo + KuCoin sources, configured from `TICKERLENS_*` variables.
    pub fn new() -> Result<Self, DomainError> {
        let config = ResolverConfig::from_env()?;
        let timeout = Duration::from_secs(config.http_timeout_secs);

        let equities: Arc<dyn EquityDataSource> =
            Arc::new(YahooChartSource::new(config.yahoo_base_url.clone(), timeout)?);
        let cryptos: Arc<dyn CryptoDataSource> =
            Arc::new(KucoinSource::new(config.kucoin_base_url.clone(), timeout)?);

        Ok(Self::with_sources(&config, equities, cryptos))
    }

    pub fn with_sources(
        config: &ResolverConfig,
        equities: Arc<dyn EquityDataSource>,
        cryptos: Arc<dyn CryptoDataSource>,
    ) -> Self {
        let window = ResearchWindow::ending_today(config.history_months);
        Self::with_window(config, window, equities, cryptos)
    }

    /// Like [`with_sources`](Self::with_sources) with a fixed price window.
    pub fn with_window(
        config: &ResolverConfig,
        window: ResearchWindow,
        equities: Arc<dyn EquityDataSource>,
        cryptos: Arc<dyn CryptoDataSource>,
    ) -> Self {
        let names = CompanyNameNormalizer::new(config.corporate_suffixes.clone());

        let equity = EquityResolver::new(equities, names, window);
        let crypto = CryptoResolver::new(
            cryptos,
            config.quote_currencies.clone(),
            config.crypto_success_code.clone(),
            window,
        );

        Self {
            classifier: EntityClassifier::new(Arc::new(equity), Arc::new(crypto)),
            window,
        }
    }

    // Delegating methods
    pub async fn classify(&self, symbol: &str, domain: AssetDomain) -> Option<Entity> {
        self.classifier.classify(symbol, domain).await
    }

    pub async fn probe(&self, symbol: &str) -> ResolutionAttempt {
        self.classifier.probe(symbol).await
    }

    pub async fn classify_batch(
        &self,
        equities: &[String],
        cryptos: &[String],
    ) -> Vec<ClassifiedSymbol> {
        self.classifier.classify_batch(equities, cryptos).await
    }

    pub fn keywords(&self, entity: &Entity) -> Vec<String> {
        research_keywords(entity)
    }

    pub fn research_window(&self) -> &ResearchWindow {
        &self.window
    }
}
