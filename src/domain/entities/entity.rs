use crate::domain::error::LookupError;
use crate::domain::ports::symbol_resolver::{suppress_redundant_name, Resolution};
use crate::domain::values::asset_domain::AssetDomain;
use crate::domain::values::price_point::PricePoint;
use crate::domain::values::ticker::{self, Ticker};
use serde::Serialize;

/// A resolved financial symbol, ready for downstream enrichment.
///
/// Built once from a finished [`ResolutionAttempt`] and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    domain: AssetDomain,
    ticker: Ticker,
    name: Option<String>,
    price_chart: Vec<PricePoint>,
    is_overflowing: bool,
}

impl Entity {
    pub fn new(
        domain: AssetDomain,
        symbol: &str,
        resolution: Resolution,
        is_overflowing: bool,
    ) -> Self {
        let ticker = Ticker::new(symbol);
        let name = suppress_redundant_name(resolution.name, ticker.bare());
        let mut price_chart = resolution.price_chart;
        price_chart.sort_by_key(|p| p.date);

        Self {
            domain,
            ticker,
            name,
            price_chart,
            is_overflowing,
        }
    }

    pub fn domain(&self) -> AssetDomain {
        self.domain
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn price_chart(&self) -> &[PricePoint] {
        &self.price_chart
    }

    /// True when the same symbol also resolves in the other domain.
    pub fn is_overflowing(&self) -> bool {
        self.is_overflowing
    }
}

/// Both domain probes for one input symbol. Discarded once the entity is
/// built.
#[derive(Debug, Clone)]
pub struct ResolutionAttempt {
    pub input: String,
    pub stripped: String,
    pub equity: Result<Resolution, LookupError>,
    pub crypto: Result<Resolution, LookupError>,
}

impl ResolutionAttempt {
    pub fn new(
        input: &str,
        equity: Result<Resolution, LookupError>,
        crypto: Result<Resolution, LookupError>,
    ) -> Self {
        Self {
            input: input.to_string(),
            stripped: ticker::strip(input).to_string(),
            equity,
            crypto,
        }
    }

    pub fn outcome(&self, domain: AssetDomain) -> &Result<Resolution, LookupError> {
        match domain {
            AssetDomain::Equity => &self.equity,
            AssetDomain::Crypto => &self.crypto,
        }
    }

    pub fn found(&self, domain: AssetDomain) -> bool {
        self.outcome(domain).is_ok()
    }

    /// Entity for `domain`, or `None` if that domain's probe failed. The
    /// opposite domain only decides `is_overflowing`.
    pub fn into_entity(self, domain: AssetDomain) -> Option<Entity> {
        let is_overflowing = self.found(domain.opposite());
        let primary = match domain {
            AssetDomain::Equity => self.equity,
            AssetDomain::Crypto => self.crypto,
        };
        primary
            .ok()
            .map(|resolution| Entity::new(domain, &self.stripped, resolution, is_overflowing))
    }
}
