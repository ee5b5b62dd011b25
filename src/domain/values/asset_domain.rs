use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetDomain {
    Equity,
    Crypto,
}

impl AssetDomain {
    /// The domain probed only to detect overflow.
    pub fn opposite(self) -> Self {
        match self {
            AssetDomain::Equity => AssetDomain::Crypto,
            AssetDomain::Crypto => AssetDomain::Equity,
        }
    }
}

impl fmt::Display for AssetDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetDomain::Equity => write!(f, "equity"),
            AssetDomain::Crypto => write!(f, "crypto"),
        }
    }
}
