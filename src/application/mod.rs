pub mod classify;
pub mod crypto_resolver;
pub mod equity_resolver;
pub mod keywords;
