pub mod crypto_source;
pub mod equity_source;
pub mod symbol_resolver;
