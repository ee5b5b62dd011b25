pub mod asset_domain;
pub mod company_name;
pub mod price_point;
pub mod research_window;
pub mod ticker;
