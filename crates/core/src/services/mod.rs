pub mod analytics_service;
pub mod calendar_service;
pub mod chart_service;
pub mod market_service;
pub mod portfolio_service;
pub mod search_service;
pub mod time_machine_service;
pub mod watchlist_service;
