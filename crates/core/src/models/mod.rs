pub mod analytics;
pub mod battle;
pub mod calendar;
pub mod chart;
pub mod consult;
pub mod market;
pub mod portfolio;
pub mod settings;
pub mod stock;
pub mod ticker;
pub mod time_machine;
pub mod watchlist;
