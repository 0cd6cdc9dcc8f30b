mod loader;
mod models;

pub use models::{DashboardData, MarketEvent, PricePoint, ResultsSummary};

pub(crate) use loader::{FetchEvent, LoadToken, spawn_load_session};
