//! Configuration module for the dashboard application.

mod api;

// Can't be private because we don't re-export it
pub mod plot;

// Re-export commonly used items
pub use api::{ANALYSIS, API, AnalysisConfig, ApiConfig};
