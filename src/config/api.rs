use chrono::NaiveDate;

/// Backend REST surface. Fixed base path, GET, JSON bodies, no auth.
pub struct ApiConfig {
    pub default_base: &'static str,
    pub prices_path: &'static str,
    pub events_path: &'static str,
    pub results_path: &'static str,
}

pub static API: ApiConfig = ApiConfig {
    default_base: "http://localhost:5000",
    prices_path: "/api/prices",
    events_path: "/api/events",
    results_path: "/api/results",
};

/// Headline numbers from the offline Bayesian change-point run.
/// The `/api/results` payload is treated as opaque; these drive the stat
/// cards and the fixed reference marker.
pub struct AnalysisConfig {
    pub change_point: (i32, u32, u32), // (year, month, day)
    pub regime_1_mean: f64,
    pub regime_2_mean: f64,
    pub log_return_volatility: f64,
    pub relative_shift_pct: f64,
    pub rhat: f64,
}

pub static ANALYSIS: AnalysisConfig = AnalysisConfig {
    change_point: (2005, 3, 2),
    regime_1_mean: 21.46,
    regime_2_mean: 75.90,
    log_return_volatility: 0.024,
    relative_shift_pct: 253.7,
    rhat: 1.02,
};

impl AnalysisConfig {
    pub fn change_point_date(&self) -> NaiveDate {
        let (y, m, d) = self.change_point;
        NaiveDate::from_ymd_opt(y, m, d).expect("change point constant is a valid date")
    }
}
