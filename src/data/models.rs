use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One observation day of the Brent price series, as served by
/// `/api/prices`. Chronological, immutable once loaded.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PricePoint {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Price")]
    pub price: f64,
}

/// A dated geopolitical event from `/api/events`. Display order is
/// backend order; never re-sorted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MarketEvent {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Event")]
    pub description: String,
    #[serde(rename = "Type")]
    pub category: String,
}

/// Output of the offline Bayesian analysis run, served by `/api/results`.
/// Opaque to this app: only its presence matters, not its internals.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ResultsSummary {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub metrics: Option<serde_json::Value>,
}

/// The full Ready payload. Exists only once all three fetches succeeded.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub prices: Vec<PricePoint>,
    pub events: Vec<MarketEvent>,
    pub results: ResultsSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_price_series_with_backend_field_names() {
        let body = r#"[
            {"Date": "1987-05-20", "Price": 18.63},
            {"Date": "2005-03-02", "Price": 51.03}
        ]"#;
        let prices: Vec<PricePoint> = serde_json::from_str(body).unwrap();
        assert_eq!(prices.len(), 2);
        assert_eq!(prices[0].date, NaiveDate::from_ymd_opt(1987, 5, 20).unwrap());
        assert_eq!(prices[0].price, 18.63);
        assert_eq!(prices[1].price, 51.03);
    }

    #[test]
    fn event_order_is_backend_order() {
        // Deliberately not chronological: insertion order must survive.
        let body = r#"[
            {"Date": "2008-09-15", "Event": "Lehman collapse", "Type": "Financial Crisis"},
            {"Date": "1990-08-02", "Event": "Gulf War begins", "Type": "Conflict"}
        ]"#;
        let events: Vec<MarketEvent> = serde_json::from_str(body).unwrap();
        assert_eq!(events[0].description, "Lehman collapse");
        assert_eq!(events[1].description, "Gulf War begins");
        assert_eq!(events[1].category, "Conflict");
    }

    #[test]
    fn results_payload_is_opaque_and_partial() {
        // Backend may omit either field; both shapes are valid.
        let full: ResultsSummary =
            serde_json::from_str(r#"{"summary": "converged", "metrics": [{"r_hat": 1.02}]}"#)
                .unwrap();
        assert_eq!(full.summary.as_deref(), Some("converged"));
        assert!(full.metrics.is_some());

        let empty: ResultsSummary = serde_json::from_str("{}").unwrap();
        assert!(empty.summary.is_none());
        assert!(empty.metrics.is_none());
    }

    #[test]
    fn malformed_price_body_fails_to_parse() {
        let err = serde_json::from_str::<Vec<PricePoint>>(r#"[{"Date": "not-a-date"}]"#);
        assert!(err.is_err());
        let err = serde_json::from_str::<Vec<PricePoint>>("<html>502</html>");
        assert!(err.is_err());
    }
}
