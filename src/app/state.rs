// src/app/state.rs

use anyhow::Result;

use crate::data::{DashboardData, FetchEvent, MarketEvent, PricePoint, ResultsSummary};
use crate::ui::UI_TEXT;

#[derive(Clone)]
pub(crate) struct RunningState;

#[derive(Default, Clone)]
pub(crate) struct LoadingState;

#[derive(Clone)]
pub(crate) struct FailedState {
    pub(crate) message: String,
}

pub(crate) enum AppState {
    Loading(LoadingState),
    Failed(FailedState),
    Running(RunningState),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Loading(LoadingState)
    }
}

/// Final state of a load session once the aggregate has settled.
pub(crate) enum LoadOutcome {
    Ready(DashboardData),
    Failed(String),
}

/// All-or-nothing aggregation over the three endpoint fetches. Outcomes
/// arrive in arbitrary order; the aggregate settles to Ready only when all
/// three succeeded, and to Failed as soon as any one of them did not.
/// Partial success is never surfaced.
#[derive(Default)]
pub(crate) struct LoadProgress {
    prices: Option<Result<Vec<PricePoint>>>,
    events: Option<Result<Vec<MarketEvent>>>,
    results: Option<Result<ResultsSummary>>,
}

impl LoadProgress {
    pub(crate) fn record(&mut self, event: FetchEvent) {
        match event {
            FetchEvent::Prices(outcome) => self.prices = Some(outcome),
            FetchEvent::Events(outcome) => self.events = Some(outcome),
            FetchEvent::Results(outcome) => self.results = Some(outcome),
        }
    }

    /// Per-endpoint completion flags for the loading screen.
    pub(crate) fn statuses(&self) -> [(&'static str, bool); 3] {
        [
            ("Prices", self.prices.is_some()),
            ("Events", self.events.is_some()),
            ("Model Results", self.results.is_some()),
        ]
    }

    fn any_failed(&self) -> bool {
        matches!(self.prices, Some(Err(_)))
            || matches!(self.events, Some(Err(_)))
            || matches!(self.results, Some(Err(_)))
    }

    /// Settles the aggregate. The failure message is a single generic one:
    /// it deliberately does not say which endpoint failed, matching the
    /// all-or-nothing success policy.
    pub(crate) fn outcome(&mut self) -> Option<LoadOutcome> {
        if self.any_failed() {
            return Some(LoadOutcome::Failed(UI_TEXT.error_load_failed.clone()));
        }
        let complete =
            self.prices.is_some() && self.events.is_some() && self.results.is_some();
        if !complete {
            return None;
        }
        let prices = self.prices.take()?.ok()?;
        let events = self.events.take()?.ok()?;
        let results = self.results.take()?.ok()?;
        Some(LoadOutcome::Ready(DashboardData {
            prices,
            events,
            results,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_prices() -> Vec<PricePoint> {
        vec![
            PricePoint { date: date(2000, 1, 4), price: 23.95 },
            PricePoint { date: date(2005, 3, 2), price: 51.03 },
            PricePoint { date: date(2010, 12, 31), price: 92.53 },
        ]
    }

    fn sample_events() -> Vec<MarketEvent> {
        vec![
            MarketEvent {
                date: date(2001, 9, 11),
                description: "September 11 attacks".into(),
                category: "Geopolitical Shock".into(),
            },
            MarketEvent {
                date: date(2008, 9, 15),
                description: "Lehman collapse".into(),
                category: "Financial Crisis".into(),
            },
        ]
    }

    fn sample_results() -> ResultsSummary {
        ResultsSummary {
            summary: Some("Model converged".into()),
            metrics: None,
        }
    }

    // Builds the success event for endpoint index 0..3.
    fn ok_event(endpoint: usize) -> FetchEvent {
        match endpoint {
            0 => FetchEvent::Prices(Ok(sample_prices())),
            1 => FetchEvent::Events(Ok(sample_events())),
            _ => FetchEvent::Results(Ok(sample_results())),
        }
    }

    fn err_event(endpoint: usize) -> FetchEvent {
        match endpoint {
            0 => FetchEvent::Prices(Err(anyhow!("502 Bad Gateway"))),
            1 => FetchEvent::Events(Err(anyhow!("connection refused"))),
            _ => FetchEvent::Results(Err(anyhow!("invalid JSON body"))),
        }
    }

    fn settle(order: &[usize], failing: Option<usize>) -> Option<LoadOutcome> {
        let mut progress = LoadProgress::default();
        let mut settled = None;
        for &endpoint in order {
            let event = if failing == Some(endpoint) {
                err_event(endpoint)
            } else {
                ok_event(endpoint)
            };
            progress.record(event);
            if settled.is_none() {
                settled = progress.outcome();
            }
        }
        settled
    }

    #[test]
    fn all_success_settles_to_ready_with_untransformed_values() {
        let outcome = settle(&[0, 1, 2], None);
        match outcome {
            Some(LoadOutcome::Ready(data)) => {
                assert_eq!(data.prices, sample_prices());
                assert_eq!(data.events, sample_events());
                assert_eq!(data.results, sample_results());
            }
            _ => panic!("expected Ready"),
        }
    }

    #[test]
    fn incomplete_aggregate_is_neither_ready_nor_failed() {
        let mut progress = LoadProgress::default();
        progress.record(ok_event(0));
        progress.record(ok_event(1));
        assert!(progress.outcome().is_none());
    }

    #[test]
    fn any_single_failure_settles_to_failed_never_partial_ready() {
        for failing in 0..3 {
            match settle(&[0, 1, 2], Some(failing)) {
                Some(LoadOutcome::Failed(message)) => {
                    assert_eq!(message, UI_TEXT.error_load_failed);
                }
                _ => panic!("endpoint {} failure must settle to Failed", failing),
            }
        }
    }

    #[test]
    fn failure_message_does_not_leak_the_failing_endpoint() {
        let mut messages = Vec::new();
        for failing in 0..3 {
            if let Some(LoadOutcome::Failed(message)) = settle(&[0, 1, 2], Some(failing)) {
                messages.push(message);
            }
        }
        assert_eq!(messages.len(), 3);
        assert!(messages.iter().all(|m| m == &messages[0]));
        for needle in ["price", "event", "result"] {
            assert!(!messages[0].to_lowercase().contains(needle));
        }
    }

    #[test]
    fn completion_order_does_not_change_the_outcome() {
        let orders: [[usize; 3]; 6] = [
            [0, 1, 2],
            [0, 2, 1],
            [1, 0, 2],
            [1, 2, 0],
            [2, 0, 1],
            [2, 1, 0],
        ];
        for order in orders {
            match settle(&order, None) {
                Some(LoadOutcome::Ready(data)) => {
                    assert_eq!(data.prices, sample_prices());
                    assert_eq!(data.events, sample_events());
                }
                _ => panic!("order {:?} must settle to Ready", order),
            }
            match settle(&order, Some(order[0])) {
                Some(LoadOutcome::Failed(_)) => {}
                _ => panic!("order {:?} with failure must settle to Failed", order),
            }
        }
    }

    #[test]
    fn same_tick_resolution_settles_once_with_the_same_result() {
        // All three outcomes already queued before the first settle check.
        let mut progress = LoadProgress::default();
        progress.record(ok_event(2));
        progress.record(ok_event(0));
        progress.record(ok_event(1));
        assert!(matches!(progress.outcome(), Some(LoadOutcome::Ready(_))));
    }

    #[test]
    fn late_results_after_a_failure_are_discarded() {
        let mut progress = LoadProgress::default();
        progress.record(err_event(1));
        assert!(matches!(progress.outcome(), Some(LoadOutcome::Failed(_))));

        // Still-pending requests resolve afterwards; the verdict stands.
        progress.record(ok_event(0));
        progress.record(ok_event(2));
        assert!(matches!(progress.outcome(), Some(LoadOutcome::Failed(_))));
    }
}
