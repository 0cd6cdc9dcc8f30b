// One load session per dashboard lifetime: three concurrent GETs whose
// outcomes are delivered as messages onto the UI thread. No retries, no
// caching, no background refresh.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
    mpsc::Sender,
};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use crate::config::API;
use crate::data::{MarketEvent, PricePoint, ResultsSummary};

/// Per-endpoint completion, delivered over the session channel in
/// whatever order the transport resolves them.
pub(crate) enum FetchEvent {
    Prices(Result<Vec<PricePoint>>),
    Events(Result<Vec<MarketEvent>>),
    Results(Result<ResultsSummary>),
}

impl FetchEvent {
    pub(crate) fn endpoint(&self) -> &'static str {
        match self {
            FetchEvent::Prices(_) => "prices",
            FetchEvent::Events(_) => "events",
            FetchEvent::Results(_) => "results",
        }
    }
}

/// Cancellation token scoped to the session. The owning view cancels it on
/// teardown so late-arriving responses are dropped without mutating state.
#[derive(Clone, Default)]
pub(crate) struct LoadToken(Arc<AtomicBool>);

impl LoadToken {
    pub(crate) fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

fn deliver(tx: &Sender<FetchEvent>, token: &LoadToken, event: FetchEvent) {
    if token.is_cancelled() {
        log::debug!("Dropping late {} response: session cancelled", event.endpoint());
        return;
    }
    if let FetchEvent::Prices(Err(err))
    | FetchEvent::Events(Err(err))
    | FetchEvent::Results(Err(err)) = &event
    {
        log::warn!("Fetch for {} failed: {:#}", event.endpoint(), err);
    }
    let _ = tx.send(event);
}

async fn fetch_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    base: &str,
    path: &str,
) -> Result<T> {
    let url = endpoint_url(base, path);
    let response = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("request to {} failed", url))?
        .error_for_status()
        .with_context(|| format!("{} returned a non-success status", url))?;
    response
        .json::<T>()
        .await
        .with_context(|| format!("{} returned a non-parseable body", url))
}

pub(crate) fn endpoint_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// The session body: issue all three requests concurrently and push each
/// outcome onto the channel as it completes. Total latency is bounded by
/// the slowest request, not their sum.
async fn run_session(base: String, tx: Sender<FetchEvent>, token: LoadToken) {
    let client = reqwest::Client::new();

    let prices = async {
        let outcome = fetch_json::<Vec<PricePoint>>(&client, &base, API.prices_path).await;
        deliver(&tx, &token, FetchEvent::Prices(outcome));
    };
    let events = async {
        let outcome = fetch_json::<Vec<MarketEvent>>(&client, &base, API.events_path).await;
        deliver(&tx, &token, FetchEvent::Events(outcome));
    };
    let results = async {
        let outcome = fetch_json::<ResultsSummary>(&client, &base, API.results_path).await;
        deliver(&tx, &token, FetchEvent::Results(outcome));
    };

    futures::join!(prices, events, results);
}

/// Kick off the load session exactly once, at view construction. Runs on a
/// worker thread natively and on the browser event loop under wasm; either
/// way completions land on the UI thread via `tx`.
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn spawn_load_session(base: String, tx: Sender<FetchEvent>, token: LoadToken) {
    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().expect("Failed to create runtime");
        rt.block_on(run_session(base, tx, token));
    });
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn spawn_load_session(base: String, tx: Sender<FetchEvent>, token: LoadToken) {
    wasm_bindgen_futures::spawn_local(run_session(base, tx, token));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn endpoint_url_joins_base_and_path() {
        assert_eq!(
            endpoint_url("http://localhost:5000", "/api/prices"),
            "http://localhost:5000/api/prices"
        );
        // Trailing slash on the base must not double up.
        assert_eq!(
            endpoint_url("http://localhost:5000/", "/api/events"),
            "http://localhost:5000/api/events"
        );
    }

    #[test]
    fn cancelled_token_drops_completions_before_the_channel() {
        let (tx, rx) = mpsc::channel();
        let token = LoadToken::default();

        deliver(&tx, &token, FetchEvent::Results(Ok(ResultsSummary::default())));
        assert!(rx.try_recv().is_ok());

        token.cancel();
        deliver(&tx, &token, FetchEvent::Prices(Ok(vec![])));
        deliver(&tx, &token, FetchEvent::Events(Err(anyhow::anyhow!("late"))));
        assert!(rx.try_recv().is_err());
    }
}
