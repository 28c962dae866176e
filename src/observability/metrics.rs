//! Navigation metrics.
//!
//! # Metrics
//! - `router_navigations_total` (counter): navigations by outcome, route
//! - `router_view_loads_total` (counter): deferred fetches by view, result
//! - `router_view_load_seconds` (histogram): deferred fetch latency
//!
//! # Design Decisions
//! - Recorded through the `metrics` facade; a no-op until the embedding
//!   host installs a recorder

use std::time::Instant;

/// Record one finished navigation.
pub fn record_navigation(outcome: &'static str, route: &str) {
    metrics::counter!(
        "router_navigations_total",
        "outcome" => outcome,
        "route" => route.to_string()
    )
    .increment(1);
}

/// Record one deferred view fetch.
pub fn record_view_load(view: &str, ok: bool, started: Instant) {
    let result = if ok { "ok" } else { "error" };
    metrics::counter!(
        "router_view_loads_total",
        "view" => view.to_string(),
        "result" => result
    )
    .increment(1);
    metrics::histogram!("router_view_load_seconds", "view" => view.to_string())
        .record(started.elapsed().as_secs_f64());
}
