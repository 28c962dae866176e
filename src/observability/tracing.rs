//! Navigation spans.
//!
//! Every navigation runs inside a `navigation` span carrying a fresh id, so
//! the resolve, load and mount events of one navigation can be correlated.

use tracing::Span;
use uuid::Uuid;

use crate::routing::Location;

/// Create the span for one navigation.
pub fn navigation_span(kind: &str, target: &Location) -> Span {
    let id = Uuid::new_v4();
    tracing::info_span!(
        "navigation",
        navigation_id = %id,
        kind = kind,
        location = %target
    )
}
