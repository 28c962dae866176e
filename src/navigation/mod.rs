//! Navigation subsystem.
//!
//! # Data Flow
//! ```text
//! push / replace / back / forward
//!     → history.rs (target location, saved scroll offset)
//!     → routing (resolve to NavigationState)
//!     → view loader (await deferred views)
//!     → host.mount + scroll hook
//!     → navigator.rs updates the active route
//! ```
//!
//! # Design Decisions
//! - The active route is a field of the navigator, not global state
//! - Unmatched paths are an outcome, not an error
//! - Only view-load failures are errors

use thiserror::Error;

use crate::view::ViewError;

pub mod history;
pub mod navigator;

pub use history::{HashHistory, HistoryEntry};
pub use navigator::{ActiveRoute, NavigationKind, NavigationOutcome, Navigator};

/// Errors that abort a navigation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// The matched route's view could not be loaded.
    #[error("route '{route}' could not load its view: {source}")]
    ViewLoad {
        route: String,
        #[source]
        source: ViewError,
    },
}
