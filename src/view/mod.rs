//! View units and their loaders.
//!
//! # Data Flow
//! ```text
//! RouteConfig.view (identifier)
//!     → registry.rs (identifier → ViewLoader)
//!     → loader.rs (eager: ready now / deferred: fetched on first activation)
//!     → Arc<dyn ViewUnit> handed to the host for mounting
//! ```
//!
//! # Design Decisions
//! - Views are opaque: the router only needs a name to mount
//! - Every route holds a loader, eager or deferred; matching never cares which
//! - Deferred loads are cached once they succeed; failures are retried on the
//!   next activation

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod loader;
pub mod registry;

pub use loader::{DeferredView, LoadFuture, ViewLoader};
pub use registry::ViewRegistry;

/// An independently loadable piece of presentation logic.
pub trait ViewUnit: Send + Sync + fmt::Debug {
    /// Component name, e.g. `ArticleView`.
    fn name(&self) -> &str;
}

/// A view known only by its name. Used by headless hosts and tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticView {
    name: String,
}

impl StaticView {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl ViewUnit for StaticView {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Identifier routes use to reference a view in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewId(String);

impl ViewId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ViewId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ViewId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Errors that can occur while loading a view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    /// The fetch itself failed (network, missing chunk).
    #[error("failed to load view '{view}': {reason}")]
    Load { view: String, reason: String },

    /// The fetch did not finish within the configured limit.
    #[error("loading view '{view}' timed out after {after_ms} ms")]
    Timeout { view: String, after_ms: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_id_conversion() {
        let id = ViewId::from("HomeView");
        assert_eq!(id.as_str(), "HomeView");
        assert_eq!(id, ViewId::from("HomeView".to_string()));
        assert_eq!(id.to_string(), "HomeView");
    }

    #[test]
    fn test_error_display() {
        let err = ViewError::Timeout {
            view: "IrtLabView".into(),
            after_ms: 500,
        };
        assert_eq!(err.to_string(), "loading view 'IrtLabView' timed out after 500 ms");
    }
}
