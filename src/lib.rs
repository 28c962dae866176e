//! Hash-fragment router for the blog SPA.
//!
//! Maps navigable paths to view units, loads deferred views on first use,
//! and resets the scroll position after every navigation.

pub mod config;
pub mod host;
pub mod lifecycle;
pub mod navigation;
pub mod observability;
pub mod routing;
pub mod view;

pub use config::RouterConfig;
pub use host::{Host, MemoryHost};
pub use lifecycle::Application;
pub use navigation::{NavigationOutcome, Navigator};
pub use routing::{NavigationState, RouteTable};
pub use view::{ViewRegistry, ViewUnit};
