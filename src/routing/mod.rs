//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation request (URL, #fragment or path)
//!     → location.rs (extract path, query, nested hash)
//!     → router.rs (scan table in declaration order)
//!     → matcher.rs (match pattern, capture params)
//!     → Return: NavigationState (matched route or not found)
//!
//! Table construction (at startup):
//!     RouteConfig[]
//!     → Look up views in the registry
//!     → Compile patterns
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex (segment matching only)
//! - Deterministic: same input always matches same route
//! - First match wins (declaration order)

pub mod error;
pub mod location;
pub mod matcher;
pub mod router;
pub mod scroll;

pub use error::RouteError;
pub use location::Location;
pub use matcher::{Params, PathPattern};
pub use router::{NavigationState, RouteDefinition, RouteTable};
pub use scroll::{ScrollBehavior, ScrollPosition, ScrollToTop};
