//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RouterConfig (validated, immutable)
//!     → consumed once at startup to build the route table
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the route table never changes at runtime
//! - All fields have defaults; the default is the blog's canonical table
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod site;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{
    HistoryConfig, HistoryMode, ObservabilityConfig, RouteConfig, RouterConfig, ScrollConfig,
    ScrollMode, ViewsConfig,
};
pub use validation::{validate_config, ValidationError};
