//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Validate → Check mount point → Build table → Initial navigation
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then host, then routes
//! - The router is installed once; there is no teardown beyond dropping it

pub mod startup;

pub use startup::{Application, StartupError};
