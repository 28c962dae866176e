//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Navigator, loaders, startup produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, histograms)
//!     → tracing.rs (spans with navigation IDs)
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - Navigation ID flows through all events of one navigation
//! - Metrics are cheap (facade calls, no-op without a recorder)

pub mod logging;
pub mod metrics;
pub mod tracing;
