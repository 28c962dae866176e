//! Embedding host contract.
//!
//! # Responsibilities
//! - Provide the mount point the app installs into
//! - Mount the view selected by each navigation
//! - Report and apply the page scroll offset
//!
//! # Design Decisions
//! - The router never renders; it hands an opaque view to the host
//! - `MemoryHost` is a headless host for tools and tests

use std::sync::Arc;

use crate::routing::{NavigationState, ScrollPosition};
use crate::view::ViewUnit;

pub mod memory;

pub use memory::MemoryHost;

/// The document the router is embedded in.
pub trait Host: Send {
    /// True if an element matching `selector` exists.
    fn has_mount_point(&self, selector: &str) -> bool;

    /// Replace the mounted view.
    fn mount(&mut self, view: Arc<dyn ViewUnit>, state: &NavigationState);

    /// Current page scroll offset.
    fn scroll_position(&self) -> ScrollPosition;

    fn scroll_to(&mut self, position: ScrollPosition);
}
