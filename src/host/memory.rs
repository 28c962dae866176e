//! Headless in-memory host.

use std::collections::HashSet;
use std::sync::Arc;

use crate::host::Host;
use crate::routing::{NavigationState, ScrollPosition};
use crate::view::ViewUnit;

/// A host that records what it was asked to do.
#[derive(Debug, Default)]
pub struct MemoryHost {
    mount_points: HashSet<String>,
    mounted: Option<Arc<dyn ViewUnit>>,
    mount_log: Vec<String>,
    scroll: ScrollPosition,
}

impl MemoryHost {
    /// Host with no mount points at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// Host providing a single mount point.
    pub fn with_mount_point(selector: impl Into<String>) -> Self {
        let mut host = Self::new();
        host.mount_points.insert(selector.into());
        host
    }

    /// Name of the currently mounted view.
    pub fn mounted_view(&self) -> Option<&str> {
        self.mounted.as_deref().map(|v| v.name())
    }

    /// Names of every view mounted so far, oldest first.
    pub fn mount_log(&self) -> &[String] {
        &self.mount_log
    }

    /// Simulate the user scrolling the page.
    pub fn user_scroll(&mut self, position: ScrollPosition) {
        self.scroll = position;
    }
}

impl Host for MemoryHost {
    fn has_mount_point(&self, selector: &str) -> bool {
        self.mount_points.contains(selector)
    }

    fn mount(&mut self, view: Arc<dyn ViewUnit>, state: &NavigationState) {
        tracing::debug!(
            view = view.name(),
            path = %state.location.path,
            "Mounting view"
        );
        self.mount_log.push(view.name().to_string());
        self.mounted = Some(view);
    }

    fn scroll_position(&self) -> ScrollPosition {
        self.scroll
    }

    fn scroll_to(&mut self, position: ScrollPosition) {
        self.scroll = position;
    }
}
