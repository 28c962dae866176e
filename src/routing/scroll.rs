//! Scroll position after navigation.
//!
//! The hook receives the target state, the state being left and any saved
//! offset (set for back/forward), and returns where the page should scroll.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::ScrollMode;
use crate::routing::NavigationState;

/// Page scroll offset in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollPosition {
    pub left: f64,
    pub top: f64,
}

impl ScrollPosition {
    pub const TOP: Self = Self { left: 0.0, top: 0.0 };

    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

/// Decides the scroll position once a new view is mounted.
pub trait ScrollBehavior: Send + Sync + fmt::Debug {
    fn scroll_position(
        &self,
        to: &NavigationState,
        from: Option<&NavigationState>,
        saved: Option<ScrollPosition>,
    ) -> ScrollPosition;
}

/// Always scroll to the top, ignoring any saved offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollToTop;

impl ScrollBehavior for ScrollToTop {
    fn scroll_position(
        &self,
        _to: &NavigationState,
        _from: Option<&NavigationState>,
        _saved: Option<ScrollPosition>,
    ) -> ScrollPosition {
        ScrollPosition::TOP
    }
}

/// Restore the saved offset on back/forward, top otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct RestoreSaved;

impl ScrollBehavior for RestoreSaved {
    fn scroll_position(
        &self,
        _to: &NavigationState,
        _from: Option<&NavigationState>,
        saved: Option<ScrollPosition>,
    ) -> ScrollPosition {
        saved.unwrap_or(ScrollPosition::TOP)
    }
}

/// Behavior for the configured mode.
pub fn behavior_for(mode: ScrollMode) -> Box<dyn ScrollBehavior> {
    match mode {
        ScrollMode::Top => Box::new(ScrollToTop),
        ScrollMode::Restore => Box::new(RestoreSaved),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::{Location, Params};

    fn state(path: &str) -> NavigationState {
        NavigationState {
            requested_path: path.to_string(),
            location: Location::parse(path),
            matched_route: None,
            params: Params::new(),
        }
    }

    #[test]
    fn test_scroll_to_top_ignores_inputs() {
        let hook = ScrollToTop;
        let to = state("/aboutme");
        let from = state("/article/3");

        for saved in [None, Some(ScrollPosition::new(0.0, 1200.0)), Some(ScrollPosition::new(40.0, 5.0))] {
            assert_eq!(hook.scroll_position(&to, Some(&from), saved), ScrollPosition::TOP);
            assert_eq!(hook.scroll_position(&to, None, saved), ScrollPosition::TOP);
        }
    }

    #[test]
    fn test_restore_saved() {
        let hook = behavior_for(ScrollMode::Restore);
        let to = state("/research");
        let saved = ScrollPosition::new(0.0, 640.0);

        assert_eq!(hook.scroll_position(&to, None, Some(saved)), saved);
        assert_eq!(hook.scroll_position(&to, None, None), ScrollPosition::TOP);
    }
}
