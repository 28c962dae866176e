//! The navigator: owner of the active route.
//!
//! # Responsibilities
//! - Resolve each request against the route table
//! - Load the target view (awaiting deferred views)
//! - Mount it, run the scroll hook, record history
//! - Keep the single "currently active route" slot
//!
//! # Design Decisions
//! - `&mut self` on every navigation: one navigation at a time
//! - Nothing is committed until the view has loaded, so a failed or dropped
//!   navigation leaves the active route untouched
//! - Navigating to the current location is a no-op

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::Instrument;

use crate::host::Host;
use crate::navigation::{HashHistory, NavigationError};
use crate::observability::{metrics, tracing::navigation_span};
use crate::routing::{Location, NavigationState, RouteTable, ScrollBehavior, ScrollPosition};
use crate::view::ViewUnit;

/// What triggered a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKind {
    Push,
    Replace,
    Back,
    Forward,
}

impl NavigationKind {
    fn as_str(&self) -> &'static str {
        match self {
            NavigationKind::Push => "push",
            NavigationKind::Replace => "replace",
            NavigationKind::Back => "back",
            NavigationKind::Forward => "forward",
        }
    }
}

impl fmt::Display for NavigationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a navigation that did not fail.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum NavigationOutcome {
    /// A new view is mounted.
    Navigated {
        route: String,
        view: String,
        scroll: ScrollPosition,
    },
    /// Target equals the current location; nothing happened.
    Duplicated,
    /// No route matched; the active route is unchanged.
    NotFound { path: String },
    /// Back/forward with no entry in that direction.
    NoHistory,
}

/// The route currently on screen.
#[derive(Debug, Clone)]
pub struct ActiveRoute {
    pub state: NavigationState,
    pub view: Arc<dyn ViewUnit>,
}

/// Drives navigations against a route table and a host.
pub struct Navigator<H: Host> {
    table: Arc<RouteTable>,
    history: HashHistory,
    scroll: Box<dyn ScrollBehavior>,
    current: Option<ActiveRoute>,
    host: H,
}

impl<H: Host> Navigator<H> {
    pub fn new(table: Arc<RouteTable>, scroll: Box<dyn ScrollBehavior>, host: H) -> Self {
        Self {
            table,
            history: HashHistory::new(),
            scroll,
            current: None,
            host,
        }
    }

    pub fn current(&self) -> Option<&ActiveRoute> {
        self.current.as_ref()
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn history(&self) -> &HashHistory {
        &self.history
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Navigate to `target`, adding a history entry.
    pub async fn push(&mut self, target: &str) -> Result<NavigationOutcome, NavigationError> {
        self.run(NavigationKind::Push, target, Location::parse(target), None)
            .await
    }

    /// Navigate to `target`, replacing the current history entry.
    pub async fn replace(&mut self, target: &str) -> Result<NavigationOutcome, NavigationError> {
        self.run(NavigationKind::Replace, target, Location::parse(target), None)
            .await
    }

    pub async fn back(&mut self) -> Result<NavigationOutcome, NavigationError> {
        self.traverse(NavigationKind::Back).await
    }

    pub async fn forward(&mut self) -> Result<NavigationOutcome, NavigationError> {
        self.traverse(NavigationKind::Forward).await
    }

    async fn traverse(&mut self, kind: NavigationKind) -> Result<NavigationOutcome, NavigationError> {
        let available = match kind {
            NavigationKind::Back => self.history.can_go_back(),
            _ => self.history.can_go_forward(),
        };
        let entry = match self.history.peek(delta(kind)) {
            Some(entry) if available => entry.clone(),
            _ => {
                tracing::debug!(kind = %kind, "No history entry in that direction");
                return Ok(NavigationOutcome::NoHistory);
            }
        };
        let target = entry.location.href();
        self.run(kind, &target, entry.location, Some(entry.scroll))
            .await
    }

    async fn run(
        &mut self,
        kind: NavigationKind,
        requested: &str,
        location: Location,
        saved: Option<ScrollPosition>,
    ) -> Result<NavigationOutcome, NavigationError> {
        let span = navigation_span(kind.as_str(), &location);
        self.navigate(kind, requested, location, saved)
            .instrument(span)
            .await
    }

    async fn navigate(
        &mut self,
        kind: NavigationKind,
        requested: &str,
        location: Location,
        saved: Option<ScrollPosition>,
    ) -> Result<NavigationOutcome, NavigationError> {
        let is_traversal = matches!(kind, NavigationKind::Back | NavigationKind::Forward);
        if !is_traversal && self.is_current(&location) {
            tracing::debug!("Already at requested location");
            metrics::record_navigation("duplicated", self.current_route_name());
            return Ok(NavigationOutcome::Duplicated);
        }

        let state = self.table.resolve_location(requested, location);
        let Some(route) = state.matched_route.clone() else {
            tracing::warn!(path = %state.location.path, "No route matched");
            metrics::record_navigation("not_found", "none");
            return Ok(NavigationOutcome::NotFound {
                path: state.location.path.clone(),
            });
        };

        let view = match route.loader.load().await {
            Ok(view) => view,
            Err(source) => {
                tracing::error!(route = %route.name, error = %source, "View failed to load");
                metrics::record_navigation("load_failed", &route.name);
                return Err(NavigationError::ViewLoad {
                    route: route.name.clone(),
                    source,
                });
            }
        };

        // Commit: leave the old entry with its scroll offset, then move.
        if self.current.is_some() {
            self.history.save_scroll(self.host.scroll_position());
        }
        match kind {
            NavigationKind::Push => self.history.push(state.location.clone()),
            NavigationKind::Replace => self.history.replace(state.location.clone()),
            NavigationKind::Back | NavigationKind::Forward => {
                self.history.go(delta(kind));
            }
        }

        self.host.mount(view.clone(), &state);
        let position = self.scroll.scroll_position(
            &state,
            self.current.as_ref().map(|active| &active.state),
            saved,
        );
        self.host.scroll_to(position);
        self.history.save_scroll(position);

        tracing::info!(
            route = %route.name,
            view = view.name(),
            params = state.params.len(),
            "Navigated"
        );
        metrics::record_navigation("navigated", &route.name);

        let outcome = NavigationOutcome::Navigated {
            route: route.name.clone(),
            view: view.name().to_string(),
            scroll: position,
        };
        self.current = Some(ActiveRoute { state, view });
        Ok(outcome)
    }

    fn is_current(&self, location: &Location) -> bool {
        self.current
            .as_ref()
            .map(|active| active.state.location.full_path() == location.full_path())
            .unwrap_or(false)
    }

    fn current_route_name(&self) -> &str {
        self.current
            .as_ref()
            .and_then(|active| active.state.route_name())
            .unwrap_or("none")
    }
}

fn delta(kind: NavigationKind) -> isize {
    match kind {
        NavigationKind::Back => -1,
        NavigationKind::Forward => 1,
        NavigationKind::Push | NavigationKind::Replace => 0,
    }
}
