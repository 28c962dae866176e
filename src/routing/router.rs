//! Route lookup and reverse lookup.
//!
//! # Responsibilities
//! - Store route definitions in declaration order
//! - Resolve a requested path to a definition plus captured params
//! - Return an explicit not-found state when nothing matches
//! - Build links to named routes
//!
//! # Design Decisions
//! - Immutable after construction
//! - First match wins: declaration order is part of the contract
//! - O(n) scan over patterns (a blog has a handful of routes)
//! - Duplicate names fail construction instead of shadowing

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use crate::config::RouteConfig;
use crate::routing::{Location, Params, PathPattern, RouteError};
use crate::view::{ViewId, ViewLoader, ViewRegistry};

/// A binding between a path pattern, a logical name and a view.
#[derive(Debug, Clone, Serialize)]
pub struct RouteDefinition {
    pub name: String,
    pub path: PathPattern,
    pub view: ViewId,
    #[serde(skip)]
    pub loader: ViewLoader,
}

impl RouteDefinition {
    pub fn new(
        name: impl Into<String>,
        path: &str,
        view: impl Into<ViewId>,
        loader: ViewLoader,
    ) -> Result<Self, RouteError> {
        Ok(Self {
            name: name.into(),
            path: PathPattern::parse(path)?,
            view: view.into(),
            loader,
        })
    }

    pub fn is_deferred(&self) -> bool {
        self.loader.is_deferred()
    }
}

/// Outcome of resolving one requested path. Lives for a single navigation.
#[derive(Debug, Clone, Serialize)]
pub struct NavigationState {
    /// The raw input as requested.
    pub requested_path: String,
    pub location: Location,
    /// Matched definition, or `None` for not found.
    pub matched_route: Option<Arc<RouteDefinition>>,
    pub params: Params,
}

impl NavigationState {
    pub fn is_match(&self) -> bool {
        self.matched_route.is_some()
    }

    pub fn route_name(&self) -> Option<&str> {
        self.matched_route.as_deref().map(|r| r.name.as_str())
    }
}

/// Ordered, immutable route table.
#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<Arc<RouteDefinition>>,
    by_name: HashMap<String, usize>,
}

impl RouteTable {
    /// Build a table from definitions in priority order.
    pub fn new(routes: Vec<RouteDefinition>) -> Result<Self, RouteError> {
        let mut by_name = HashMap::with_capacity(routes.len());
        for (index, route) in routes.iter().enumerate() {
            if by_name.insert(route.name.clone(), index).is_some() {
                return Err(RouteError::DuplicateName(route.name.clone()));
            }
        }

        Ok(Self {
            routes: routes.into_iter().map(Arc::new).collect(),
            by_name,
        })
    }

    /// Build a table from configuration, looking views up in `registry`.
    pub fn from_config(routes: &[RouteConfig], registry: &ViewRegistry) -> Result<Self, RouteError> {
        let definitions = routes
            .iter()
            .map(|route| {
                let view = ViewId::from(route.view.as_str());
                let loader = registry
                    .get(&view)
                    .cloned()
                    .ok_or_else(|| RouteError::UnknownView {
                        route: route.name.clone(),
                        view: route.view.clone(),
                    })?;
                RouteDefinition::new(route.name.as_str(), &route.path, view, loader)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(definitions)
    }

    /// Resolve a path, fragment or URL against the table.
    pub fn resolve(&self, requested_path: &str) -> NavigationState {
        let location = Location::parse(requested_path);
        self.resolve_location(requested_path, location)
    }

    pub(crate) fn resolve_location(&self, requested_path: &str, location: Location) -> NavigationState {
        let matched = self
            .routes
            .iter()
            .find_map(|route| route.path.matches(&location.path).map(|p| (route.clone(), p)));

        match matched {
            Some((route, params)) => NavigationState {
                requested_path: requested_path.to_string(),
                location,
                matched_route: Some(route),
                params,
            },
            None => NavigationState {
                requested_path: requested_path.to_string(),
                location,
                matched_route: None,
                params: Params::new(),
            },
        }
    }

    pub fn get(&self, name: &str) -> Option<&Arc<RouteDefinition>> {
        self.by_name.get(name).map(|&i| &self.routes[i])
    }

    /// Concrete path of the named route.
    pub fn path_for(&self, name: &str, params: &Params) -> Result<String, RouteError> {
        let route = self
            .get(name)
            .ok_or_else(|| RouteError::UnknownRoute(name.to_string()))?;
        route.path.build(params)
    }

    /// Link target (`#/...`) of the named route.
    pub fn href(&self, name: &str, params: &Params) -> Result<String, RouteError> {
        self.path_for(name, params).map(|path| format!("#{}", path))
    }

    pub fn routes(&self) -> impl Iterator<Item = &Arc<RouteDefinition>> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
