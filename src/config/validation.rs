//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject duplicate route names and duplicate paths
//! - Reject patterns that do not compile
//! - Detect routes shadowed by an earlier catch-all
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashMap;

use thiserror::Error;

use crate::config::RouterConfig;
use crate::routing::PathPattern;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route #{index} has an empty name")]
    EmptyName { index: usize },

    #[error("route name '{0}' is declared more than once")]
    DuplicateName(String),

    #[error("route '{name}' has an invalid path: {reason}")]
    InvalidPath { name: String, reason: String },

    #[error("routes '{first}' and '{second}' declare the same path '{path}'")]
    DuplicatePath {
        path: String,
        first: String,
        second: String,
    },

    #[error("route '{name}' can never match: catch-all route '{catch_all}' comes first")]
    UnreachableRoute { name: String, catch_all: String },

    #[error("route '{0}' has an empty view")]
    EmptyView(String),

    #[error("mount selector is empty")]
    EmptyMountSelector,

    #[error("views.load_timeout_ms must be greater than zero")]
    ZeroLoadTimeout,
}

/// Check a configuration before it is installed.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.mount_selector.trim().is_empty() {
        errors.push(ValidationError::EmptyMountSelector);
    }
    if config.views.load_timeout_ms == Some(0) {
        errors.push(ValidationError::ZeroLoadTimeout);
    }

    let mut names: HashMap<&str, usize> = HashMap::new();
    let mut shapes: HashMap<String, &str> = HashMap::new();
    let mut catch_all: Option<&str> = None;

    for (index, route) in config.routes.iter().enumerate() {
        if route.name.trim().is_empty() {
            errors.push(ValidationError::EmptyName { index });
        } else if names.insert(route.name.as_str(), index).is_some() {
            errors.push(ValidationError::DuplicateName(route.name.clone()));
        }

        if route.view.trim().is_empty() {
            errors.push(ValidationError::EmptyView(route.name.clone()));
        }

        if let Some(first) = catch_all {
            errors.push(ValidationError::UnreachableRoute {
                name: route.name.clone(),
                catch_all: first.to_string(),
            });
        }

        let pattern = match PathPattern::parse(&route.path) {
            Ok(p) => p,
            Err(e) => {
                errors.push(ValidationError::InvalidPath {
                    name: route.name.clone(),
                    reason: e.to_string(),
                });
                continue;
            }
        };

        if let Some(first) = shapes.insert(pattern.shape(), route.name.as_str()) {
            errors.push(ValidationError::DuplicatePath {
                path: route.path.clone(),
                first: first.to_string(),
                second: route.name.clone(),
            });
        }
        if pattern.is_catch_all() && catch_all.is_none() {
            catch_all = Some(route.name.as_str());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RouteConfig;

    fn config_with(routes: Vec<RouteConfig>) -> RouterConfig {
        RouterConfig {
            routes,
            ..RouterConfig::default()
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&RouterConfig::default()), Ok(()));
    }

    #[test]
    fn test_duplicate_name() {
        let config = config_with(vec![
            RouteConfig::new("home", "/", "HomeView"),
            RouteConfig::new("home", "/index", "HomeView"),
        ]);
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::DuplicateName("home".into())]);
    }

    #[test]
    fn test_duplicate_path_ignores_param_names() {
        let config = config_with(vec![
            RouteConfig::new("article", "/article/:id", "ArticleView"),
            RouteConfig::new("post", "/article/:slug", "PostView"),
        ]);
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::DuplicatePath { .. }));
    }

    #[test]
    fn test_route_after_catch_all() {
        let config = config_with(vec![
            RouteConfig::new("not-found", "/*any", "NotFoundView"),
            RouteConfig::new("home", "/", "HomeView"),
        ]);
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::UnreachableRoute {
                name: "home".into(),
                catch_all: "not-found".into(),
            }]
        );
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = config_with(vec![
            RouteConfig::new("", "/", "HomeView"),
            RouteConfig::new("broken", "no-slash", ""),
        ]);
        config.mount_selector = " ".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::EmptyMountSelector));
        assert!(errors.contains(&ValidationError::EmptyName { index: 0 }));
        assert!(errors.contains(&ValidationError::EmptyView("broken".into())));
    }
}
