//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the router.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::config::site;

/// Root configuration. The default is the blog's canonical setup.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterConfig {
    /// History strategy.
    pub history: HistoryConfig,

    /// Selector of the host element the app mounts into.
    pub mount_selector: String,

    /// Scroll handling after navigation.
    pub scroll: ScrollConfig,

    /// View loading settings.
    pub views: ViewsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Route definitions in priority order (first match wins).
    pub routes: Vec<RouteConfig>,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            history: HistoryConfig::default(),
            mount_selector: "#app".to_string(),
            scroll: ScrollConfig::default(),
            views: ViewsConfig::default(),
            observability: ObservabilityConfig::default(),
            routes: site::blog_routes(),
        }
    }
}

/// History configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct HistoryConfig {
    pub mode: HistoryMode,
}

/// Where the navigable path is encoded in the URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryMode {
    /// After the `#` marker; needs no server rewrite rules.
    #[default]
    Hash,
}

/// Scroll configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub behavior: ScrollMode,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollMode {
    /// Always scroll to the top of the page.
    #[default]
    Top,
    /// Restore the saved offset on back/forward.
    Restore,
}

/// View loading configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ViewsConfig {
    /// Limit for a single deferred fetch. Unset waits indefinitely.
    pub load_timeout_ms: Option<u64>,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit JSON log lines instead of the pretty format.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

/// A single route entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Unique logical name, used for links by name.
    pub name: String,

    /// Path pattern, e.g. `/article/:id`.
    pub path: String,

    /// View identifier in the registry.
    pub view: String,

    /// Fetch the view on first activation instead of at startup.
    #[serde(default)]
    pub lazy: bool,
}

impl RouteConfig {
    pub fn new(name: impl Into<String>, path: impl Into<String>, view: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            view: view.into(),
            lazy: false,
        }
    }

    pub fn lazy(mut self) -> Self {
        self.lazy = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RouterConfig::default();
        assert_eq!(config.mount_selector, "#app");
        assert_eq!(config.history.mode, HistoryMode::Hash);
        assert_eq!(config.scroll.behavior, ScrollMode::Top);
        assert!(config.views.load_timeout_ms.is_none());
        assert!(!config.routes.is_empty());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: RouterConfig = toml::from_str(
            r##"
            mount_selector = "#root"

            [scroll]
            behavior = "restore"

            [[routes]]
            name = "home"
            path = "/"
            view = "HomeView"
            "##,
        )
        .unwrap();

        assert_eq!(config.mount_selector, "#root");
        assert_eq!(config.scroll.behavior, ScrollMode::Restore);
        assert_eq!(config.routes, vec![RouteConfig::new("home", "/", "HomeView")]);
        assert_eq!(config.observability.log_level, "info");
    }
}
