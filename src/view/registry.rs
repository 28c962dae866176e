//! View registry.
//!
//! # Responsibilities
//! - Map view identifiers to loaders
//! - Share one loader between every route naming the same view
//! - Apply the configured load timeout to deferred views

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::config::RouterConfig;
use crate::view::{DeferredView, StaticView, ViewError, ViewId, ViewLoader, ViewUnit};

/// Identifier → loader lookup used when building the route table.
#[derive(Debug, Clone, Default)]
pub struct ViewRegistry {
    loaders: HashMap<ViewId, ViewLoader>,
    load_timeout: Option<Duration>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Timeout applied to deferred views registered after this call.
    pub fn with_load_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.load_timeout = timeout;
        self
    }

    pub fn register_eager(&mut self, id: impl Into<ViewId>, unit: Arc<dyn ViewUnit>) -> &mut Self {
        self.loaders.insert(id.into(), ViewLoader::Eager(unit));
        self
    }

    pub fn register_deferred<F, Fut>(&mut self, id: impl Into<ViewId>, fetch: F) -> &mut Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Arc<dyn ViewUnit>, ViewError>> + Send + 'static,
    {
        let id = id.into();
        let view = DeferredView::new(id.clone(), fetch).with_timeout(self.load_timeout);
        self.loaders.insert(id, ViewLoader::deferred(view));
        self
    }

    pub fn get(&self, id: &ViewId) -> Option<&ViewLoader> {
        self.loaders.get(id)
    }

    pub fn contains(&self, id: &ViewId) -> bool {
        self.loaders.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.loaders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaders.is_empty()
    }

    /// Registry of name-only views for every view the config references.
    /// Views of routes marked `lazy` are registered as deferred.
    pub fn placeholders(config: &RouterConfig) -> Self {
        let timeout = config.views.load_timeout_ms.map(Duration::from_millis);
        let mut registry = Self::new().with_load_timeout(timeout);

        for route in &config.routes {
            let id = ViewId::from(route.view.as_str());
            if registry.contains(&id) {
                continue;
            }
            let unit: Arc<dyn ViewUnit> = Arc::new(StaticView::new(route.view.as_str()));
            if route.lazy {
                registry.register_deferred(id, move || {
                    let unit = unit.clone();
                    async move { Ok::<_, ViewError>(unit) }
                });
            } else {
                registry.register_eager(id, unit);
            }
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders_share_views() {
        let config = RouterConfig::default();
        let registry = ViewRegistry::placeholders(&config);

        let lab = registry.get(&ViewId::from("IrtLabView")).unwrap();
        assert!(lab.is_deferred());

        let home = registry.get(&ViewId::from("HomeView")).unwrap();
        assert!(!home.is_deferred());

        // irt-lab and irt-intro name the same view: one entry
        let distinct: std::collections::HashSet<_> =
            config.routes.iter().map(|r| r.view.as_str()).collect();
        assert_eq!(registry.len(), distinct.len());
    }
}
