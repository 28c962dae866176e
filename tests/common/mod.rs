//! Shared helpers for integration tests.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use blog_router::config::RouterConfig;
use blog_router::view::{StaticView, ViewError, ViewId, ViewRegistry, ViewUnit};

/// Registry for the canonical config whose deferred views count their
/// fetches and fail the first `fail_first` attempts.
pub fn counting_registry(config: &RouterConfig, fail_first: u32) -> (ViewRegistry, Arc<AtomicU32>) {
    let fetches = Arc::new(AtomicU32::new(0));
    let mut registry = ViewRegistry::new();

    for route in &config.routes {
        if registry.contains(&ViewId::from(route.view.as_str())) {
            continue;
        }
        let name = route.view.clone();
        if route.lazy {
            let fetches = fetches.clone();
            registry.register_deferred(route.view.as_str(), move || {
                let fetches = fetches.clone();
                let name = name.clone();
                async move {
                    let n = fetches.fetch_add(1, Ordering::SeqCst);
                    if n < fail_first {
                        Err(ViewError::Load {
                            view: name,
                            reason: "chunk request failed".into(),
                        })
                    } else {
                        Ok(Arc::new(StaticView::new(name)) as Arc<dyn ViewUnit>)
                    }
                }
            });
        } else {
            registry.register_eager(route.view.as_str(), Arc::new(StaticView::new(name)));
        }
    }
    (registry, fetches)
}

/// Registry for the canonical config whose deferred views never finish
/// their first fetch; later fetches succeed.
pub fn stalling_registry(config: &RouterConfig) -> (ViewRegistry, Arc<AtomicU32>) {
    let fetches = Arc::new(AtomicU32::new(0));
    let mut registry = ViewRegistry::new();

    for route in &config.routes {
        if registry.contains(&ViewId::from(route.view.as_str())) {
            continue;
        }
        let name = route.view.clone();
        if route.lazy {
            let fetches = fetches.clone();
            registry.register_deferred(route.view.as_str(), move || {
                let fetches = fetches.clone();
                let name = name.clone();
                async move {
                    if fetches.fetch_add(1, Ordering::SeqCst) == 0 {
                        std::future::pending::<()>().await;
                    }
                    Ok::<_, ViewError>(Arc::new(StaticView::new(name)) as Arc<dyn ViewUnit>)
                }
            });
        } else {
            registry.register_eager(route.view.as_str(), Arc::new(StaticView::new(name)));
        }
    }
    (registry, fetches)
}
