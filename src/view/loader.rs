//! Eager and deferred view loading.

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use tokio::sync::OnceCell;

use crate::observability::metrics;
use crate::view::{ViewError, ViewId, ViewUnit};

/// Pending result of a deferred fetch.
pub type LoadFuture = BoxFuture<'static, Result<Arc<dyn ViewUnit>, ViewError>>;

type FetchFn = dyn Fn() -> LoadFuture + Send + Sync;

/// How a route obtains its view unit.
#[derive(Clone, Debug)]
pub enum ViewLoader {
    /// Loaded at startup, ready immediately.
    Eager(Arc<dyn ViewUnit>),
    /// Fetched the first time its route activates.
    Deferred(Arc<DeferredView>),
}

impl ViewLoader {
    pub fn eager(unit: impl ViewUnit + 'static) -> Self {
        ViewLoader::Eager(Arc::new(unit))
    }

    pub fn deferred(view: DeferredView) -> Self {
        ViewLoader::Deferred(Arc::new(view))
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, ViewLoader::Deferred(_))
    }

    /// Obtain the view unit, fetching it if this is an unloaded deferred view.
    pub async fn load(&self) -> Result<Arc<dyn ViewUnit>, ViewError> {
        match self {
            ViewLoader::Eager(unit) => Ok(unit.clone()),
            ViewLoader::Deferred(view) => view.load().await,
        }
    }
}

/// A view fetched on demand and cached after the first success.
pub struct DeferredView {
    id: ViewId,
    fetch: Box<FetchFn>,
    loaded: OnceCell<Arc<dyn ViewUnit>>,
    timeout: Option<Duration>,
}

impl DeferredView {
    pub fn new<F, Fut>(id: impl Into<ViewId>, fetch: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Arc<dyn ViewUnit>, ViewError>> + Send + 'static,
    {
        Self {
            id: id.into(),
            fetch: Box::new(move || fetch().boxed()),
            loaded: OnceCell::new(),
            timeout: None,
        }
    }

    /// Bound each fetch attempt. `None` waits indefinitely.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.initialized()
    }

    /// Return the cached unit or run the fetch. Concurrent callers share a
    /// single fetch; a failed fetch leaves the cell empty.
    pub async fn load(&self) -> Result<Arc<dyn ViewUnit>, ViewError> {
        self.loaded
            .get_or_try_init(|| self.fetch_once())
            .await
            .cloned()
    }

    async fn fetch_once(&self) -> Result<Arc<dyn ViewUnit>, ViewError> {
        let started = Instant::now();
        tracing::debug!(view = %self.id, "Fetching deferred view");

        let fetch = (self.fetch)();
        let result = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, fetch).await {
                Ok(result) => result,
                Err(_) => Err(ViewError::Timeout {
                    view: self.id.to_string(),
                    after_ms: limit.as_millis() as u64,
                }),
            },
            None => fetch.await,
        };

        metrics::record_view_load(self.id.as_str(), result.is_ok(), started);
        match &result {
            Ok(_) => tracing::info!(
                view = %self.id,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Deferred view loaded"
            ),
            Err(e) => tracing::warn!(view = %self.id, error = %e, "Deferred view failed to load"),
        }
        result
    }
}

impl fmt::Debug for DeferredView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredView")
            .field("id", &self.id)
            .field("loaded", &self.is_loaded())
            .field("timeout", &self.timeout)
            .finish()
    }
}
