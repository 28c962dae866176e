//! Startup orchestration.
//!
//! # Responsibilities
//! - Validate configuration
//! - Require the host's mount point
//! - Build the route table from the view registry
//! - Run the initial navigation
//!
//! # Design Decisions
//! - Fail fast: configuration and mount errors are fatal
//! - An initial view-load failure is logged, not fatal: the app is installed
//!   and the next navigation can recover

use std::sync::Arc;

use thiserror::Error;

use crate::config::{validate_config, RouterConfig, ValidationError};
use crate::host::Host;
use crate::navigation::Navigator;
use crate::routing::{scroll, RouteError, RouteTable};
use crate::view::ViewRegistry;

/// Errors that prevent the router from installing.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {}", join_errors(.0))]
    InvalidConfig(Vec<ValidationError>),

    #[error("mount point '{0}' not found in host document")]
    MountPointMissing(String),

    #[error(transparent)]
    Routes(#[from] RouteError),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A router installed on a host.
pub struct Application<H: Host> {
    navigator: Navigator<H>,
}

impl<H: Host> Application<H> {
    /// Install the router on `host` and navigate to `initial_url`.
    pub async fn install(
        config: RouterConfig,
        registry: &ViewRegistry,
        host: H,
        initial_url: &str,
    ) -> Result<Self, StartupError> {
        validate_config(&config).map_err(StartupError::InvalidConfig)?;

        if !host.has_mount_point(&config.mount_selector) {
            return Err(StartupError::MountPointMissing(config.mount_selector.clone()));
        }

        let table = Arc::new(RouteTable::from_config(&config.routes, registry)?);
        tracing::info!(
            routes = table.len(),
            mount = %config.mount_selector,
            history = ?config.history.mode,
            "Route table installed"
        );

        let mut navigator = Navigator::new(table, scroll::behavior_for(config.scroll.behavior), host);
        match navigator.push(initial_url).await {
            Ok(outcome) => tracing::debug!(?outcome, "Initial navigation complete"),
            Err(e) => tracing::error!(error = %e, "Initial navigation failed"),
        }

        Ok(Self { navigator })
    }

    pub fn navigator(&self) -> &Navigator<H> {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut Navigator<H> {
        &mut self.navigator
    }
}
