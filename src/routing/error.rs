//! Route table errors.

use thiserror::Error;

/// Errors raised while building the route table or reversing a route.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// Pattern text could not be parsed.
    #[error("invalid route pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// Two definitions share a logical name.
    #[error("duplicate route name '{0}'")]
    DuplicateName(String),

    /// A definition references a view the registry does not know.
    #[error("route '{route}' references unknown view '{view}'")]
    UnknownView { route: String, view: String },

    /// Reverse lookup for a name that is not in the table.
    #[error("no route named '{0}'")]
    UnknownRoute(String),

    /// Reverse lookup without a value for a placeholder.
    #[error("pattern '{pattern}' requires param '{param}'")]
    MissingParam { pattern: String, param: String },
}
