//! Configuration loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::RouterConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<RouterConfig, ConfigError> {
    let config: RouterConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<RouterConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let config = parse_config(
            r#"
            [[routes]]
            name = "home"
            path = "/"
            view = "HomeView"

            [[routes]]
            name = "lab"
            path = "/irt-lab"
            view = "IrtLabView"
            lazy = true
            "#,
        )
        .unwrap();
        assert_eq!(config.routes.len(), 2);
        assert!(config.routes[1].lazy);
    }

    #[test]
    fn test_parse_rejects_duplicates() {
        let err = parse_config(
            r#"
            [[routes]]
            name = "home"
            path = "/"
            view = "HomeView"

            [[routes]]
            name = "home"
            path = "/home"
            view = "HomeView"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("'home'"));
    }

    #[test]
    fn test_parse_error() {
        let err = parse_config("routes = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join("blog_router_test_load_from_file.toml");
        std::fs::write(&path, "mount_selector = \"#blog\"\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.mount_selector, "#blog");

        std::fs::remove_file(&path).unwrap_or_default();

        let err = load_config(Path::new("/nonexistent/blog.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
