//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::RouterConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Validation(_) => None,
        }
    }
}

/// Load and validate a route table from a TOML file.
pub fn load_config(path: &Path) -> Result<RouterConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config = parse_config(&content)?;
    tracing::debug!(path = ?path, routes = config.routes.len(), "Route table loaded");
    Ok(config)
}

/// Parse and validate a route table from TOML text.
pub fn parse_config(content: &str) -> Result<RouterConfig, ConfigError> {
    let config: RouterConfig = toml::from_str(content).map_err(ConfigError::Parse)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_table() {
        let config = parse_config(
            r#"
            [history]
            initial_token = "/pages/"

            [observability]
            log_level = "debug"

            [[routes]]
            pattern = ""
            action = "dashboard"

            [[routes]]
            pattern = "/pages/:id/"
            action = "showPage"

            [[routes]]
            pattern = { regex = '^legacy/(\d+)$' }
            action = "legacy"
            "#,
        )
        .unwrap();

        assert_eq!(config.history.initial_token, "/pages/");
        assert_eq!(config.observability.log_level, "debug");
        assert_eq!(config.routes.len(), 3);
        assert_eq!(config.actions(), ["dashboard", "showPage", "legacy"]);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = parse_config("").unwrap();
        assert!(config.routes.is_empty());
        assert_eq!(config.history.initial_token, "");
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_parse_error() {
        let err = parse_config("[[routes]]\npattern = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_error_lists_all_problems() {
        let err = parse_config(
            r#"
            [[routes]]
            pattern = 7
            action = "numbers"

            [[routes]]
            pattern = "/x/"
            action = ""
            "#,
        )
        .unwrap_err();

        match &err {
            ConfigError::Validation(errors) => assert_eq!(errors.len(), 2),
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().starts_with("Validation failed: "));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config(Path::new("does-not-exist/routes.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
