//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading `bricks.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read plugin config `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    /// TOML that did not come from a file.
    #[error("invalid plugin config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid plugin config `{0}`: {1}")]
    Parse(PathBuf, #[source] toml::de::Error),

    #[error("invalid plugin config value: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("bricks.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("cannot read"));
        assert!(display.contains("bricks.toml"));

        let validation_err = ConfigError::Validation("[paths.input] must not be empty".to_string());
        assert!(format!("{validation_err}").contains("[paths.input]"));
    }

    #[test]
    fn test_parse_error_names_file() {
        let toml_err = toml::from_str::<toml::Value>("key = ").unwrap_err();
        let parse_err = ConfigError::Parse(PathBuf::from("site/bricks.toml"), toml_err);
        assert!(format!("{parse_err}").starts_with("invalid plugin config `site/bricks.toml`: "));
    }
}
