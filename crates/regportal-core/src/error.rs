//! Error types for the portal core
//!
//! Covers configuration loading and validation. Session data itself has no
//! failure modes: absent fields are ordinary `None` values.

use std::path::PathBuf;

/// Errors raised while loading or validating [`crate::PortalConfig`]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading a config file
    #[error("io error reading {path}: {source}")]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },

    /// TOML syntax or shape error
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Default region is not a two-letter region code
    #[error("invalid default region '{0}': expected a two-letter region code")]
    InvalidRegion(String),

    /// Charset match timeout of zero would reject every number
    #[error("phone match timeout must be greater than zero")]
    ZeroMatchTimeout,

    /// Redirect targets must be rooted paths
    #[error("invalid fallback path '{0}': must start with '/'")]
    InvalidFallbackPath(String),

    /// Session cache capacity of zero
    #[error("session capacity must be greater than zero")]
    ZeroSessionCapacity,
}

impl ConfigError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Combined core error
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Configuration could not be loaded or failed validation
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Organisation role string matched no known role
    #[error("unknown organisation role: '{0}'")]
    UnknownRole(String),
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::InvalidRegion("GBR".to_string());
        assert_eq!(
            err.to_string(),
            "invalid default region 'GBR': expected a two-letter region code"
        );
    }

    #[test]
    fn error_conversions() {
        let err: CoreError = ConfigError::ZeroMatchTimeout.into();
        assert!(matches!(err, CoreError::Config(ConfigError::ZeroMatchTimeout)));
    }
}
