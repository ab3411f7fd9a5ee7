//! Portal configuration
//!
//! Plain serde structs with defaults, loadable from TOML. Every section may
//! be omitted; missing fields fall back to [`Default`].

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Landing page a compliance scheme user is sent to before choosing a scheme
pub const DEFAULT_COMPLIANCE_SCHEME_LANDING_PATH: &str = "/compliance-scheme-landing";

/// Phone validator settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneValidatorConfig {
    /// Region assumed for numbers written without a country code
    pub default_region: String,
    /// Upper bound on the charset match, in milliseconds
    pub match_timeout_ms: u64,
}

impl PhoneValidatorConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With default region
    #[inline]
    #[must_use]
    pub fn with_default_region(mut self, region: impl Into<String>) -> Self {
        self.default_region = region.into();
        self
    }

    /// With match timeout
    #[inline]
    #[must_use]
    pub fn with_match_timeout(mut self, timeout: Duration) -> Self {
        self.match_timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Match timeout as a duration
    #[inline]
    #[must_use]
    pub fn match_timeout(&self) -> Duration {
        Duration::from_millis(self.match_timeout_ms)
    }

    /// Check field ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        let region = &self.default_region;
        if region.len() != 2 || !region.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidRegion(region.clone()));
        }
        if self.match_timeout_ms == 0 {
            return Err(ConfigError::ZeroMatchTimeout);
        }
        Ok(())
    }
}

impl Default for PhoneValidatorConfig {
    fn default() -> Self {
        Self {
            default_region: "GB".to_string(),
            match_timeout_ms: 250,
        }
    }
}

/// Journey guard and session store settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JourneyConfig {
    /// Fallback for the compliance scheme guard
    pub compliance_scheme_landing_path: String,
    /// Sessions idle longer than this are dropped
    pub session_idle_timeout_secs: u64,
    /// Maximum number of live sessions held in memory
    pub session_capacity: u64,
}

impl JourneyConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With landing path
    #[inline]
    #[must_use]
    pub fn with_landing_path(mut self, path: impl Into<String>) -> Self {
        self.compliance_scheme_landing_path = path.into();
        self
    }

    /// With idle timeout
    #[inline]
    #[must_use]
    pub fn with_idle_timeout(mut self, timeout: Duration) -> Self {
        self.session_idle_timeout_secs = timeout.as_secs();
        self
    }

    /// With session capacity
    #[inline]
    #[must_use]
    pub fn with_capacity(mut self, capacity: u64) -> Self {
        self.session_capacity = capacity;
        self
    }

    /// Idle timeout as a duration
    #[inline]
    #[must_use]
    pub fn session_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.session_idle_timeout_secs)
    }

    /// Check field ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.compliance_scheme_landing_path.starts_with('/') {
            return Err(ConfigError::InvalidFallbackPath(
                self.compliance_scheme_landing_path.clone(),
            ));
        }
        if self.session_capacity == 0 {
            return Err(ConfigError::ZeroSessionCapacity);
        }
        Ok(())
    }
}

impl Default for JourneyConfig {
    fn default() -> Self {
        Self {
            compliance_scheme_landing_path: DEFAULT_COMPLIANCE_SCHEME_LANDING_PATH.to_string(),
            session_idle_timeout_secs: 20 * 60,
            session_capacity: 10_000,
        }
    }
}

/// Top-level portal configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// Phone validator section
    pub phone: PhoneValidatorConfig,
    /// Journey section
    pub journey: JourneyConfig,
}

impl PortalConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::io_error(path, e))?;
        Self::from_toml_str(&text)
    }

    /// Validate every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.phone.validate()?;
        self.journey.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let config = PortalConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.phone.default_region, "GB");
        assert_eq!(config.phone.match_timeout(), Duration::from_millis(250));
        assert_eq!(
            config.journey.compliance_scheme_landing_path,
            DEFAULT_COMPLIANCE_SCHEME_LANDING_PATH
        );
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config = PortalConfig::from_toml_str(
            r#"
            [phone]
            match_timeout_ms = 100
            "#,
        )
        .unwrap();

        assert_eq!(config.phone.match_timeout_ms, 100);
        assert_eq!(config.phone.default_region, "GB");
        assert_eq!(config.journey, JourneyConfig::default());
    }

    #[test]
    fn rejects_bad_region() {
        let err = PortalConfig::from_toml_str("[phone]\ndefault_region = \"GBR\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRegion(r) if r == "GBR"));
    }

    #[test]
    fn rejects_zero_timeout() {
        let err = PortalConfig::from_toml_str("[phone]\nmatch_timeout_ms = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::ZeroMatchTimeout));
    }

    #[test]
    fn rejects_relative_landing_path() {
        let err = PortalConfig::from_toml_str(
            "[journey]\ncompliance_scheme_landing_path = \"landing\"\n",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFallbackPath(_)));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = PortalConfig::from_toml_str("[phone\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[journey]\nsession_capacity = 5").unwrap();

        let config = PortalConfig::load(file.path()).unwrap();
        assert_eq!(config.journey.session_capacity, 5);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = PortalConfig::load("/nonexistent/regportal.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn builders_set_fields() {
        let phone = PhoneValidatorConfig::new()
            .with_default_region("DE")
            .with_match_timeout(Duration::from_millis(40));
        assert_eq!(phone.default_region, "DE");
        assert_eq!(phone.match_timeout_ms, 40);

        let journey = JourneyConfig::new()
            .with_landing_path("/schemes")
            .with_idle_timeout(Duration::from_secs(60))
            .with_capacity(3);
        assert_eq!(journey.session_idle_timeout(), Duration::from_secs(60));
        assert_eq!(journey.session_capacity, 3);
    }
}
