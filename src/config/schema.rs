//! Typed configuration schema.

use serde::Deserialize;

use crate::error::ConfigError;

/// Top-level site configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// The position data source.
    pub source: SourceConfig,
}

/// Connection settings for the position data source.
///
/// Passed explicitly into the fetch collaborator; nothing reads ambient
/// process state after loading.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    /// Endpoint URL returning the position record list.
    pub url: String,

    /// API key, sent as both bearer token and `apikey` header.
    pub api_key: String,

    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

const fn default_timeout_ms() -> u64 {
    10_000
}

impl SiteConfig {
    /// Validates the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an empty or non-HTTP
    /// URL, an empty API key, or a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.source.url.trim();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                field: "source.url".to_string(),
                value: self.source.url.clone(),
                expected: "an http:// or https:// URL".to_string(),
            });
        }

        if self.source.api_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "source.api_key".to_string(),
                value: "<empty>".to_string(),
                expected: "a non-empty API key".to_string(),
            });
        }

        if self.source.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "source.timeout_ms".to_string(),
                value: "0".to_string(),
                expected: "a positive timeout".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: &str, api_key: &str) -> SiteConfig {
        SiteConfig {
            source: SourceConfig {
                url: url.to_string(),
                api_key: api_key.to_string(),
                timeout_ms: default_timeout_ms(),
            },
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(config("https://data.example.test/positions", "key").validate().is_ok());
    }

    #[test]
    fn rejects_empty_url() {
        let err = config("", "key").validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field, .. } if field == "source.url"));
    }

    #[test]
    fn rejects_non_http_scheme() {
        let err = config("ftp://data.example.test", "key").validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field, .. } if field == "source.url"));
    }

    #[test]
    fn rejects_empty_api_key() {
        let err = config("https://data.example.test", "  ").validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidValue { field, .. } if field == "source.api_key")
        );
    }

    #[test]
    fn rejects_zero_timeout() {
        let mut cfg = config("https://data.example.test", "key");
        cfg.source.timeout_ms = 0;
        let err = cfg.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidValue { field, .. } if field == "source.timeout_ms")
        );
    }

    #[test]
    fn timeout_defaults_when_absent() {
        let cfg: SiteConfig = serde_yaml::from_str(
            "source:\n  url: https://data.example.test\n  api_key: key\n",
        )
        .unwrap();
        assert_eq!(cfg.source.timeout_ms, 10_000);
    }

    #[test]
    fn unknown_fields_rejected() {
        let result: Result<SiteConfig, _> = serde_yaml::from_str(
            "source:\n  url: https://x.test\n  api_key: k\n  retries: 3\n",
        );
        assert!(result.is_err());
    }
}
