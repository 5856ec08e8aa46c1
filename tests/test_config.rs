//! Configuration loading against real files.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use tenure::config;
use tenure::error::ConfigError;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn loads_valid_file() {
    let file = write_config(
        "source:\n  url: https://data.example.test/positions\n  api_key: secret\n",
    );
    let config = config::load(file.path()).unwrap();
    assert_eq!(config.source.url, "https://data.example.test/positions");
    assert_eq!(config.source.api_key, "secret");
    assert_eq!(config.source.timeout_ms, 10_000);
}

#[test]
fn substitutes_defaults_for_unset_variables() {
    let file = write_config(
        "source:\n  url: ${TENURE_TEST_CFG_URL:-https://fallback.test}\n  api_key: ${TENURE_TEST_CFG_KEY:-fallback-key}\n  timeout_ms: 2500\n",
    );
    let config = config::load(file.path()).unwrap();
    assert_eq!(config.source.url, "https://fallback.test");
    assert_eq!(config.source.api_key, "fallback-key");
    assert_eq!(config.source.timeout_ms, 2500);
}

#[test]
fn required_variable_missing_is_fatal() {
    let file = write_config(
        "source:\n  url: https://data.example.test\n  api_key: ${TENURE_TEST_CFG_REQUIRED:?api key}\n",
    );
    let err = config::load(file.path()).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::MissingVar { var } if var == "TENURE_TEST_CFG_REQUIRED"
    ));
}

#[test]
fn missing_file_is_fatal() {
    let err = config::load(Path::new("/nonexistent/tenure.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::MissingFile { .. }));
}

#[test]
fn unparsable_yaml_is_fatal() {
    let file = write_config("source: [this is not\n  a mapping\n");
    let err = config::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn non_http_url_is_rejected() {
    let file = write_config("source:\n  url: ftp://data.example.test\n  api_key: secret\n");
    let err = config::load(file.path()).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidValue { field, .. } if field == "source.url"
    ));
}

#[test]
fn from_env_without_variables_is_fatal() {
    // TENURE_SOURCE_URL is never set in the test environment.
    let err = config::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::MissingVar { .. }));
}
