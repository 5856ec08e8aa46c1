//! Configuration loading.
//!
//! Two entry points: [`load`] reads a YAML file (with environment
//! substitution applied to the raw text before parsing, so values keep
//! their inferred types), and [`from_env`] builds the config straight
//! from `TENURE_SOURCE_URL` / `TENURE_SOURCE_KEY` when no file is given.

use std::path::Path;

use crate::config::schema::{SiteConfig, SourceConfig};
use crate::error::ConfigError;

/// Environment variable naming the data source URL.
pub const ENV_SOURCE_URL: &str = "TENURE_SOURCE_URL";

/// Environment variable naming the data source API key.
pub const ENV_SOURCE_KEY: &str = "TENURE_SOURCE_KEY";

/// Environment variable overriding the fetch timeout in milliseconds.
pub const ENV_SOURCE_TIMEOUT_MS: &str = "TENURE_SOURCE_TIMEOUT_MS";

/// Loads and validates a YAML configuration file.
///
/// Substitution forms supported in the raw text:
/// - `${VAR}` expands to the variable's value, failing if unset
/// - `${VAR:-default}` expands to `default` if unset
/// - `${VAR:?message}` fails with the variable name if unset
/// - `$$` is a literal `$`
///
/// # Errors
///
/// Returns a [`ConfigError`] if the file is missing, a referenced
/// variable is unset, the YAML does not parse, or validation fails.
pub fn load(path: &Path) -> Result<SiteConfig, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|_| ConfigError::MissingFile {
        path: path.to_path_buf(),
    })?;
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(&raw);

    let substituted = substitute_env(raw)?;

    let config: SiteConfig =
        serde_yaml::from_str(&substituted).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            line: e.location().map(|l| l.line()),
            message: e.to_string(),
        })?;

    config.validate()?;
    Ok(config)
}

/// Builds the configuration from environment variables alone.
///
/// # Errors
///
/// Returns [`ConfigError::MissingVar`] if the URL or key variable is
/// unset, or a validation error for invalid values.
pub fn from_env() -> Result<SiteConfig, ConfigError> {
    let url = required_var(ENV_SOURCE_URL)?;
    let api_key = required_var(ENV_SOURCE_KEY)?;

    let timeout_ms = match std::env::var(ENV_SOURCE_TIMEOUT_MS) {
        Err(_) => 10_000,
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
            field: ENV_SOURCE_TIMEOUT_MS.to_string(),
            value,
            expected: "a positive integer of milliseconds".to_string(),
        })?,
    };

    let config = SiteConfig {
        source: SourceConfig {
            url,
            api_key,
            timeout_ms,
        },
    };
    config.validate()?;
    Ok(config)
}

fn required_var(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingVar {
        var: var.to_string(),
    })
}

/// Applies environment substitution to raw YAML text.
fn substitute_env(raw: &str) -> Result<String, ConfigError> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('$') => {
                chars.next();
                out.push('$');
            }
            Some('{') => {
                chars.next();
                let spec = read_braced(&mut chars)?;
                out.push_str(&expand(&spec)?);
            }
            _ => out.push('$'),
        }
    }

    Ok(out)
}

/// Collects the content of a `${...}` reference, honoring nested braces.
fn read_braced(chars: &mut std::iter::Peekable<std::str::Chars>) -> Result<String, ConfigError> {
    let mut spec = String::new();
    let mut depth = 1usize;

    for c in chars.by_ref() {
        match c {
            '{' => {
                depth += 1;
                spec.push(c);
            }
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(spec);
                }
                spec.push(c);
            }
            _ => spec.push(c),
        }
    }

    Err(ConfigError::InvalidValue {
        field: "config text".to_string(),
        value: format!("${{{spec}"),
        expected: "a closed ${...} variable reference".to_string(),
    })
}

/// Expands a single `VAR`, `VAR:-default`, or `VAR:?message` spec.
fn expand(spec: &str) -> Result<String, ConfigError> {
    if let Some((var, default)) = spec.split_once(":-") {
        return Ok(std::env::var(var).unwrap_or_else(|_| default.to_string()));
    }

    let var = spec.split_once(":?").map_or(spec, |(var, _)| var);
    std::env::var(var).map_err(|_| ConfigError::MissingVar {
        var: var.to_string(),
    })
}
