//! Error types for `tenure`.
//!
//! One enum per failure domain (configuration, upstream fetch, record
//! data), aggregated by [`TenureError`] which maps each variant to a
//! process exit code.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `tenure` CLI operations, following Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Configuration error (missing variable, invalid file)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (file not found, bind failed)
    pub const IO_ERROR: i32 = 3;

    /// Upstream fetch error (unreachable, non-success status, bad body)
    pub const FETCH_ERROR: i32 = 4;

    /// Record data error (malformed date)
    pub const DATA_ERROR: i32 = 5;

    /// Usage error (invalid arguments)
    pub const USAGE_ERROR: i32 = 64;

    /// Interrupted by SIGINT (Ctrl+C)
    pub const INTERRUPTED: i32 = 130;

    /// Terminated by SIGTERM
    pub const TERMINATED: i32 = 143;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `tenure` operations.
///
/// Aggregates the domain-specific errors and provides a unified
/// interface for error handling and exit code mapping.
#[derive(Debug, Error)]
pub enum TenureError {
    /// Configuration loading or validation error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Upstream fetch error
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Position record error
    #[error(transparent)]
    Data(#[from] DataError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TenureError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Json(_) => ExitCode::CONFIG_ERROR,
            Self::Fetch(_) => ExitCode::FETCH_ERROR,
            Self::Data(_) => ExitCode::DATA_ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Configuration loading and validation errors.
///
/// All of these are fatal and surface before any fetch is attempted.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required environment variable is not set
    #[error("environment variable '{var}' not set")]
    MissingVar {
        /// Name of the missing variable
        var: String,
    },

    /// Configuration file not found or unreadable
    #[error("config file not found: {path}")]
    MissingFile {
        /// Path to the missing file
        path: PathBuf,
    },

    /// YAML parsing failed
    #[error("parse error in {path}: {message}")]
    Parse {
        /// Path to the configuration file
        path: PathBuf,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Error message from the parser
        message: String,
    },

    /// Field has an invalid value
    #[error("invalid value for '{field}': got '{value}', expected {expected}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The actual value provided
        value: String,
        /// Description of what was expected
        expected: String,
    },
}

// ============================================================================
// Fetch Errors
// ============================================================================

/// Upstream fetch errors.
///
/// The data source is an external collaborator: failures propagate to the
/// caller as-is, with no retry or backoff.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The data source is unreachable
    #[error("upstream unreachable: {0}")]
    Network(String),

    /// The data source returned a non-success status
    #[error("upstream returned HTTP {status}")]
    Status {
        /// HTTP status code from the upstream response
        status: u16,
    },

    /// The response body could not be decoded as position records
    #[error("upstream response could not be decoded: {0}")]
    Decode(String),

    /// The request exceeded the configured timeout
    #[error("upstream request timed out after {timeout_ms}ms")]
    TimedOut {
        /// Configured timeout in milliseconds
        timeout_ms: u64,
    },
}

// ============================================================================
// Data Errors
// ============================================================================

/// Position record errors.
///
/// A malformed record fails the whole pass; no partial aggregate is
/// produced.
#[derive(Debug, Error)]
pub enum DataError {
    /// A date string could not be parsed into a calendar date
    #[error("malformed {field} '{value}' in position at '{company}'")]
    MalformedDate {
        /// Which date field was malformed (`start_date` or `end_date`)
        field: &'static str,
        /// The unparsable value
        value: String,
        /// Employer the offending record belongs to
        company: String,
    },
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `tenure` operations.
pub type Result<T> = std::result::Result<T, TenureError>;

// ============================================================================
// Tests
// ============================================================================
