//! Observability: structured logging for fetch and aggregation steps.

pub mod logging;

pub use logging::{LogFormat, init_logging};
