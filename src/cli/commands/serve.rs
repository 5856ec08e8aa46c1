//! The `serve` command: run the HTTP surface.

use std::sync::Arc;

use crate::cli::args::ServeArgs;
use crate::error::Result;
use crate::fetch::HttpPositionSource;
use crate::serve::{AppState, parse_bind_addr, serve};

/// Serve the timeline as a JSON endpoint until interrupted.
///
/// # Errors
///
/// Returns a config error if configuration is missing or invalid, or an
/// I/O error if the bind address is unavailable.
pub async fn run(args: &ServeArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    let source = Arc::new(HttpPositionSource::new(config.source));

    let bind_addr = parse_bind_addr(&args.http);
    serve(&bind_addr, AppState { source }).await
}
