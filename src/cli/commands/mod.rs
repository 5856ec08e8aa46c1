//! CLI command dispatch and handlers.
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod check;
pub mod completions;
pub mod serve;
pub mod timeline;

use std::path::Path;

use crate::cli::args::{Cli, Commands};
use crate::config::{self, SiteConfig};
use crate::error::Result;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Timeline(args) => timeline::run(&args).await,
        Commands::Serve(args) => serve::run(&args).await,
        Commands::Check(args) => check::run(&args).await,
        Commands::Completions(args) => {
            completions::run(&args);
            Ok(())
        }
    }
}

/// Loads configuration from the given file, or from environment
/// variables when no file was passed.
pub(crate) fn load_config(path: Option<&Path>) -> Result<SiteConfig> {
    let config = match path {
        Some(path) => {
            tracing::info!(config = %path.display(), "loading configuration");
            config::load(path)?
        }
        None => config::from_env()?,
    };
    Ok(config)
}
