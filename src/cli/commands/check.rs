//! The `check` command: validate configuration and probe the source.

use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::experience::aggregate;
use crate::fetch::{HttpPositionSource, PositionSource};

/// Validate configuration, probe the data source, and report counts.
///
/// Performs the same single fetch-aggregate pass as `timeline` but only
/// prints a summary, so a broken key, URL, or record surfaces without
/// rendering anything.
///
/// # Errors
///
/// Returns the same errors as the timeline pass.
pub async fn run(args: &CheckArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    tracing::info!(url = %config.source.url, "configuration valid");

    let source = HttpPositionSource::new(config.source);
    let records = source.fetch_positions().await?;
    let companies = aggregate(&records)?;
    let ongoing = companies.iter().filter(|c| c.end.is_none()).count();

    println!(
        "{} positions across {} employers ({} ongoing)",
        records.len(),
        companies.len(),
        ongoing
    );
    Ok(())
}
