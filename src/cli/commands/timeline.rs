//! The `timeline` command: fetch, aggregate, print.

use crate::cli::args::{OutputFormat, TimelineArgs};
use crate::error::Result;
use crate::experience::{aggregate, build_views, render_text};
use crate::fetch::{HttpPositionSource, PositionSource};

/// Fetch position records and print the experience timeline.
///
/// # Errors
///
/// Returns a config error before any fetch if configuration is missing
/// or invalid, a fetch error if the source fails, or a data error for a
/// malformed record.
pub async fn run(args: &TimelineArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    let source = HttpPositionSource::new(config.source);
    print_timeline(args.format, &source).await
}

/// Renders one fetch-aggregate pass to stdout in the given format.
pub(crate) async fn print_timeline(
    format: OutputFormat,
    source: &dyn PositionSource,
) -> Result<()> {
    let records = source.fetch_positions().await?;
    let companies = aggregate(&records)?;
    tracing::info!(
        positions = records.len(),
        employers = companies.len(),
        "aggregated experience timeline"
    );

    let views = build_views(&companies);
    match format {
        OutputFormat::Human => print!("{}", render_text(&views)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&views)?),
    }
    Ok(())
}
