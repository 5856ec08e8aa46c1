//! CLI argument definitions.
//!
//! All Clap derive structs for `tenure` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

// ============================================================================
// Root CLI
// ============================================================================

/// Work-history timeline for a personal site.
#[derive(Parser, Debug)]
#[command(name = "tenure", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "TENURE_COLOR")]
    pub color: ColorChoice,
}

// ============================================================================
// Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch position records and print the experience timeline.
    Timeline(TimelineArgs),

    /// Serve the timeline as a JSON endpoint.
    Serve(ServeArgs),

    /// Validate configuration and probe the data source.
    Check(CheckArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),
}

/// Arguments for `timeline`.
#[derive(Args, Debug)]
pub struct TimelineArgs {
    /// Path to YAML configuration file; without it the TENURE_SOURCE_*
    /// variables are used directly.
    #[arg(short, long, env = "TENURE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `serve`.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Path to YAML configuration file; without it the TENURE_SOURCE_*
    /// variables are used directly.
    #[arg(short, long, env = "TENURE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Bind address as `[host:]port`; a bare port binds to loopback.
    #[arg(long, default_value = "8080", env = "TENURE_HTTP")]
    pub http: String,
}

/// Arguments for `check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to YAML configuration file; without it the TENURE_SOURCE_*
    /// variables are used directly.
    #[arg(short, long, env = "TENURE_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Human,
    /// JSON view model.
    Json,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================
