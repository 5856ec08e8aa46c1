//! CLI surface: parsing and error-to-exit-code mapping.

use clap::Parser;

use tenure::cli::args::{Cli, Commands, OutputFormat};
use tenure::error::{ConfigError, DataError, ExitCode, FetchError, TenureError};

#[test]
fn parses_every_subcommand() {
    for argv in [
        vec!["tenure", "timeline"],
        vec!["tenure", "timeline", "--format", "json"],
        vec!["tenure", "serve", "--http", "0.0.0.0:9000"],
        vec!["tenure", "check", "--config", "tenure.yaml"],
        vec!["tenure", "completions", "zsh"],
    ] {
        assert!(
            Cli::try_parse_from(argv.iter().copied()).is_ok(),
            "failed to parse {argv:?}"
        );
    }
}

#[test]
fn global_flags_compose_with_subcommands() {
    let cli = Cli::try_parse_from(["tenure", "-vv", "--color", "never", "timeline"]).unwrap();
    assert_eq!(cli.verbose, 2);
    if let Commands::Timeline(args) = cli.command {
        assert_eq!(args.format, OutputFormat::Human);
    } else {
        panic!("Expected TimelineArgs");
    }
}

#[test]
fn exit_code_mapping_covers_the_taxonomy() {
    let cases: Vec<(TenureError, i32)> = vec![
        (
            ConfigError::MissingVar {
                var: "TENURE_SOURCE_URL".into(),
            }
            .into(),
            ExitCode::CONFIG_ERROR,
        ),
        (
            FetchError::Network("connection refused".into()).into(),
            ExitCode::FETCH_ERROR,
        ),
        (
            FetchError::Status { status: 500 }.into(),
            ExitCode::FETCH_ERROR,
        ),
        (
            DataError::MalformedDate {
                field: "start_date",
                value: "not-a-date".into(),
                company: "Acme".into(),
            }
            .into(),
            ExitCode::DATA_ERROR,
        ),
        (
            std::io::Error::new(std::io::ErrorKind::AddrInUse, "bind").into(),
            ExitCode::IO_ERROR,
        ),
    ];

    for (err, expected) in cases {
        assert_eq!(err.exit_code(), expected, "wrong exit code for {err}");
    }
}
