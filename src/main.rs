//! Binary entry point for biblio-backup.
//!
//! Converts a library catalog CSV into a JSON backup and prints a one-line
//! summary. Any failure is reported as a single `Error: ...` line.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print_stderr in main binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]
// Allow multiple crate versions from transitive dependencies
#![allow(clippy::multiple_crate_versions)]

use biblio_backup::io::{ConvertOptions, ConvertService, DEFAULT_SOURCE, default_target_for};
use biblio_backup::observability::{self, LogFormat, LoggingConfig};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Convert a book-library CSV export into a JSON backup document.
#[derive(Parser)]
#[command(name = "biblio-backup")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// CSV catalog to read.
    #[arg(short, long, env = "BIBLIO_BACKUP_SOURCE", default_value = DEFAULT_SOURCE)]
    source: PathBuf,

    /// JSON backup to write (default: bibliogenius_backup.json next to the source).
    #[arg(short, long, env = "BIBLIO_BACKUP_TARGET")]
    target: Option<PathBuf>,

    /// Read the catalog and report the count without writing the backup.
    #[arg(long)]
    dry_run: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    /// Log format: pretty or json.
    #[arg(long, env = "BIBLIO_BACKUP_LOG_FORMAT", default_value = "pretty")]
    log_format: LogFormat,
}

impl Cli {
    fn convert_options(&self) -> ConvertOptions {
        let target = self
            .target
            .clone()
            .unwrap_or_else(|| default_target_for(&self.source));

        ConvertOptions::new(self.source.clone(), target).with_dry_run(self.dry_run)
    }
}

/// Main entry point.
fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = observability::init(LoggingConfig::from_env(cli.log_format, cli.verbose)) {
        eprintln!("Failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    match ConvertService::new().convert(&cli.convert_options()) {
        Ok(result) => {
            println!("{}", result.summary());
            ExitCode::SUCCESS
        },
        Err(e) => {
            tracing::debug!(error = ?e, "conversion failed");
            println!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}
