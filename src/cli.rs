//! CLI module containing the main entry point logic.
//!
//! This module is separated from main.rs so the embed pipeline stays usable
//! as a library.

use crate::{executor, report::EmbedReport};
use clap::Parser as ClapParser;
use std::path::PathBuf;

const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI arguments for the html2src tool.
#[derive(ClapParser)]
#[command(name = "html2src")]
#[command(version = PKG_VERSION)]
#[command(
    about = "Embed an HTML page into a C++ source file as a string literal",
    long_about = None
)]
struct Cli {
    /// HTML file to embed
    #[arg(value_name = "SOURCE", default_value = "index.html")]
    source: PathBuf,

    /// C++ source file containing the literal to replace
    #[arg(value_name = "TARGET", default_value = "src/main.cpp")]
    target: PathBuf,

    /// Output format for the embed summary (stream, json)
    #[arg(long, value_name = "FORMAT", default_value = "stream")]
    output_format: OutputFormatArg,
}

/// Output format for the embed summary
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormatArg {
    /// Print nothing on success (default)
    Stream,
    /// Print the embed report as JSON
    Json,
}

impl OutputFormatArg {
    /// Format the report according to this format
    /// Returns None for Stream mode (no summary output)
    #[must_use]
    pub fn format_report(self, report: &EmbedReport) -> Option<String> {
        match self {
            Self::Stream => None,
            Self::Json => Some(report.to_json()),
        }
    }
}

/// Main CLI logic: parse arguments, run the embed, report the outcome.
pub fn run_cli() {
    let cli = Cli::parse();

    match executor::embed_file(&cli.source, &cli.target) {
        Ok(report) => {
            if let Some(summary) = cli.output_format.format_report(&report) {
                println!("{summary}");
            }
        }
        Err(e) => crate::fatal_error(&e.to_string()),
    }
}
