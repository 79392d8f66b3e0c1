//! # html2src
//!
//! Reads an HTML page and splices it into a C++ source file as an escaped
//! C string literal, replacing whatever literal was embedded before.
//!
//! ## Usage
//!
//! - Embed with the default paths: `html2src`
//! - Explicit paths: `html2src web/index.html firmware/src/main.cpp`
//! - Machine-readable summary: `html2src --output-format json`

/// Entry point for the CLI tool.
fn main() {
    html2src::cli::run_cli();
}
