//! Common test helpers shared across integration tests

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(dead_code)] // Not all helpers are used by every test file

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Helper to get the compiled binary path
pub fn get_binary_path() -> PathBuf {
    // Get the directory where cargo places test binaries
    let mut path = env::current_exe().unwrap();
    path.pop(); // Remove test executable name

    // Check if we're in a 'deps' directory (integration tests)
    if path.ends_with("deps") {
        path.pop(); // Go up to debug or release
    }

    path.push("html2src");

    // If the binary doesn't exist in debug, try building it first
    if !path.exists() {
        let build_output = Command::new("cargo")
            .args(["build", "--bin", "html2src"])
            .output()
            .expect("Failed to build binary");

        assert!(
            build_output.status.success(),
            "Failed to build html2src binary: {}",
            String::from_utf8_lossy(&build_output.stderr)
        );
    }

    path
}

/// Helper to create a temporary directory for tests
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Helper to write an HTML source file inside `dir`, returning its path
pub fn create_source(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("index.html");
    fs::write(&path, content).unwrap();
    path
}

/// Helper to write a target C++ file inside `dir`, returning its path
pub fn create_target(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("main.cpp");
    fs::write(&path, content).unwrap();
    path
}

/// A minimal target file with the anchor assignment present
pub const TARGET_WITH_ANCHOR: &str =
    "void homepage() {\n  const char *html = \"old\";\n  serve(html);\n}\n";

/// Package version for testing --version flag
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
