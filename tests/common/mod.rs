// tests/common/mod.rs
// Shared test utilities for integration tests
#![allow(dead_code)]

use std::process::Command;

/// Run the pairdist binary with the given arguments.
/// Returns (stdout, stderr, exit_code).
pub fn run_pairdist(args: &[&str]) -> (String, String, i32) {
    // Use the built binary directly instead of cargo run to avoid compilation output
    let binary_path = if cfg!(debug_assertions) {
        "./target/debug/pairdist"
    } else {
        "./target/release/pairdist"
    };

    let output = Command::new(binary_path)
        .args(args)
        .output()
        .expect("Failed to run pairdist");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.code().unwrap_or(-1),
    )
}

/// Parse an output file into sorted lines for order-insensitive comparison.
pub fn sorted_lines(content: &str) -> Vec<String> {
    let mut lines: Vec<String> = content.lines().map(str::to_string).collect();
    lines.sort();
    lines
}
