//! Tests for the `japy-language-server` binary's command line

use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_japy-language-server"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run japy-language-server")
}

#[test]
fn test_validate_passes_on_shipped_tables() {
    let output = run(&["--validate", "--no-color", "--log-level", "info"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr);
    assert!(stderr.contains("All validations passed"), "stderr: {}", stderr);
    assert!(output.stdout.is_empty(), "stdout is reserved for the LSP transport");
}

#[test]
fn test_validate_accepts_stdio_flag() {
    let output = run(&["--stdio", "--validate", "--no-color", "--log-level", "warn"]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_unknown_flag_is_rejected() {
    let output = run(&["--validate", "--no-such-flag"]);
    assert_eq!(output.status.code(), Some(2));
}
