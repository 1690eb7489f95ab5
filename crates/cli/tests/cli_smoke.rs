//! CLI integration tests for the `skillgap` binary.
//!
//! Verifies end-to-end argument plumbing without a live API.

use std::process::Command;

use anyhow::{Context, Result};

#[test]
fn help_lists_the_subcommands() -> Result<()> {
    let bin_path = env!("CARGO_BIN_EXE_skillgap");
    let output = Command::new(bin_path)
        .arg("--help")
        .output()
        .context("Failed to execute skillgap --help")?;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for subcommand in ["dash", "employees", "skills", "analyze", "recommend", "health"] {
        assert!(
            stdout.contains(subcommand),
            "help should mention `{subcommand}`:\n{stdout}"
        );
    }
    Ok(())
}

#[test]
fn health_fails_cleanly_when_api_is_unreachable() -> Result<()> {
    let bin_path = env!("CARGO_BIN_EXE_skillgap");
    // Port 1 is unroutable; the command must fail with a transport error
    // rather than hang or panic.
    let output = Command::new(bin_path)
        .args(["health", "--api-base", "http://127.0.0.1:1/api"])
        .output()
        .context("Failed to execute skillgap health")?;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("request failed"),
        "stderr should carry the transport error:\n{stderr}"
    );
    Ok(())
}

#[test]
fn rejects_unknown_subcommands() -> Result<()> {
    let bin_path = env!("CARGO_BIN_EXE_skillgap");
    let output = Command::new(bin_path)
        .arg("frobnicate")
        .output()
        .context("Failed to execute skillgap frobnicate")?;

    assert!(!output.status.success());
    Ok(())
}
