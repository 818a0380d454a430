//! E2E tests for the exit example
//! Checks the status a parent process observes

use std::process::Command;

const CLI_BINARY: &str = env!("CARGO_BIN_EXE_groundup");

fn run_exit(args: &[&str]) -> std::process::Output {
    Command::new(CLI_BINARY)
        .arg("exit")
        .args(args)
        .output()
        .unwrap_or_else(|_| panic!("Failed to execute {CLI_BINARY}"))
}

#[test]
fn test_exit_default_status() {
    let output = run_exit(&[]);

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
}

#[test]
fn test_exit_custom_status() {
    let output = run_exit(&["--status", "7"]);
    assert_eq!(output.status.code(), Some(7));
}

#[test]
fn test_exit_short_flag() {
    let output = run_exit(&["-s", "42"]);
    assert_eq!(output.status.code(), Some(42));
}

#[cfg(unix)]
#[test]
fn test_exit_status_wraps_to_byte() {
    let output = run_exit(&["--status", "256"]);
    assert_eq!(output.status.code(), Some(0));

    let output = run_exit(&["--status", "-1"]);
    assert_eq!(output.status.code(), Some(255));
}

#[test]
fn test_exit_rejects_non_numeric_status() {
    let output = run_exit(&["--status", "abc"]);

    assert!(!output.status.success());
    assert!(!output.stderr.is_empty());
}
