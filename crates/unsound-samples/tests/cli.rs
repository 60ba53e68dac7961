//! Integration test: the sample binaries' command-line contract.
//!
//! Only runs that are free of undefined behaviour are executed here:
//! `stack_overflow` with input that fits or with no input at all, and
//! `memory_leak`, whose fault is a leak rather than an invalid access.

use std::path::Path;
use std::process::{Command, Output};

use unsound_core::{SampleKind, SampleStatus, STACK_BUFFER_LEN};

fn run(bin: &str, args: &[&str]) -> Output {
    Command::new(bin)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap_or_else(|e| panic!("failed to spawn {bin}: {e}"))
}

fn run_logged(bin: &str, args: &[&str]) -> Output {
    Command::new(bin)
        .args(args)
        .env("RUST_LOG", "debug")
        .output()
        .unwrap_or_else(|e| panic!("failed to spawn {bin}: {e}"))
}

#[test]
fn stack_overflow_input_that_fits() {
    let input = "A".repeat(STACK_BUFFER_LEN - 1);
    let output = run(env!("CARGO_BIN_EXE_stack_overflow"), &[&input]);

    assert_eq!(output.status.code(), Some(SampleStatus::Ok as i32));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        format!("Input: {input}\n")
    );
    assert!(output.stderr.is_empty());
}

#[test]
fn stack_overflow_without_input_prints_usage() {
    let bin = env!("CARGO_BIN_EXE_stack_overflow");
    let output = run(bin, &[]);

    assert_eq!(
        output.status.code(),
        Some(SampleStatus::PreconditionFailed as i32)
    );
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Usage: "), "stderr: {stderr}");
    assert!(stderr.trim_end().ends_with("<input>"), "stderr: {stderr}");
}

#[test]
fn memory_leak_completes() {
    let output = run(env!("CARGO_BIN_EXE_memory_leak"), &[]);

    assert_eq!(output.status.code(), Some(SampleStatus::Ok as i32));
    assert_eq!(output.stdout, b"Buffer: Leaked Data\n");
}

#[test]
fn every_catalog_entry_has_a_binary() {
    let binaries = [
        ("double_free", env!("CARGO_BIN_EXE_double_free")),
        ("heap_overflow", env!("CARGO_BIN_EXE_heap_overflow")),
        ("stack_overflow", env!("CARGO_BIN_EXE_stack_overflow")),
        ("use_after_free", env!("CARGO_BIN_EXE_use_after_free")),
        ("use_after_return", env!("CARGO_BIN_EXE_use_after_return")),
        ("memory_leak", env!("CARGO_BIN_EXE_memory_leak")),
    ];
    assert_eq!(binaries.len(), SampleKind::ALL.len());
    for (name, path) in binaries {
        let kind = SampleKind::from_binary_name(name)
            .unwrap_or_else(|| panic!("{name} missing from catalog"));
        assert_eq!(kind.binary_name(), name);
        assert!(Path::new(path).exists(), "{path} not built");
    }
}

#[test]
fn completed_run_is_logged_at_debug() {
    let output = run_logged(env!("CARGO_BIN_EXE_memory_leak"), &[]);

    assert_eq!(output.status.code(), Some(SampleStatus::Ok as i32));
    assert_eq!(output.stdout, b"Buffer: Leaked Data\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("running memory_leak sample"), "stderr: {stderr}");
    assert!(stderr.contains("memory_leak sample completed"), "stderr: {stderr}");
}

#[test]
fn failed_run_is_logged_before_usage() {
    let output = run_logged(env!("CARGO_BIN_EXE_stack_overflow"), &[]);

    assert_eq!(
        output.status.code(),
        Some(SampleStatus::PreconditionFailed as i32)
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("stack_overflow sample stopped: Usage: "),
        "stderr: {stderr}"
    );
    assert!(!stderr.contains("sample completed"), "stderr: {stderr}");
    assert!(stderr.trim_end().ends_with("<input>"), "stderr: {stderr}");
}
