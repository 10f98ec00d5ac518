// tpm2sh: TPM 2.0 command line tool
//
// SPDX-FileCopyrightText: 2025 Opinsys Oy
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the CLI: argument parsing and the built binary.

use std::path::Path;
use std::process::{Command, Output};

use clap::Parser;
use tpm2sh::cli::{Cli, Command as CliCommand};

fn tpm2sh(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tpm2sh"))
        .args(args)
        .current_dir(dir)
        .env_remove("TPM2SH_DEVICE__PATH")
        .env_remove("TPM2SH_DEVICE__MAX_HANDLES")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn cli_global_options_after_command() {
    let cli = Cli::try_parse_from(["tpm2sh", "options", "-d", "/dev/tpm0", "-l", "0"]).unwrap();
    assert!(matches!(cli.command, Some(CliCommand::Options)));
    assert_eq!(cli.global.log_level, Some(0));
}

#[test]
fn cli_rc_decimal() {
    let cli = Cli::try_parse_from(["tpm2sh", "rc", "2466"]).unwrap();
    let Some(CliCommand::Rc(args)) = cli.command else {
        panic!("expected rc command");
    };
    assert_eq!(args.rc, 0x9A2);
}

// =============================================================================
// Binary
// =============================================================================

#[test]
fn bin_version() {
    let dir = tempfile::tempdir().unwrap();
    let output = tpm2sh(dir.path(), &["version"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), env!("CARGO_PKG_VERSION"));
}

#[test]
fn bin_rc_text() {
    let dir = tempfile::tempdir().unwrap();
    let output = tpm2sh(dir.path(), &["rc", "0x1c4"]);
    assert!(output.status.success());
    insta::assert_snapshot!(stdout(&output), @r"
    TPM_RC_VALUE 0x000001c4
    location: parameter 1
    ");
}

#[test]
fn bin_rc_json() {
    let dir = tempfile::tempdir().unwrap();
    let output = tpm2sh(dir.path(), &["rc", "--json", "0x0"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["name"], "TPM_RC_SUCCESS");
    assert_eq!(value["value"], "0x00000000");
    assert!(value["location"].is_null());
}

#[test]
fn bin_no_command_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = tpm2sh(dir.path(), &[]);
    assert!(!output.status.success());
    assert_eq!(
        stderr(&output).trim(),
        "Error: No command specified. Use --help for usage information."
    );
}

#[test]
fn bin_options_layering() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("tpm2sh.toml"),
        "[device]\npath = \"/dev/tpm0\"\nmax_handles = 8\n",
    )
    .unwrap();

    let output = tpm2sh(dir.path(), &["options"]);
    assert!(output.status.success());
    insta::assert_snapshot!(stdout(&output), @r"
    device.max_handles = 8
    device.path        = /dev/tpm0
    ");

    let output = tpm2sh(dir.path(), &["options", "--no-default-config"]);
    assert!(stdout(&output).contains("device.path        = /dev/tpmrm0"));

    let output = Command::new(env!("CARGO_BIN_EXE_tpm2sh"))
        .args(["options", "--device", "/dev/override"])
        .current_dir(dir.path())
        .env("TPM2SH_DEVICE__PATH", "/dev/env")
        .env("TPM2SH_DEVICE__MAX_HANDLES", "64")
        .output()
        .unwrap();
    assert!(output.status.success());
    insta::assert_snapshot!(stdout(&output), @r"
    device.max_handles = 64
    device.path        = /dev/override
    ");
}

#[test]
fn bin_invalid_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("bad.toml");
    std::fs::write(&config, "[device]\nmax_handles = 0\n").unwrap();
    let output = tpm2sh(
        dir.path(),
        &["options", "--config", config.to_str().unwrap()],
    );
    assert!(!output.status.success());
    let err = stderr(&output);
    insta::assert_snapshot!(err.trim(), @"Error: failed to load config: config error: invalid value for 'max_handles' in section '[device]': expected 1-256, got 0");
}

#[test]
fn bin_list_missing_device() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("tpmrm0");
    let output = tpm2sh(
        dir.path(),
        &["list", "-t", "--device", missing.to_str().unwrap()],
    );
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Error: device error: device not found: "));
}

#[cfg(target_os = "linux")]
#[test]
fn bin_list_without_ranges_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let output = tpm2sh(dir.path(), &["list", "--device", "/dev/null"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[cfg(target_os = "linux")]
#[test]
fn bin_list_silent_device() {
    let dir = tempfile::tempdir().unwrap();
    let output = tpm2sh(dir.path(), &["list", "-t", "--device", "/dev/null"]);
    assert!(!output.status.success());
    insta::assert_snapshot!(stderr(&output).trim(), @"Error: failed to list handles from TRANSIENT_FIRST: protocol error: invalid data received from the TPM");
}
