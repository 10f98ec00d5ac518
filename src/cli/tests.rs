// tpm2sh: TPM 2.0 command line tool
//
// SPDX-FileCopyrightText: 2025 Opinsys Oy
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::{Cli, Command};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["tpm2sh", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
    assert!(cli.global.configs.is_empty());
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "tpm2sh",
        "-l",
        "5",
        "-c",
        "a.toml",
        "--config",
        "b.toml",
        "--no-default-config",
        "list",
        "--device",
        "/dev/tpm0",
    ])
    .unwrap();
    assert_eq!(cli.global.log_level, Some(5));
    assert_eq!(
        cli.global.configs,
        vec![PathBuf::from("a.toml"), PathBuf::from("b.toml")]
    );
    assert!(cli.global.no_default_config);
    assert_eq!(cli.global.device, Some(PathBuf::from("/dev/tpm0")));
    assert!(matches!(cli.command, Some(Command::List(_))));
}

#[test]
fn test_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["tpm2sh", "-l", "7", "version"]).is_err());
}

#[test]
fn test_parse_rc() {
    let cli = Cli::try_parse_from(["tpm2sh", "rc", "0x9a2", "--json"]).unwrap();
    let Some(Command::Rc(args)) = cli.command else {
        panic!("expected rc command");
    };
    assert_eq!(args.rc, 0x9A2);
    assert!(args.json);
}

#[test]
fn test_parse_rc_rejects_garbage() {
    assert!(Cli::try_parse_from(["tpm2sh", "rc", "banana"]).is_err());
    assert!(Cli::try_parse_from(["tpm2sh", "rc"]).is_err());
}

#[test]
fn test_parse_list_flags() {
    let cli = Cli::try_parse_from(["tpm2sh", "list", "-tp"]).unwrap();
    let Some(Command::List(args)) = cli.command else {
        panic!("expected list command");
    };
    assert!(args.transient);
    assert!(args.persistent);
    assert!(!args.json);
}

fn parse_rc(value: &str) -> Result<u32, clap::Error> {
    let cli = Cli::try_parse_from(["tpm2sh", "rc", value])?;
    match cli.command {
        Some(Command::Rc(args)) => Ok(args.rc),
        other => panic!("expected rc command, got {other:?}"),
    }
}

#[test]
fn test_parse_rc_decimal_or_hex() {
    assert_eq!(parse_rc("256").unwrap(), 256);
    assert_eq!(parse_rc("0x100").unwrap(), 256);
    assert_eq!(parse_rc("0xffffffff").unwrap(), u32::MAX);
    assert!(parse_rc("0x").is_err());
    assert!(parse_rc("0x100000000").is_err());
    assert!(parse_rc("4294967296").is_err());
}

#[test]
fn test_no_command() {
    let cli = Cli::try_parse_from(["tpm2sh"]).unwrap();
    assert!(cli.command.is_none());
}
