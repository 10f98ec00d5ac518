// tpm2sh: TPM 2.0 command line tool
//
// SPDX-FileCopyrightText: 2025 Opinsys Oy
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.

use std::path::PathBuf;

use tpm2sh::config::Config;
use tpm2sh::config::loader::ConfigLoader;

#[test]
fn config_files_apply_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.toml");
    let second = dir.path().join("second.toml");
    std::fs::write(&first, "[device]\npath = \"/dev/tpm0\"\nmax_handles = 4\n").unwrap();
    std::fs::write(&second, "[device]\nmax_handles = 128\n").unwrap();

    let loader = ConfigLoader::new()
        .add_toml_file(&first)
        .add_toml_file(&second);
    assert_eq!(loader.sources().len(), 2);

    let config = loader.build().unwrap();
    assert_eq!(config.device.path, PathBuf::from("/dev/tpm0"));
    assert_eq!(config.device.max_handles, 128);
}

#[test]
fn config_optional_file_present() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tpm2sh.toml");
    std::fs::write(&path, "[device]\npath = \"/dev/tpm1\"\n").unwrap();

    let config = ConfigLoader::new()
        .add_toml_file_optional(&path)
        .build()
        .unwrap();
    assert_eq!(config.device.path, PathBuf::from("/dev/tpm1"));
}

#[test]
fn config_invalid_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "[device\npath = ").unwrap();
    assert!(Config::from_file(&path).is_err());
}

#[test]
fn config_wrong_type() {
    assert!(Config::parse("[device]\nmax_handles = \"many\"\n").is_err());
}

#[test]
fn config_roundtrips_through_toml_shape() {
    let config = Config::parse("[device]\npath = \"/dev/tpm0\"\n").unwrap();
    let json = serde_json::to_value(&config).unwrap();
    insta::assert_snapshot!(json.to_string(), @r#"{"device":{"max_handles":16,"path":"/dev/tpm0"}}"#);
}
