// tpm2sh: TPM 2.0 command line tool
//
// SPDX-FileCopyrightText: 2025 Opinsys Oy
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for tpm2sh.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. ./tpm2sh.toml (skipped with --no-default-config)
//! 3. --config FILE (in order given)
//! 4. TPM2SH_* env vars
//! 5. CLI overrides (--device)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! TPM2SH_DEVICE__PATH=/dev/tpm0     → device.path = "/dev/tpm0"
//! TPM2SH_DEVICE__MAX_HANDLES=64     → device.max_handles = 64
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{Result, Tpm2shResult};

use loader::ConfigLoader;
use types::DeviceConfig;

/// Name of the configuration file picked up from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "tpm2sh.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "TPM2SH";

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// TPM device options.
    pub device: DeviceConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tpm2sh::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("tpm2sh.toml")
    ///     .with_env_prefix("TPM2SH")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// # Errors
    ///
    /// Returns `Tpm2shError::Config` for the first invalid section.
    pub fn validate(&self) -> Tpm2shResult<()> {
        self.device.validate()?;
        Ok(())
    }

    /// Format configuration options for display, sorted by key and aligned
    /// on `=`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        options.insert("device.path", self.device.path.display().to_string());
        options.insert("device.max_handles", self.device.max_handles.to_string());

        let max_key_len = options.keys().map(|k| k.len()).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
