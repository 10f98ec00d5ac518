// tpm2sh: TPM 2.0 command line tool
//
// SPDX-FileCopyrightText: 2025 Opinsys Oy
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration sections.
//!
//! ```text
//! [device]
//! path = "/dev/tpmrm0"
//! max_handles = 16
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;

/// Default TPM device: the kernel resource manager.
pub const DEFAULT_DEVICE_PATH: &str = "/dev/tpmrm0";

/// Default number of handles requested per `TPM2_GetCapability` call.
pub const DEFAULT_MAX_HANDLES: u32 = 16;

/// Upper bound accepted for `device.max_handles`.
pub const MAX_HANDLES_LIMIT: u32 = 256;

/// TPM device settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeviceConfig {
    /// Character device the commands are sent to.
    pub path: PathBuf,
    /// Handles requested per capability query.
    pub max_handles: u32,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DEVICE_PATH),
            max_handles: DEFAULT_MAX_HANDLES,
        }
    }
}

impl DeviceConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the path is empty or
    /// `max_handles` is outside `1..=256`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                section: "device".to_string(),
                key: "path".to_string(),
                message: "path must not be empty".to_string(),
            });
        }
        if !(1..=MAX_HANDLES_LIMIT).contains(&self.max_handles) {
            return Err(ConfigError::InvalidValue {
                section: "device".to_string(),
                key: "max_handles".to_string(),
                message: format!(
                    "expected 1-{MAX_HANDLES_LIMIT}, got {}",
                    self.max_handles
                ),
            });
        }
        Ok(())
    }
}
