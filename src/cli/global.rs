// tpm2sh: TPM 2.0 command line tool
//
// SPDX-FileCopyrightText: 2025 Opinsys Oy
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! ```text
//! --config FILE        ← Additional config files (can repeat)
//! --no-default-config  ← Skip ./tpm2sh.toml
//! --device PATH        ← device.path override
//! --log-level N        ← Console verbosity (0-6)
//! --file-log-level N   ← File verbosity (defaults to --log-level)
//! --log-file FILE      ← Enables the file log
//!
//! Precedence: --device > TPM2SH_* > --config > tpm2sh.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times; later files override earlier ones.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append, global = true)]
    pub configs: Vec<PathBuf>,

    /// Disables loading `tpm2sh.toml` from the current directory.
    #[arg(long = "no-default-config", global = true)]
    pub no_default_config: bool,

    /// TPM character device, overrides `device.path`.
    #[arg(short = 'd', long = "device", value_name = "PATH", global = true)]
    pub device: Option<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", global = true,
        value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", global = true,
        value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,
}
