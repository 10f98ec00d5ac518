// tpm2sh: TPM 2.0 command line tool
//
// SPDX-FileCopyrightText: 2025 Opinsys Oy
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for tpm2sh using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! tpm2sh [global options] <command>
//! version
//! options
//! rc <RC> [--json]
//! list [-t] [-p] [--json]
//! ```

pub mod global;
pub mod list;
pub mod rc;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use crate::cli::list::ListArgs;
use crate::cli::rc::RcArgs;
use clap::{Parser, Subcommand};

/// TPM 2.0 command line tool.
#[derive(Debug, Parser)]
#[command(
    name = "tpm2sh",
    author,
    version,
    about = "TPM 2.0 command line tool",
    long_about = "tpm2sh Copyright (C) 2025 Opinsys Oy\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Talks to a TPM 2.0 chip through the kernel character device.\n\
                  See `tpm2sh <command> --help` for more information about a command.",
    after_help = "CONFIGURATION:\n\n\
                  tpm2sh reads `tpm2sh.toml` from the current directory if it\n\
                  exists, then every file given with --config, then TPM2SH_*\n\
                  environment variables (e.g. TPM2SH_DEVICE__PATH). --device\n\
                  overrides all of them. Use --no-default-config to skip\n\
                  `tpm2sh.toml`."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Lists all options and their effective values.
    Options,

    /// Decodes a TPM response code.
    Rc(RcArgs),

    /// Lists handles loaded in the TPM.
    List(ListArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
