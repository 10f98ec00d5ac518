// tpm2sh: TPM 2.0 command line tool
//
// SPDX-FileCopyrightText: 2025 Opinsys Oy
// SPDX-License-Identifier: GPL-3.0-or-later

//! `rc` command arguments.

use clap::Args;
use clap_num::maybe_hex;

/// Arguments for the `rc` command.
#[derive(Debug, Clone, Args)]
pub struct RcArgs {
    /// Response code, decimal or 0x-prefixed hex.
    #[arg(value_name = "RC", value_parser = maybe_hex::<u32>)]
    pub rc: u32,

    /// Print a JSON object instead of text.
    #[arg(long)]
    pub json: bool,
}
