// tpm2sh: TPM 2.0 command line tool
//
// SPDX-FileCopyrightText: 2025 Opinsys Oy
// SPDX-License-Identifier: GPL-3.0-or-later

//! `list` command arguments.

use clap::Args;

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Lists transient object handles.
    #[arg(short = 't', long)]
    pub transient: bool,

    /// Lists persistent object handles.
    #[arg(short = 'p', long)]
    pub persistent: bool,

    /// Print a JSON object instead of one handle per line.
    #[arg(long)]
    pub json: bool,
}
