// tpm2sh: TPM 2.0 command line tool
//
// SPDX-FileCopyrightText: 2025 Opinsys Oy
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   config (options), list, rc
//! ```
//!
//! Each handler renders its output through a `format_*` function so the
//! text can be checked without a terminal.

pub mod config;
pub mod list;
pub mod rc;
