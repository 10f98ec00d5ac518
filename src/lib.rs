// tpm2sh: TPM 2.0 command line tool
//
// SPDX-FileCopyrightText: 2025 Opinsys Oy
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |             options / rc / list
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |  tpm2sh.toml, TPM2SH_*    |
//!              '-------------+-------------'
//!                            |
//!                            v
//!                 device (char dev, Read + Write)
//!                            |
//!                            v
//!   +-----------------------------------------------+
//!   |  protocol  constants, codec, message,         |
//!   |            capability, session                |
//!   |  stack     encoded object stack               |
//!   +-----------------------------------------------+
//!   |  foundation   error, logging                  |
//!   +-----------------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod device;
pub mod error;
pub mod logging;
pub mod protocol;
pub mod stack;

#[cfg(test)]
mod test_utils;
