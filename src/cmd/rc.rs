// tpm2sh: TPM 2.0 command line tool
//
// SPDX-FileCopyrightText: 2025 Opinsys Oy
// SPDX-License-Identifier: GPL-3.0-or-later

//! `rc` command: names a raw response code.
//!
//! ```text
//! 0x000009a2 --> mask by format --> TPM_RC_* name
//!            \-> FMT1? --> parameter/handle/session N
//! ```

use serde::Serialize;

use crate::cli::rc::RcArgs;
use crate::error::Result;
use crate::protocol::{RcLocation, ResponseCode};

/// Decoded response code, as printed by `rc --json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RcReport {
    pub name: &'static str,
    pub value: String,
    pub location: Option<String>,
}

impl RcReport {
    #[must_use]
    pub fn new(raw: u32) -> Self {
        Self {
            name: ResponseCode::from(raw).name(),
            value: format!("{raw:#010x}"),
            location: RcLocation::from_raw(raw).map(|location| location.to_string()),
        }
    }
}

/// Renders a response code as text lines or a single JSON object.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_rc(raw: u32, json: bool) -> Result<Vec<String>> {
    let report = RcReport::new(raw);
    if json {
        return Ok(vec![serde_json::to_string(&report)?]);
    }
    let mut lines = vec![format!("{} {}", report.name, report.value)];
    if let Some(location) = report.location {
        lines.push(format!("location: {location}"));
    }
    Ok(lines)
}

/// Main handler for the `rc` command.
///
/// # Errors
///
/// Returns an error if the output cannot be rendered.
pub fn run_rc_command(args: &RcArgs) -> Result<()> {
    for line in format_rc(args.rc, args.json)? {
        println!("{line}");
    }
    Ok(())
}
