// tpm2sh: TPM 2.0 command line tool
//
// SPDX-FileCopyrightText: 2025 Opinsys Oy
// SPDX-License-Identifier: GPL-3.0-or-later

//! `list` command: enumerates transient and persistent handles.
//!
//! ```text
//! open device --> -t? GetCapability(HANDLES, 0x80000000..) paged
//!             --> -p? GetCapability(HANDLES, 0x81000000..) paged
//!             --> text (one per line) | json
//! ```

use std::io::{Read, Write};

use anyhow::Context;
use serde::Serialize;
use tracing::{debug, warn};

use crate::cli::list::ListArgs;
use crate::config::Config;
use crate::device::Device;
use crate::error::{Result, Tpm2shError};
use crate::protocol::capability::list_handles;
use crate::protocol::{Handle, HandleType};

/// Handles found per requested range; `None` when the range was not asked for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandleListing {
    pub transient: Option<Vec<u32>>,
    pub persistent: Option<Vec<u32>>,
}

#[derive(Serialize)]
struct JsonListing {
    #[serde(skip_serializing_if = "Option::is_none")]
    transient: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    persistent: Option<Vec<String>>,
}

fn hex_handles(handles: &[u32]) -> Vec<String> {
    handles.iter().map(|h| format!("{h:#010x}")).collect()
}

fn query_range<T>(transport: &mut T, first: Handle, max_handles: u32) -> Result<Vec<u32>>
where
    T: Read + Write,
{
    let handles = list_handles(transport, first.value(), max_handles)
        .map_err(Tpm2shError::from)
        .with_context(|| format!("failed to list handles from {first}"))?;
    let expected = HandleType::of(first.value());
    for handle in &handles {
        if HandleType::of(*handle) != expected {
            warn!("handle {handle:#010x} is outside the {first} range");
        }
    }
    Ok(handles)
}

/// Queries the ranges selected in `args`, transient first.
///
/// # Errors
///
/// Returns an error from the first failing capability query.
pub fn collect_handles<T>(
    transport: &mut T,
    args: &ListArgs,
    max_handles: u32,
) -> Result<HandleListing>
where
    T: Read + Write,
{
    let mut listing = HandleListing::default();
    if args.transient {
        listing.transient = Some(query_range(transport, Handle::Transient, max_handles)?);
    }
    if args.persistent {
        listing.persistent = Some(query_range(transport, Handle::Persistent, max_handles)?);
    }
    Ok(listing)
}

/// Renders a listing as one handle per line or a single JSON object.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_listing(listing: &HandleListing, json: bool) -> Result<Vec<String>> {
    if json {
        let report = JsonListing {
            transient: listing.transient.as_deref().map(hex_handles),
            persistent: listing.persistent.as_deref().map(hex_handles),
        };
        return Ok(vec![serde_json::to_string(&report)?]);
    }
    Ok(listing
        .transient
        .iter()
        .chain(listing.persistent.iter())
        .flat_map(|handles| hex_handles(handles))
        .collect())
}

/// Main handler for the `list` command.
///
/// # Errors
///
/// Returns an error if the device cannot be opened or a query fails.
pub fn run_list_command(args: &ListArgs, config: &Config) -> Result<()> {
    let mut device = Device::open(&config.device.path).map_err(Tpm2shError::from)?;
    debug!(path = %device.path().display(), "listing handles");
    let listing = collect_handles(&mut device, args, config.device.max_handles)?;
    for line in format_listing(&listing, args.json)? {
        println!("{line}");
    }
    Ok(())
}
