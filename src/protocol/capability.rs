// tpm2sh: TPM 2.0 command line tool
//
// SPDX-FileCopyrightText: 2025 Opinsys Oy
// SPDX-License-Identifier: GPL-3.0-or-later

//! `TPM2_GetCapability` for `TPM_CAP_HANDLES`.
//!
//! ```text
//! command:  header | capability:u32 | property:u32 | count:u32      (22 bytes)
//! response: header | moreData:u8 | capability:u32 | count:u32 | handle:u32 * count
//! ```

use std::io::{Read, Write};

use tracing::debug;

use crate::error::ProtocolError;
use crate::protocol::codec::{TpmBuild, TpmParse};
use crate::protocol::constants::{Capability, CommandCode, Tag};
use crate::protocol::message::{build_command, transmit};

/// Bytes before the handle array in the response parameters.
const HANDLE_LIST_HEADER: usize = 9;

/// One page of handles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandleList {
    /// The TPM has more handles past the last one returned.
    pub more_data: bool,
    pub handles: Vec<u32>,
}

impl HandleList {
    /// Parses the response parameters of a handle query for at most
    /// `property_count` handles.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::InvalidData` on any length, count or
    /// capability mismatch.
    pub fn parse(parameters: &[u8], property_count: u32) -> Result<Self, ProtocolError> {
        if parameters.len() < HANDLE_LIST_HEADER
            || (parameters.len() - HANDLE_LIST_HEADER) % 4 != 0
        {
            return Err(ProtocolError::InvalidData);
        }

        let (more_data, rest) = u8::parse(parameters)?;
        let (capability, rest) = u32::parse(rest)?;
        let (count, mut rest) = u32::parse(rest)?;

        if capability != Capability::Handles.value() {
            return Err(ProtocolError::InvalidData);
        }
        if usize::try_from(count).ok() != Some(rest.len() / 4) {
            return Err(ProtocolError::InvalidData);
        }
        if count > property_count {
            return Err(ProtocolError::InvalidData);
        }

        let mut handles = Vec::with_capacity(rest.len() / 4);
        while !rest.is_empty() {
            let (handle, tail) = u32::parse(rest)?;
            handles.push(handle);
            rest = tail;
        }

        Ok(Self {
            more_data: more_data != 0,
            handles,
        })
    }
}

/// Builds `TPM2_GetCapability(TPM_CAP_HANDLES, first, count)`.
///
/// # Errors
///
/// Returns a `ProtocolError::Codec` if the command cannot be marshalled.
pub fn get_handles_command(first: u32, count: u32) -> Result<Vec<u8>, ProtocolError> {
    Ok(build_command(
        Tag::NoSessions,
        CommandCode::GetCapability,
        |writer| {
            Capability::Handles.value().build(writer)?;
            first.build(writer)?;
            count.build(writer)
        },
    )?)
}

/// Queries up to `count` handles starting at `first`.
///
/// # Errors
///
/// Returns a `ProtocolError` if the exchange fails, the TPM reports an
/// error, or the response is malformed.
pub fn get_handles<T>(transport: &mut T, first: u32, count: u32) -> Result<HandleList, ProtocolError>
where
    T: Read + Write,
{
    let command = get_handles_command(first, count)?;
    let response = transmit(transport, &command)?.ensure_success()?;
    HandleList::parse(&response.parameters, count)
}

/// Queries every handle from `first` onwards, `per_request` at a time.
///
/// # Errors
///
/// Returns a `ProtocolError` from the first failing page, or
/// `ProtocolError::InvalidData` if a page announcing more data does not move
/// past the property it was queried from.
pub fn list_handles<T>(
    transport: &mut T,
    first: u32,
    per_request: u32,
) -> Result<Vec<u32>, ProtocolError>
where
    T: Read + Write,
{
    let mut handles = Vec::new();
    let mut property = first;
    loop {
        let page = get_handles(transport, property, per_request)?;
        debug!(
            count = page.handles.len(),
            more_data = page.more_data,
            "handle page from {property:#010x}"
        );
        let next = page.handles.last().and_then(|last| last.checked_add(1));
        handles.extend(page.handles);
        match next {
            Some(next) if page.more_data => {
                if next <= property {
                    return Err(ProtocolError::InvalidData);
                }
                property = next;
            }
            _ => break,
        }
    }
    Ok(handles)
}
