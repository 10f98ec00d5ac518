// tpm2sh: TPM 2.0 command line tool
//
// SPDX-FileCopyrightText: 2025 Opinsys Oy
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command and response framing.
//!
//! ```text
//! command:  tag:u16 | size:u32 | code:u32 | handles | parameters
//! response: tag:u16 | size:u32 | rc:u32   | parameters
//! ```

use std::io::{Read, Write};

use tracing::trace;

use crate::error::{ProtocolError, TpmErrorKind, TpmResult};
use crate::logging::WIRE_TARGET;
use crate::protocol::codec::{
    TPM_HEADER_SIZE, TPM_MAX_COMMAND_SIZE, TpmBuild, TpmParse, TpmWriter,
};
use crate::protocol::constants::{CommandCode, ResponseCode, Tag};

/// Header of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandHeader {
    pub tag: Tag,
    pub size: u32,
    pub code: CommandCode,
}

impl TpmBuild for CommandHeader {
    fn build(&self, writer: &mut TpmWriter<'_>) -> TpmResult<()> {
        self.tag.value().build(writer)?;
        self.size.build(writer)?;
        self.code.value().build(writer)
    }
}

/// Header of a response, with the fields kept raw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseHeader {
    pub tag: u16,
    pub size: u32,
    pub rc: u32,
}

impl<'a> TpmParse<'a> for ResponseHeader {
    fn parse(buf: &'a [u8]) -> TpmResult<(Self, &'a [u8])> {
        let (tag, rest) = u16::parse(buf)?;
        let (size, rest) = u32::parse(rest)?;
        let (rc, rest) = u32::parse(rest)?;
        Ok((Self { tag, size, rc }, rest))
    }
}

/// Builds a command: the header, then whatever `body` writes, with the size
/// field set to the final length.
///
/// # Errors
///
/// Returns a `TpmErrorKind` if the command exceeds `TPM_MAX_COMMAND_SIZE`.
pub fn build_command<F>(tag: Tag, code: CommandCode, body: F) -> TpmResult<Vec<u8>>
where
    F: FnOnce(&mut TpmWriter<'_>) -> TpmResult<()>,
{
    let mut buffer = [0u8; TPM_MAX_COMMAND_SIZE];
    let len = {
        let mut writer = TpmWriter::new(&mut buffer);
        CommandHeader { tag, size: 0, code }.build(&mut writer)?;
        body(&mut writer)?;
        writer.len()
    };
    let size = u32::try_from(len).map_err(|_| TpmErrorKind::ValueTooLarge)?;
    buffer[2..6].copy_from_slice(&size.to_be_bytes());
    Ok(buffer[..len].to_vec())
}

/// A response read back from the TPM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// `None` for tags outside the `TPM_ST` table.
    pub tag: Option<Tag>,
    pub size: u32,
    pub rc: ResponseCode,
    /// Response code as received, including format-one index bits.
    pub raw_rc: u32,
    pub parameters: Vec<u8>,
}

impl Response {
    /// Parses a complete response buffer.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::InvalidData` if the buffer is shorter than a
    /// header, longer than `TPM_MAX_COMMAND_SIZE`, or its length disagrees
    /// with the header size.
    pub fn parse(buf: &[u8]) -> Result<Self, ProtocolError> {
        if buf.len() < TPM_HEADER_SIZE || buf.len() > TPM_MAX_COMMAND_SIZE {
            return Err(ProtocolError::InvalidData);
        }
        let (header, parameters) =
            ResponseHeader::parse(buf).map_err(|_| ProtocolError::InvalidData)?;
        if usize::try_from(header.size).ok() != Some(buf.len()) {
            return Err(ProtocolError::InvalidData);
        }
        Ok(Self {
            tag: Tag::from_repr(header.tag),
            size: header.size,
            rc: ResponseCode::from(header.rc),
            raw_rc: header.rc,
            parameters: parameters.to_vec(),
        })
    }

    /// # Errors
    ///
    /// Returns `ProtocolError::Response` unless the TPM reported success.
    pub fn ensure_success(self) -> Result<Self, ProtocolError> {
        if self.raw_rc == 0 {
            Ok(self)
        } else {
            Err(ProtocolError::Response {
                rc: self.rc,
                raw: self.raw_rc,
            })
        }
    }
}

/// Sends a command and reads the response until end of stream, at most one
/// byte past `TPM_MAX_COMMAND_SIZE`.
///
/// # Errors
///
/// Returns `InvalidWrite`/`InvalidRead` on I/O failure and `InvalidData` if
/// the response is malformed.
pub fn transmit<T>(transport: &mut T, command: &[u8]) -> Result<Response, ProtocolError>
where
    T: Read + Write,
{
    trace!(target: WIRE_TARGET, command = %hex::encode(command), "tpm command");
    transport
        .write_all(command)
        .map_err(ProtocolError::InvalidWrite)?;

    let mut buf = Vec::new();
    // One byte past the limit is enough for `parse` to reject the response.
    Read::by_ref(transport)
        .take(TPM_MAX_COMMAND_SIZE as u64 + 1)
        .read_to_end(&mut buf)
        .map_err(ProtocolError::InvalidRead)?;
    trace!(target: WIRE_TARGET, response = %hex::encode(&buf), "tpm response");

    Response::parse(&buf)
}
