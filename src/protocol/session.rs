// tpm2sh: TPM 2.0 command line tool
//
// SPDX-FileCopyrightText: 2025 Opinsys Oy
// SPDX-License-Identifier: GPL-3.0-or-later

//! `TPM2_StartAuthSession` without salt or bind.
//!
//! ```text
//! command:  header | tpmKey | bind | nonceCaller:2B | salt:2B(empty)
//!           | sessionType:u8 | symmetric=NULL | authHash=SHA256     (43 bytes)
//! response: header | sessionHandle:u32 | nonceTPM:2B               (32 bytes)
//! ```

use std::io::{Read, Write};

use crate::error::ProtocolError;
use crate::protocol::codec::{Tpm2b, TpmBuild, TpmParse};
use crate::protocol::constants::{Algorithm, CommandCode, Handle, SessionType, Tag};
use crate::protocol::message::{build_command, transmit};

/// Authenticated session nonce size.
pub const NONCE_SIZE: usize = 16;

/// A session started on the TPM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub handle: u32,
    pub nonce_tpm: [u8; NONCE_SIZE],
}

/// Builds the `TPM2_StartAuthSession` command.
///
/// # Errors
///
/// Returns a `ProtocolError::Codec` if the command cannot be marshalled.
pub fn start_auth_session_command(
    session_type: SessionType,
    nonce_caller: &[u8; NONCE_SIZE],
) -> Result<Vec<u8>, ProtocolError> {
    let nonce = Tpm2b::new(nonce_caller)?;
    Ok(build_command(
        Tag::NoSessions,
        CommandCode::StartAuthSession,
        |writer| {
            Handle::Null.value().build(writer)?;
            Handle::Null.value().build(writer)?;
            nonce.build(writer)?;
            Tpm2b::default().build(writer)?;
            session_type.value().build(writer)?;
            Algorithm::Null.value().build(writer)?;
            Algorithm::Sha256.value().build(writer)
        },
    )?)
}

/// Starts an unbound, unsalted session.
///
/// # Errors
///
/// Returns a `ProtocolError` if the exchange fails, the TPM reports an
/// error, or the response does not carry exactly a handle and a 16-byte
/// nonce.
pub fn start_auth_session<T>(
    transport: &mut T,
    session_type: SessionType,
    nonce_caller: &[u8; NONCE_SIZE],
) -> Result<AuthSession, ProtocolError>
where
    T: Read + Write,
{
    let command = start_auth_session_command(session_type, nonce_caller)?;
    let response = transmit(transport, &command)?.ensure_success()?;

    let (handle, rest) = u32::parse(&response.parameters)?;
    let (nonce, rest) = Tpm2b::parse(rest)?;
    if !rest.is_empty() {
        return Err(ProtocolError::InvalidData);
    }
    let nonce_tpm: [u8; NONCE_SIZE] = nonce
        .as_bytes()
        .try_into()
        .map_err(|_| ProtocolError::InvalidData)?;

    Ok(AuthSession { handle, nonce_tpm })
}
