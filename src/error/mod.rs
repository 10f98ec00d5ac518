// tpm2sh: TPM 2.0 command line tool
//
// SPDX-FileCopyrightText: 2025 Opinsys Oy
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!          Tpm2shError (~24 bytes)
//!                 |
//!   +--------+----+----+--------+
//!   v        v         v        v
//! Protocol Device   Config    Other
//!   Box     Box      Box     Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Protocol  InvalidData, InvalidRead, InvalidWrite, Response, Codec
//!   Device    NotFound, Metadata, NotCharDevice, Canonicalize, Open
//!   Config    InvalidValue
//!   TpmErrorKind (codec)  Boundary, TrailingData, ValueTooLarge
//! ```

use thiserror::Error;

use crate::protocol::ResponseCode;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`Tpm2shError`].
pub type Tpm2shResult<T> = std::result::Result<T, Tpm2shError>;

/// Result type of the marshalling layer.
pub type TpmResult<T> = std::result::Result<T, TpmErrorKind>;

/// Top-level application error type.
///
/// The boxed error is rendered inline and not exposed as the source, so an
/// `anyhow` chain prints each message once.
#[derive(Debug, Error)]
pub enum Tpm2shError {
    /// TPM command/response exchange failed.
    #[error("protocol error: {0}")]
    Protocol(Box<ProtocolError>),

    /// TPM device could not be used.
    #[error("device error: {0}")]
    Device(Box<DeviceError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(Box<ConfigError>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for Tpm2shError {
                fn from(err: $error) -> Self {
                    Tpm2shError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ProtocolError => Protocol,
    DeviceError => Device,
    ConfigError => Config,
}

// --- Codec Errors ---

/// Marshalling errors.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TpmErrorKind {
    /// Read or write past the end of a buffer.
    #[error("buffer boundary exceeded")]
    Boundary,

    /// Bytes left over after a complete structure.
    #[error("trailing data after structure")]
    TrailingData,

    /// A length does not fit into its size field.
    #[error("value too large for its size field")]
    ValueTooLarge,
}

// --- Protocol Errors ---

/// Errors from a command/response exchange with the TPM.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Invalid data was received from the device.
    #[error("invalid data received from the TPM")]
    InvalidData,

    /// A read operation from the device failed.
    #[error("failed to read from the TPM: {0}")]
    InvalidRead(#[source] std::io::Error),

    /// A write operation to the device failed.
    #[error("failed to write to the TPM: {0}")]
    InvalidWrite(#[source] std::io::Error),

    /// The TPM answered with an error code.
    #[error("TPM returned {rc} ({raw:#010x})")]
    Response { rc: ResponseCode, raw: u32 },

    /// A structure could not be marshalled or unmarshalled.
    #[error("malformed structure: {0}")]
    Codec(#[from] TpmErrorKind),
}

// --- Device Errors ---

/// TPM character device errors.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// Device path does not exist.
    #[error("device not found: {path}")]
    NotFound { path: String },

    /// Device metadata could not be read.
    #[error("failed to stat device '{path}': {source}")]
    Metadata {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Path is not a character device.
    #[error("not a character device: {path}")]
    NotCharDevice { path: String },

    /// Device path could not be canonicalized.
    #[error("failed to resolve device path '{path}': {source}")]
    Canonicalize {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Device could not be opened for reading and writing.
    #[error("failed to open device '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}
