// tpm2sh: TPM 2.0 command line tool
//
// SPDX-FileCopyrightText: 2025 Opinsys Oy
// SPDX-License-Identifier: GPL-3.0-or-later

//! Big-endian marshalling.
//!
//! ```text
//! TpmBuild::build(&self, &mut TpmWriter)     value -> bytes
//! TpmParse::parse(&[u8]) -> (Self, rest)     bytes -> value
//! ```

use crate::error::{TpmErrorKind, TpmResult};
use crate::protocol::constants::ObjectAttributes;

/// Largest command or response the tool builds or accepts.
pub const TPM_MAX_COMMAND_SIZE: usize = 4096;

/// Size of a command or response header: tag, size and code.
pub const TPM_HEADER_SIZE: usize = 10;

/// Writes into a caller-provided buffer without ever growing it.
#[derive(Debug)]
pub struct TpmWriter<'a> {
    buffer: &'a mut [u8],
    cursor: usize,
}

impl<'a> TpmWriter<'a> {
    #[must_use]
    pub const fn new(buffer: &'a mut [u8]) -> Self {
        Self { buffer, cursor: 0 }
    }

    /// Appends raw bytes.
    ///
    /// # Errors
    ///
    /// Returns `TpmErrorKind::Boundary` if the bytes do not fit.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> TpmResult<()> {
        let end = self
            .cursor
            .checked_add(bytes.len())
            .ok_or(TpmErrorKind::Boundary)?;
        let target = self
            .buffer
            .get_mut(self.cursor..end)
            .ok_or(TpmErrorKind::Boundary)?;
        target.copy_from_slice(bytes);
        self.cursor = end;
        Ok(())
    }

    /// Number of bytes written so far.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cursor == 0
    }
}

/// Marshals a value into its wire form.
pub trait TpmBuild {
    /// # Errors
    ///
    /// Returns a `TpmErrorKind` if the value does not fit the writer or its
    /// size field.
    fn build(&self, writer: &mut TpmWriter<'_>) -> TpmResult<()>;
}

/// Unmarshals a value from the front of a buffer.
pub trait TpmParse<'a>: Sized {
    /// Returns the value and the unconsumed remainder.
    ///
    /// # Errors
    ///
    /// Returns `TpmErrorKind::Boundary` if the buffer is too short.
    fn parse(buf: &'a [u8]) -> TpmResult<(Self, &'a [u8])>;
}

/// Splits `N` bytes off the front of `buf`.
fn take<const N: usize>(buf: &[u8]) -> TpmResult<([u8; N], &[u8])> {
    let (head, rest) = buf.split_at_checked(N).ok_or(TpmErrorKind::Boundary)?;
    let mut array = [0u8; N];
    array.copy_from_slice(head);
    Ok((array, rest))
}

macro_rules! impl_integer {
    ($($int:ty),+ $(,)?) => {
        $(
            impl TpmBuild for $int {
                fn build(&self, writer: &mut TpmWriter<'_>) -> TpmResult<()> {
                    writer.write_bytes(&self.to_be_bytes())
                }
            }

            impl<'a> TpmParse<'a> for $int {
                fn parse(buf: &'a [u8]) -> TpmResult<(Self, &'a [u8])> {
                    let (bytes, rest) = take::<{ size_of::<$int>() }>(buf)?;
                    Ok((<$int>::from_be_bytes(bytes), rest))
                }
            }
        )+
    };
}

impl_integer!(u8, u16, u32, u64);

impl TpmBuild for ObjectAttributes {
    fn build(&self, writer: &mut TpmWriter<'_>) -> TpmResult<()> {
        self.bits().build(writer)
    }
}

impl<'a> TpmParse<'a> for ObjectAttributes {
    fn parse(buf: &'a [u8]) -> TpmResult<(Self, &'a [u8])> {
        let (bits, rest) = u32::parse(buf)?;
        Ok((Self::from_bits_retain(bits), rest))
    }
}

/// `TPM2B_*`: a byte buffer prefixed with its `u16` length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tpm2b(Vec<u8>);

impl Tpm2b {
    /// # Errors
    ///
    /// Returns `TpmErrorKind::ValueTooLarge` if `bytes` is longer than
    /// `u16::MAX`.
    pub fn new(bytes: &[u8]) -> TpmResult<Self> {
        if u16::try_from(bytes.len()).is_err() {
            return Err(TpmErrorKind::ValueTooLarge);
        }
        Ok(Self(bytes.to_vec()))
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TpmBuild for Tpm2b {
    fn build(&self, writer: &mut TpmWriter<'_>) -> TpmResult<()> {
        let size = u16::try_from(self.0.len()).map_err(|_| TpmErrorKind::ValueTooLarge)?;
        size.build(writer)?;
        writer.write_bytes(&self.0)
    }
}

impl<'a> TpmParse<'a> for Tpm2b {
    fn parse(buf: &'a [u8]) -> TpmResult<(Self, &'a [u8])> {
        let (size, rest) = u16::parse(buf)?;
        let (bytes, rest) = rest
            .split_at_checked(usize::from(size))
            .ok_or(TpmErrorKind::Boundary)?;
        Ok((Self(bytes.to_vec()), rest))
    }
}
