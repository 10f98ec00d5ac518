// tpm2sh: TPM 2.0 command line tool
//
// SPDX-FileCopyrightText: 2025 Opinsys Oy
// SPDX-License-Identifier: GPL-3.0-or-later

//! Stack of marshalled TPM objects.
//!
//! ```text
//! push(&T: TpmBuild) -> [bytes] -> pop::<T: TpmParse>()
//! ```

use crate::error::{TpmErrorKind, TpmResult};
use crate::protocol::codec::{TPM_MAX_COMMAND_SIZE, TpmBuild, TpmParse, TpmWriter};

/// A LIFO of objects kept in wire form.
#[derive(Debug, Default)]
pub struct TpmStack {
    stack: Vec<Vec<u8>>,
}

impl TpmStack {
    #[must_use]
    pub const fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Marshals `obj` and pushes its bytes.
    ///
    /// # Errors
    ///
    /// Returns a `TpmErrorKind` if `obj` does not marshal within
    /// `TPM_MAX_COMMAND_SIZE` bytes.
    pub fn push<T: TpmBuild>(&mut self, obj: &T) -> TpmResult<()> {
        let mut buffer = [0u8; TPM_MAX_COMMAND_SIZE];
        let mut writer = TpmWriter::new(&mut buffer);
        obj.build(&mut writer)?;
        let len = writer.len();
        self.stack.push(buffer[..len].to_vec());
        Ok(())
    }

    /// Pops the top entry and unmarshals it as `T`.
    ///
    /// # Errors
    ///
    /// Returns `TpmErrorKind::Boundary` if the stack is empty or the entry is
    /// too short, and `TpmErrorKind::TrailingData` if bytes are left over.
    pub fn pop<T: for<'a> TpmParse<'a>>(&mut self) -> TpmResult<T> {
        let bytes = self.stack.pop().ok_or(TpmErrorKind::Boundary)?;
        let (obj, remainder) = T::parse(&bytes)?;
        if !remainder.is_empty() {
            return Err(TpmErrorKind::TrailingData);
        }
        Ok(obj)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

/// Drains a [`TpmStack`] top first.
#[derive(Debug)]
pub struct TpmStackIterator {
    stack: Vec<Vec<u8>>,
}

impl Iterator for TpmStackIterator {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        self.stack.pop()
    }
}

impl IntoIterator for TpmStack {
    type Item = Vec<u8>;
    type IntoIter = TpmStackIterator;

    fn into_iter(self) -> Self::IntoIter {
        TpmStackIterator { stack: self.stack }
    }
}
