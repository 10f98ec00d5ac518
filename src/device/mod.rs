// tpm2sh: TPM 2.0 command line tool
//
// SPDX-FileCopyrightText: 2025 Opinsys Oy
// SPDX-License-Identifier: GPL-3.0-or-later

//! TPM character device.
//!
//! ```text
//! path -> exists? -> metadata -> char device? -> canonicalize -> open(rw)
//! ```
//!
//! The kernel device answers each written command with exactly one
//! response, read back until end of stream.

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::DeviceError;

/// An open TPM device.
#[derive(Debug)]
pub struct Device {
    file: File,
    path: PathBuf,
}

impl Device {
    /// Opens the TPM character device at `path` for reading and writing.
    ///
    /// # Errors
    ///
    /// Returns a `DeviceError` if the path does not exist, is not a
    /// character device, cannot be resolved, or cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DeviceError> {
        let path = path.as_ref();
        let display = path.display().to_string();

        if !path.exists() {
            return Err(DeviceError::NotFound { path: display });
        }
        let metadata = fs::metadata(path).map_err(|source| DeviceError::Metadata {
            path: display.clone(),
            source,
        })?;
        if !is_char_device(&metadata) {
            return Err(DeviceError::NotCharDevice { path: display });
        }
        let canonical = fs::canonicalize(path).map_err(|source| DeviceError::Canonicalize {
            path: display.clone(),
            source,
        })?;
        debug!(path = %canonical.display(), "opening TPM device");

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(&canonical)
            .map_err(|source| DeviceError::Open {
                path: display,
                source,
            })?;

        Ok(Self {
            file,
            path: canonical,
        })
    }

    /// Canonical path of the device.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(unix)]
fn is_char_device(metadata: &fs::Metadata) -> bool {
    use std::os::unix::fs::FileTypeExt;
    metadata.file_type().is_char_device()
}

#[cfg(not(unix))]
fn is_char_device(metadata: &fs::Metadata) -> bool {
    !metadata.is_dir()
}

impl Read for Device {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.file.read(buf)
    }
}

impl Write for Device {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.file.flush()
    }
}
