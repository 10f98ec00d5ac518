// tpm2sh: TPM 2.0 command line tool
//
// SPDX-FileCopyrightText: 2025 Opinsys Oy
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared test utilities.
//!
//! A scripted in-memory TPM and log capture for handler tests.

use std::collections::VecDeque;
use std::io::{Cursor, Read, Write};
use std::sync::{Arc, Mutex};

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

/// In-memory TPM answering each written command with the next scripted
/// response. Once the script runs out, commands read back `fallback`, which
/// is an empty stream unless built with `repeating`.
pub(crate) struct MockTpm {
    responses: VecDeque<Vec<u8>>,
    fallback: Vec<u8>,
    current: Cursor<Vec<u8>>,
    pub(crate) commands: Vec<Vec<u8>>,
}

impl MockTpm {
    pub(crate) fn new<I>(responses: I) -> Self
    where
        I: IntoIterator<Item = Vec<u8>>,
    {
        Self {
            responses: responses.into_iter().collect(),
            fallback: Vec::new(),
            current: Cursor::new(Vec::new()),
            commands: Vec::new(),
        }
    }

    /// Answers every command with the same response.
    pub(crate) fn repeating(response: Vec<u8>) -> Self {
        Self {
            fallback: response,
            ..Self::new([])
        }
    }
}

impl Write for MockTpm {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.commands.push(buf.to_vec());
        let next = self
            .responses
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone());
        self.current = Cursor::new(next);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl Read for MockTpm {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.current.read(buf)
    }
}

/// Frames a response with `TPM_ST_NO_SESSIONS` and the correct size.
pub(crate) fn response(rc: u32, parameters: &[u8]) -> Vec<u8> {
    let size = u32::try_from(10 + parameters.len()).expect("response size fits u32");
    let mut buf = Vec::with_capacity(10 + parameters.len());
    buf.extend(0x8001_u16.to_be_bytes());
    buf.extend(size.to_be_bytes());
    buf.extend(rc.to_be_bytes());
    buf.extend_from_slice(parameters);
    buf
}

/// Successful `TPM2_GetCapability(TPM_CAP_HANDLES)` response.
pub(crate) fn handles_response(more_data: bool, handles: &[u32]) -> Vec<u8> {
    let count = u32::try_from(handles.len()).expect("handle count fits u32");
    let mut parameters = vec![u8::from(more_data)];
    parameters.extend(1_u32.to_be_bytes());
    parameters.extend(count.to_be_bytes());
    for handle in handles {
        parameters.extend(handle.to_be_bytes());
    }
    response(0, &parameters)
}

#[derive(Clone)]
struct BufferWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer
            .lock()
            .map_err(|_| std::io::Error::other("buffer poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[derive(Clone)]
struct BufferMakeWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl<'a> MakeWriter<'a> for BufferMakeWriter {
    type Writer = BufferWriter;

    fn make_writer(&'a self) -> Self::Writer {
        BufferWriter {
            buffer: self.buffer.clone(),
        }
    }
}

/// Runs a closure while capturing tracing output at WARN and above.
///
/// Returns the closure's value and the captured log output.
pub(crate) fn run_with_logs<F, T>(f: F) -> Result<(T, String)>
where
    F: FnOnce() -> T,
{
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_writer(BufferMakeWriter {
            buffer: buffer.clone(),
        })
        .with_max_level(Level::WARN)
        .with_ansi(false)
        .with_target(false)
        .with_level(false)
        .without_time()
        .finish();

    let value = tracing::subscriber::with_default(subscriber, f);

    let guard = buffer
        .lock()
        .map_err(|_| anyhow::anyhow!("log buffer poisoned"))?;
    Ok((value, String::from_utf8_lossy(&guard).to_string()))
}
