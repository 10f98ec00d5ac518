// tpm2sh: TPM 2.0 command line tool
//
// SPDX-FileCopyrightText: 2025 Opinsys Oy
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the protocol library through its public API.

use std::collections::VecDeque;
use std::io::{Cursor, Read, Write};

use tpm2sh::error::ProtocolError;
use tpm2sh::protocol::capability::list_handles;
use tpm2sh::protocol::session::{NONCE_SIZE, start_auth_session};
use tpm2sh::protocol::{Handle, ResponseCode, SessionType, transmit};
use tpm2sh::stack::TpmStack;

/// Answers each command with the next canned response.
struct ScriptedTpm {
    script: VecDeque<Vec<u8>>,
    pending: Cursor<Vec<u8>>,
    sent: Vec<Vec<u8>>,
}

impl ScriptedTpm {
    fn new(script: Vec<Vec<u8>>) -> Self {
        Self {
            script: script.into(),
            pending: Cursor::new(Vec::new()),
            sent: Vec::new(),
        }
    }
}

impl Write for ScriptedTpm {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.sent.push(buf.to_vec());
        self.pending = Cursor::new(self.script.pop_front().unwrap_or_default());
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl Read for ScriptedTpm {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.pending.read(buf)
    }
}

fn frame(rc: u32, parameters: &[u8]) -> Vec<u8> {
    let mut out = vec![0x80, 0x01];
    out.extend(u32::try_from(10 + parameters.len()).unwrap().to_be_bytes());
    out.extend(rc.to_be_bytes());
    out.extend_from_slice(parameters);
    out
}

fn handle_page(more: bool, handles: &[u32]) -> Vec<u8> {
    let mut parameters = vec![u8::from(more), 0, 0, 0, 1];
    parameters.extend(u32::try_from(handles.len()).unwrap().to_be_bytes());
    for handle in handles {
        parameters.extend(handle.to_be_bytes());
    }
    frame(0, &parameters)
}

#[test]
fn persistent_handles_across_pages() {
    let mut tpm = ScriptedTpm::new(vec![
        handle_page(true, &[0x8100_0001]),
        handle_page(false, &[0x8101_0000]),
    ]);
    let handles = list_handles(&mut tpm, Handle::Persistent.value(), 1).unwrap();
    assert_eq!(handles, vec![0x8100_0001, 0x8101_0000]);
    assert_eq!(tpm.sent.len(), 2);
    insta::assert_snapshot!(hex::encode(&tpm.sent[1]), @"8001000000160000017a000000018100000200000001");
}

#[test]
fn error_response_surfaces_code() {
    let mut tpm = ScriptedTpm::new(vec![frame(0x0922, &[])]);
    let err = list_handles(&mut tpm, Handle::Transient.value(), 16).unwrap_err();
    let ProtocolError::Response { rc, raw } = err else {
        panic!("expected a TPM error, got {err:?}");
    };
    assert_eq!(rc, ResponseCode::Retry);
    assert_eq!(raw, 0x922);
}

#[test]
fn truncated_response_is_invalid() {
    let mut tpm = ScriptedTpm::new(vec![vec![0x80, 0x01, 0x00]]);
    assert!(matches!(
        transmit(&mut tpm, &[0u8; 10]),
        Err(ProtocolError::InvalidData)
    ));
}

#[test]
fn session_round_trip() {
    let mut parameters = 0x0300_0000_u32.to_be_bytes().to_vec();
    parameters.extend(16_u16.to_be_bytes());
    parameters.extend([0xAB; NONCE_SIZE]);
    let mut tpm = ScriptedTpm::new(vec![frame(0, &parameters)]);

    let session = start_auth_session(&mut tpm, SessionType::Policy, &[0x11; NONCE_SIZE]).unwrap();
    assert_eq!(session.handle, 0x0300_0000);
    assert_eq!(session.nonce_tpm, [0xAB; NONCE_SIZE]);
    assert_eq!(tpm.sent[0].len(), 43);
}

#[test]
fn stack_holds_protocol_values() {
    let mut stack = TpmStack::new();
    stack.push(&Handle::Persistent.value()).unwrap();
    stack.push(&(SessionType::Trial.value())).unwrap();
    assert_eq!(stack.pop::<u8>().unwrap(), 3);
    assert_eq!(stack.pop::<u32>().unwrap(), 0x8100_0000);
}

#[cfg(target_os = "linux")]
#[test]
fn silent_device_yields_invalid_data() {
    let mut device = tpm2sh::device::Device::open("/dev/null").unwrap();
    assert!(matches!(
        transmit(&mut device, &[0u8; 10]),
        Err(ProtocolError::InvalidData)
    ));
}
