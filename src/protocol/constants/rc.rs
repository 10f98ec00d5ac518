// tpm2sh: TPM 2.0 command line tool
//
// SPDX-FileCopyrightText: 2025 Opinsys Oy
// SPDX-License-Identifier: GPL-3.0-or-later

//! `TPM_RC` (TPM 2.0 Structures, section 6.6).
//!
//! ```text
//!  11 10  9  8  7  6  5..0
//! +--+--+--+--+--+--+-----+
//! |S |T |r |V |F |  E     |   F=0: format zero (V = version 1, S = warning)
//! +--+--+--+--+--+--+-----+
//! |    N      |F |P | E   |   F=1: format one (P = parameter, N = index)
//! +-----------+--+--+-----+
//! ```

use strum::{Display, FromRepr, IntoStaticStr};

pub const RC_VER1: u32 = 0x0100;
pub const RC_FMT1: u32 = 0x0080;
pub const RC_WARN: u32 = 0x0900;

const RC_P: u32 = 0x0040;
const RC_N_SHIFT: u32 = 8;
const RC_N_MASK: u32 = 0x000F;

/// Response code, with the format-one index bits removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr, IntoStaticStr, Display)]
#[repr(u32)]
pub enum ResponseCode {
    #[strum(serialize = "TPM_RC_SUCCESS")]
    Success = 0x0000,
    #[strum(serialize = "TPM_RC_BAD_TAG")]
    BadTag = 0x001E,
    #[strum(serialize = "TPM_RC_INITIALIZE")]
    Initialize = RC_VER1,
    #[strum(serialize = "TPM_RC_FAILURE")]
    Failure = RC_VER1 + 0x001,
    #[strum(serialize = "TPM_RC_SEQUENCE")]
    Sequence = RC_VER1 + 0x003,
    #[strum(serialize = "TPM_RC_PRIVATE")]
    Private = RC_VER1 + 0x00B,
    #[strum(serialize = "TPM_RC_HMAC")]
    Hmac = RC_VER1 + 0x019,
    #[strum(serialize = "TPM_RC_DISABLED")]
    Disabled = RC_VER1 + 0x020,
    #[strum(serialize = "TPM_RC_EXCLUSIVE")]
    Exclusive = RC_VER1 + 0x021,
    #[strum(serialize = "TPM_RC_AUTH_TYPE")]
    AuthType = RC_VER1 + 0x024,
    #[strum(serialize = "TPM_RC_AUTH_MISSING")]
    AuthMissing = RC_VER1 + 0x025,
    #[strum(serialize = "TPM_RC_POLICY")]
    Policy = RC_VER1 + 0x026,
    #[strum(serialize = "TPM_RC_PCR")]
    Pcr = RC_VER1 + 0x027,
    #[strum(serialize = "TPM_RC_PCR_CHANGED")]
    PcrChanged = RC_VER1 + 0x028,
    #[strum(serialize = "TPM_RC_UPGRADE")]
    Upgrade = RC_VER1 + 0x02D,
    #[strum(serialize = "TPM_RC_TOO_MANY_CONTEXTS")]
    TooManyContexts = RC_VER1 + 0x02E,
    #[strum(serialize = "TPM_RC_AUTH_UNAVAILABLE")]
    AuthUnavailable = RC_VER1 + 0x02F,
    #[strum(serialize = "TPM_RC_REBOOT")]
    Reboot = RC_VER1 + 0x030,
    #[strum(serialize = "TPM_RC_UNBALANCED")]
    Unbalanced = RC_VER1 + 0x031,
    #[strum(serialize = "TPM_RC_COMMAND_SIZE")]
    CommandSize = RC_VER1 + 0x042,
    #[strum(serialize = "TPM_RC_COMMAND_CODE")]
    CommandCode = RC_VER1 + 0x043,
    #[strum(serialize = "TPM_RC_AUTHSIZE")]
    AuthSize = RC_VER1 + 0x044,
    #[strum(serialize = "TPM_RC_AUTH_CONTEXT")]
    AuthContext = RC_VER1 + 0x045,
    #[strum(serialize = "TPM_RC_NV_RANGE")]
    NvRange = RC_VER1 + 0x046,
    #[strum(serialize = "TPM_RC_NV_SIZE")]
    NvSize = RC_VER1 + 0x047,
    #[strum(serialize = "TPM_RC_NV_LOCKED")]
    NvLocked = RC_VER1 + 0x048,
    #[strum(serialize = "TPM_RC_NV_AUTHORIZATION")]
    NvAuthorization = RC_VER1 + 0x049,
    #[strum(serialize = "TPM_RC_NV_UNINITIALIZED")]
    NvUninitialized = RC_VER1 + 0x04A,
    #[strum(serialize = "TPM_RC_NV_SPACE")]
    NvSpace = RC_VER1 + 0x04B,
    #[strum(serialize = "TPM_RC_NV_DEFINED")]
    NvDefined = RC_VER1 + 0x04C,
    #[strum(serialize = "TPM_RC_BAD_CONTEXT")]
    BadContext = RC_VER1 + 0x050,
    #[strum(serialize = "TPM_RC_CPHASH")]
    CpHash = RC_VER1 + 0x051,
    #[strum(serialize = "TPM_RC_PARENT")]
    Parent = RC_VER1 + 0x052,
    #[strum(serialize = "TPM_RC_NEEDS_TEST")]
    NeedsTest = RC_VER1 + 0x053,
    #[strum(serialize = "TPM_RC_NO_RESULT")]
    NoResult = RC_VER1 + 0x054,
    #[strum(serialize = "TPM_RC_SENSITIVE")]
    Sensitive = RC_VER1 + 0x055,
    #[strum(serialize = "TPM_RC_ASYMMETRIC")]
    Asymmetric = RC_FMT1 + 0x001,
    #[strum(serialize = "TPM_RC_ATTRIBUTES")]
    Attributes = RC_FMT1 + 0x002,
    #[strum(serialize = "TPM_RC_HASH")]
    Hash = RC_FMT1 + 0x003,
    #[strum(serialize = "TPM_RC_VALUE")]
    Value = RC_FMT1 + 0x004,
    #[strum(serialize = "TPM_RC_HIERARCHY")]
    Hierarchy = RC_FMT1 + 0x005,
    #[strum(serialize = "TPM_RC_KEY_SIZE")]
    KeySize = RC_FMT1 + 0x007,
    #[strum(serialize = "TPM_RC_MGF")]
    Mgf = RC_FMT1 + 0x008,
    #[strum(serialize = "TPM_RC_MODE")]
    Mode = RC_FMT1 + 0x009,
    #[strum(serialize = "TPM_RC_TYPE")]
    Type = RC_FMT1 + 0x00A,
    #[strum(serialize = "TPM_RC_HANDLE")]
    Handle = RC_FMT1 + 0x00B,
    #[strum(serialize = "TPM_RC_KDF")]
    Kdf = RC_FMT1 + 0x00C,
    #[strum(serialize = "TPM_RC_RANGE")]
    Range = RC_FMT1 + 0x00D,
    #[strum(serialize = "TPM_RC_AUTH_FAIL")]
    AuthFail = RC_FMT1 + 0x00E,
    #[strum(serialize = "TPM_RC_NONCE")]
    Nonce = RC_FMT1 + 0x00F,
    #[strum(serialize = "TPM_RC_PP")]
    Pp = RC_FMT1 + 0x010,
    #[strum(serialize = "TPM_RC_SCHEME")]
    Scheme = RC_FMT1 + 0x012,
    #[strum(serialize = "TPM_RC_SIZE")]
    Size = RC_FMT1 + 0x015,
    #[strum(serialize = "TPM_RC_SYMMETRIC")]
    Symmetric = RC_FMT1 + 0x016,
    #[strum(serialize = "TPM_RC_TAG")]
    Tag = RC_FMT1 + 0x017,
    #[strum(serialize = "TPM_RC_SELECTOR")]
    Selector = RC_FMT1 + 0x018,
    #[strum(serialize = "TPM_RC_INSUFFICIENT")]
    Insufficient = RC_FMT1 + 0x01A,
    #[strum(serialize = "TPM_RC_SIGNATURE")]
    Signature = RC_FMT1 + 0x01B,
    #[strum(serialize = "TPM_RC_KEY")]
    Key = RC_FMT1 + 0x01C,
    #[strum(serialize = "TPM_RC_POLICY_FAIL")]
    PolicyFail = RC_FMT1 + 0x01D,
    #[strum(serialize = "TPM_RC_INTEGRITY")]
    Integrity = RC_FMT1 + 0x01F,
    #[strum(serialize = "TPM_RC_TICKET")]
    Ticket = RC_FMT1 + 0x020,
    #[strum(serialize = "TPM_RC_RESERVED_BITS")]
    ReservedBits = RC_FMT1 + 0x021,
    #[strum(serialize = "TPM_RC_BAD_AUTH")]
    BadAuth = RC_FMT1 + 0x022,
    #[strum(serialize = "TPM_RC_EXPIRED")]
    Expired = RC_FMT1 + 0x023,
    #[strum(serialize = "TPM_RC_POLICY_CC")]
    PolicyCc = RC_FMT1 + 0x024,
    #[strum(serialize = "TPM_RC_BINDING")]
    Binding = RC_FMT1 + 0x025,
    #[strum(serialize = "TPM_RC_CURVE")]
    Curve = RC_FMT1 + 0x026,
    #[strum(serialize = "TPM_RC_ECC_POINT")]
    EccPoint = RC_FMT1 + 0x027,
    #[strum(serialize = "TPM_RC_CONTEXT_GAP")]
    ContextGap = RC_WARN + 0x001,
    #[strum(serialize = "TPM_RC_OBJECT_MEMORY")]
    ObjectMemory = RC_WARN + 0x002,
    #[strum(serialize = "TPM_RC_SESSION_MEMORY")]
    SessionMemory = RC_WARN + 0x003,
    #[strum(serialize = "TPM_RC_MEMORY")]
    Memory = RC_WARN + 0x004,
    #[strum(serialize = "TPM_RC_SESSION_HANDLES")]
    SessionHandles = RC_WARN + 0x005,
    #[strum(serialize = "TPM_RC_OBJECT_HANDLES")]
    ObjectHandles = RC_WARN + 0x006,
    #[strum(serialize = "TPM_RC_LOCALITY")]
    Locality = RC_WARN + 0x007,
    #[strum(serialize = "TPM_RC_YIELDED")]
    Yielded = RC_WARN + 0x008,
    #[strum(serialize = "TPM_RC_CANCELED")]
    Canceled = RC_WARN + 0x009,
    #[strum(serialize = "TPM_RC_TESTING")]
    Testing = RC_WARN + 0x00A,
    #[strum(serialize = "TPM_RC_REFERENCE_H0")]
    ReferenceH0 = RC_WARN + 0x010,
    #[strum(serialize = "TPM_RC_REFERENCE_H1")]
    ReferenceH1 = RC_WARN + 0x011,
    #[strum(serialize = "TPM_RC_REFERENCE_H2")]
    ReferenceH2 = RC_WARN + 0x012,
    #[strum(serialize = "TPM_RC_REFERENCE_H3")]
    ReferenceH3 = RC_WARN + 0x013,
    #[strum(serialize = "TPM_RC_REFERENCE_H4")]
    ReferenceH4 = RC_WARN + 0x014,
    #[strum(serialize = "TPM_RC_REFERENCE_H5")]
    ReferenceH5 = RC_WARN + 0x015,
    #[strum(serialize = "TPM_RC_REFERENCE_H6")]
    ReferenceH6 = RC_WARN + 0x016,
    #[strum(serialize = "TPM_RC_REFERENCE_S0")]
    ReferenceS0 = RC_WARN + 0x018,
    #[strum(serialize = "TPM_RC_REFERENCE_S1")]
    ReferenceS1 = RC_WARN + 0x019,
    #[strum(serialize = "TPM_RC_REFERENCE_S2")]
    ReferenceS2 = RC_WARN + 0x01A,
    #[strum(serialize = "TPM_RC_REFERENCE_S3")]
    ReferenceS3 = RC_WARN + 0x01B,
    #[strum(serialize = "TPM_RC_REFERENCE_S4")]
    ReferenceS4 = RC_WARN + 0x01C,
    #[strum(serialize = "TPM_RC_REFERENCE_S5")]
    ReferenceS5 = RC_WARN + 0x01D,
    #[strum(serialize = "TPM_RC_REFERENCE_S6")]
    ReferenceS6 = RC_WARN + 0x01E,
    #[strum(serialize = "TPM_RC_NV_RATE")]
    NvRate = RC_WARN + 0x020,
    #[strum(serialize = "TPM_RC_LOCKOUT")]
    Lockout = RC_WARN + 0x021,
    #[strum(serialize = "TPM_RC_RETRY")]
    Retry = RC_WARN + 0x022,
    #[strum(serialize = "TPM_RC_NV_UNAVAILABLE")]
    NvUnavailable = RC_WARN + 0x023,
    #[strum(serialize = "TPM_RC_NOT_USED")]
    NotUsed = RC_WARN + 0x07F,
}

impl_tpm_value!(ResponseCode: u32);

impl From<u32> for ResponseCode {
    /// Any code without a table entry decodes to `TPM_RC_NOT_USED`, which a
    /// TPM never returns for a legitimate command.
    fn from(value: u32) -> Self {
        let masked = if value & RC_FMT1 != 0 {
            value & (0x3F + RC_FMT1)
        } else if value & RC_WARN != 0 {
            value & (0x7F + RC_WARN)
        } else if value & RC_VER1 != 0 {
            value & (0x7F + RC_VER1)
        } else {
            value & 0x7F
        };
        Self::from_repr(masked).unwrap_or(Self::NotUsed)
    }
}

/// What a format-one response code points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RcLocation {
    /// 1-based command parameter.
    Parameter(u8),
    /// 1-based handle in the handle area.
    Handle(u8),
    /// 1-based session in the authorization area.
    Session(u8),
}

impl RcLocation {
    /// Extracts the location from a raw format-one response code.
    #[must_use]
    pub const fn from_raw(value: u32) -> Option<Self> {
        if value & RC_FMT1 == 0 {
            return None;
        }
        #[allow(clippy::cast_possible_truncation)]
        let n = ((value >> RC_N_SHIFT) & RC_N_MASK) as u8;
        if value & RC_P != 0 {
            if n == 0 { None } else { Some(Self::Parameter(n)) }
        } else if n & 0x8 != 0 {
            match n & 0x7 {
                0 => None,
                s => Some(Self::Session(s)),
            }
        } else if n == 0 {
            None
        } else {
            Some(Self::Handle(n))
        }
    }
}

impl std::fmt::Display for RcLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parameter(n) => write!(f, "parameter {n}"),
            Self::Handle(n) => write!(f, "handle {n}"),
            Self::Session(n) => write!(f, "session {n}"),
        }
    }
}
