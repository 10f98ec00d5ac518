// tpm2sh: TPM 2.0 command line tool
//
// SPDX-FileCopyrightText: 2025 Opinsys Oy
// SPDX-License-Identifier: GPL-3.0-or-later

//! TPM 2.0 Structures value tables.

pub mod algorithm;
pub mod command;
pub mod rc;

#[cfg(test)]
mod tests;

use bitflags::bitflags;
use strum::{Display, FromRepr, IntoStaticStr};

pub use algorithm::Algorithm;
pub use command::{CC_FIRST, CC_LAST, CommandCode};
pub use rc::{RC_FMT1, RC_VER1, RC_WARN, RcLocation, ResponseCode};

/// `TPM_ST`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr, IntoStaticStr, Display)]
#[repr(u16)]
pub enum Tag {
    #[strum(serialize = "TPM_ST_RSP_COMMAND")]
    RspCommand = 0x00C4,
    #[strum(serialize = "TPM_ST_NULL")]
    Null = 0x8000,
    #[strum(serialize = "TPM_ST_NO_SESSIONS")]
    NoSessions = 0x8001,
    #[strum(serialize = "TPM_ST_SESSIONS")]
    Sessions = 0x8002,
    #[strum(serialize = "TPM_ST_ATTEST_NV")]
    AttestNv = 0x8014,
    #[strum(serialize = "TPM_ST_ATTEST_COMMAND_AUDIT")]
    AttestCommandAudit = 0x8015,
    #[strum(serialize = "TPM_ST_ATTEST_SESSION_AUDIT")]
    AttestSessionAudit = 0x8016,
    #[strum(serialize = "TPM_ST_ATTEST_CERTIFY")]
    AttestCertify = 0x8017,
    #[strum(serialize = "TPM_ST_ATTEST_QUOTE")]
    AttestQuote = 0x8018,
    #[strum(serialize = "TPM_ST_ATTEST_TIME")]
    AttestTime = 0x8019,
    #[strum(serialize = "TPM_ST_ATTEST_CREATION")]
    AttestCreation = 0x801A,
    #[strum(serialize = "TPM_ST_CREATION")]
    Creation = 0x8021,
    #[strum(serialize = "TPM_ST_VERIFIED")]
    Verified = 0x8022,
    #[strum(serialize = "TPM_ST_AUTH_SECRET")]
    AuthSecret = 0x8023,
    #[strum(serialize = "TPM_ST_HASHCHECK")]
    HashCheck = 0x8024,
    #[strum(serialize = "TPM_ST_AUTH_SIGNED")]
    AuthSigned = 0x8025,
    /// Structure describing a Field Upgrade Policy.
    #[strum(serialize = "TPM_ST_FU_MANIFEST")]
    FuManifest = 0x8029,
}

impl_tpm_value!(Tag: u16);

/// `TPM_SE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr, IntoStaticStr, Display)]
#[repr(u8)]
pub enum SessionType {
    #[strum(serialize = "TPM_SE_HMAC")]
    Hmac = 0x00,
    #[strum(serialize = "TPM_SE_POLICY")]
    Policy = 0x01,
    #[strum(serialize = "TPM_SE_TRIAL")]
    Trial = 0x03,
}

impl_tpm_value!(SessionType: u8);

/// `TPM_CAP_LAST`
pub const CAP_LAST: u32 = 0x0000_0009;

/// `TPM_CAP_VENDOR_PROPERTY`: manufacturer-specific
pub const CAP_VENDOR_PROPERTY: u32 = 0x0000_0100;

/// `TPM_CAP`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr, IntoStaticStr, Display)]
#[repr(u32)]
pub enum Capability {
    #[strum(serialize = "TPM_CAP_ALGS")]
    Algs = 0x0000_0000,
    #[strum(serialize = "TPM_CAP_HANDLES")]
    Handles = 0x0000_0001,
    #[strum(serialize = "TPM_CAP_COMMANDS")]
    Commands = 0x0000_0002,
    #[strum(serialize = "TPM_CAP_PP_COMMANDS")]
    PpCommands = 0x0000_0003,
    #[strum(serialize = "TPM_CAP_AUDIT_COMMANDS")]
    AuditCommands = 0x0000_0004,
    #[strum(serialize = "TPM_CAP_PCRS")]
    Pcrs = 0x0000_0005,
    #[strum(serialize = "TPM_CAP_TPM_PROPERTIES")]
    TpmProperties = 0x0000_0006,
    #[strum(serialize = "TPM_CAP_PCR_PROPERTIES")]
    PcrProperties = 0x0000_0007,
    #[strum(serialize = "TPM_CAP_ECC_CURVES")]
    EccCurves = 0x0000_0008,
    #[strum(serialize = "TPM_CAP_AUTH_POLICIES")]
    AuthPolicies = 0x0000_0009,
}

impl_tpm_value!(Capability: u32);

/// `TPM_HT`: the most significant byte of a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr, IntoStaticStr, Display)]
#[repr(u8)]
pub enum HandleType {
    #[strum(serialize = "TPM_HT_PCR")]
    Pcr = 0x00,
    #[strum(serialize = "TPM_HT_NV_INDEX")]
    NvIndex = 0x01,
    /// Also `TPM_HT_LOADED_SESSION`.
    #[strum(serialize = "TPM_HT_HMAC_SESSION")]
    HmacSession = 0x02,
    /// Also `TPM_HT_SAVED_SESSION`.
    #[strum(serialize = "TPM_HT_POLICY_SESSION")]
    PolicySession = 0x03,
    #[strum(serialize = "TPM_HT_PERMANENT")]
    Permanent = 0x40,
    #[strum(serialize = "TPM_HT_TRANSIENT")]
    Transient = 0x80,
    #[strum(serialize = "TPM_HT_PERSISTENT")]
    Persistent = 0x81,
}

impl_tpm_value!(HandleType: u8);

impl HandleType {
    /// Type of the given handle, if it is a known one.
    #[must_use]
    pub const fn of(handle: u32) -> Option<Self> {
        Self::from_repr(handle.to_be_bytes()[0])
    }
}

/// Reserved handles and the first handle of each object range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr, IntoStaticStr, Display)]
#[repr(u32)]
pub enum Handle {
    #[strum(serialize = "TPM_RH_FIRST")]
    First = 0x4000_0000,
    #[strum(serialize = "TPM_RH_OWNER")]
    Owner = 0x4000_0001,
    #[strum(serialize = "TPM_RH_NULL")]
    Null = 0x4000_0007,
    #[strum(serialize = "TPM_RH_UNASSIGNED")]
    Unassigned = 0x4000_0008,
    #[strum(serialize = "TPM_RS_PW")]
    Password = 0x4000_0009,
    #[strum(serialize = "TPM_RH_LOCKOUT")]
    Lockout = 0x4000_000A,
    #[strum(serialize = "TPM_RH_ENDORSEMENT")]
    Endorsement = 0x4000_000B,
    #[strum(serialize = "TPM_RH_PLATFORM")]
    Platform = 0x4000_000C,
    #[strum(serialize = "TPM_RH_PLATFORM_NV")]
    PlatformNv = 0x4000_000D,
    #[strum(serialize = "TPM_RH_AUTH_00")]
    Auth00 = 0x4000_0010,
    #[strum(serialize = "TPM_RH_AUTH_FF")]
    AuthFF = 0x4000_010F,
    #[strum(serialize = "TRANSIENT_FIRST")]
    Transient = 0x8000_0000,
    #[strum(serialize = "PERSISTENT_FIRST")]
    Persistent = 0x8100_0000,
}

impl_tpm_value!(Handle: u32);

bitflags! {
    /// `TPMA_OBJECT`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ObjectAttributes: u32 {
        /// Hierarchy is immutable.
        const FIXED_TPM = 0x0000_0002;
        /// TPM reset invalidates saved contexts too.
        const ST_CLEAR = 0x0000_0004;
        /// Parent is immutable.
        const FIXED_PARENT = 0x0000_0010;
        /// Secrets were generated by the TPM.
        const SENSITIVE_DATA_ORIGIN = 0x0000_0020;
        /// User role may authorize without a policy session.
        const USER_WITH_AUTH = 0x0000_0040;
        /// Admin role requires a policy session.
        const ADMIN_WITH_POLICY = 0x0000_0080;
        /// Not subject to dictionary attack protection.
        const NO_DA = 0x0000_0400;
        /// Duplication requires an encrypted inner wrapper.
        const ENCRYPTED_DUPLICATION = 0x0000_0800;
        /// Operates only on structures of known format.
        const RESTRICTED = 0x0001_0000;
        /// Private portion decrypts.
        const DECRYPT = 0x0002_0000;
        /// Private portion signs or encrypts.
        const SIGN_ENCRYPT = 0x0004_0000;
    }
}
