// tpm2sh: TPM 2.0 command line tool
//
// SPDX-FileCopyrightText: 2025 Opinsys Oy
// SPDX-License-Identifier: GPL-3.0-or-later

//! TPM 2.0 wire protocol.
//!
//! ```text
//! constants   TPM_ALG / TPM_CC / TPM_RC / TPM_ST / TPM_SE / TPM_CAP / TPM_HT
//!     |
//! codec       TpmWriter, TpmBuild, TpmParse (big-endian)
//!     |
//! message     header + body -> command bytes, response bytes -> Response
//!     |
//!     +-- capability  TPM2_GetCapability(TPM_CAP_HANDLES)
//!     +-- session     TPM2_StartAuthSession
//! ```

/// Adds `value` and `name` to value tables that derive strum's `FromRepr`
/// and `IntoStaticStr`.
macro_rules! impl_tpm_value {
    ($($name:ident: $repr:ty),+ $(,)?) => {
        $(
            impl $name {
                /// Wire value.
                #[must_use]
                pub const fn value(self) -> $repr {
                    self as $repr
                }

                /// Canonical `TPM_*` name.
                #[must_use]
                pub fn name(self) -> &'static str {
                    self.into()
                }
            }
        )+
    };
}

pub mod capability;
pub mod codec;
pub mod constants;
pub mod message;
pub mod session;

pub use codec::{TPM_HEADER_SIZE, TPM_MAX_COMMAND_SIZE, Tpm2b, TpmBuild, TpmParse, TpmWriter};
pub use constants::{
    Algorithm, CAP_LAST, CAP_VENDOR_PROPERTY, CC_FIRST, CC_LAST, Capability, CommandCode, Handle,
    HandleType, ObjectAttributes, RC_FMT1, RC_VER1, RC_WARN, RcLocation, ResponseCode,
    SessionType, Tag,
};
pub use message::{Response, transmit};
