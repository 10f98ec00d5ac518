// tpm2sh: TPM 2.0 command line tool
//
// SPDX-FileCopyrightText: 2025 Opinsys Oy
// SPDX-License-Identifier: GPL-3.0-or-later

//! `TPM_ALG_ID` (TPM 2.0 Structures, section 6.3).

use strum::{Display, FromRepr, IntoStaticStr};

/// Algorithm identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr, IntoStaticStr, Display)]
#[repr(u16)]
pub enum Algorithm {
    #[strum(serialize = "TPM_ALG_ERROR")]
    Error = 0x0000,
    #[strum(serialize = "TPM_ALG_RSA")]
    Rsa = 0x0001,
    #[strum(serialize = "TPM_ALG_SHA1")]
    Sha1 = 0x0004,
    #[strum(serialize = "TPM_ALG_HMAC")]
    Hmac = 0x0005,
    #[strum(serialize = "TPM_ALG_AES")]
    Aes = 0x0006,
    #[strum(serialize = "TPM_ALG_MGF1")]
    Mgf1 = 0x0007,
    #[strum(serialize = "TPM_ALG_KEYEDHASH")]
    KeyedHash = 0x0008,
    #[strum(serialize = "TPM_ALG_XOR")]
    Xor = 0x000A,
    #[strum(serialize = "TPM_ALG_SHA256")]
    Sha256 = 0x000B,
    #[strum(serialize = "TPM_ALG_SHA384")]
    Sha384 = 0x000C,
    #[strum(serialize = "TPM_ALG_SHA512")]
    Sha512 = 0x000D,
    #[strum(serialize = "TPM_ALG_NULL")]
    Null = 0x0010,
    #[strum(serialize = "TPM_ALG_SM3_256")]
    Sm3_256 = 0x0012,
    #[strum(serialize = "TPM_ALG_SM4")]
    Sm4 = 0x0013,
    #[strum(serialize = "TPM_ALG_RSASSA")]
    RsaSsa = 0x0014,
    #[strum(serialize = "TPM_ALG_RSAES")]
    RsaEs = 0x0015,
    #[strum(serialize = "TPM_ALG_RSAPSS")]
    RsaPss = 0x0016,
    #[strum(serialize = "TPM_ALG_OAEP")]
    Oaep = 0x0017,
    #[strum(serialize = "TPM_ALG_ECDSA")]
    EcDsa = 0x0018,
    #[strum(serialize = "TPM_ALG_ECDH")]
    EcDh = 0x0019,
    #[strum(serialize = "TPM_ALG_ECDAA")]
    EcDaa = 0x001A,
    #[strum(serialize = "TPM_ALG_SM2")]
    Sm2 = 0x001B,
    #[strum(serialize = "TPM_ALG_ECSCHNORR")]
    EcSchnorr = 0x001C,
    #[strum(serialize = "TPM_ALG_ECMQV")]
    EcMqv = 0x001D,
    #[strum(serialize = "TPM_ALG_KDF1_SP800_56A")]
    Kdf1Sp800_56A = 0x0020,
    #[strum(serialize = "TPM_ALG_KDF2")]
    Kdf2 = 0x0021,
    #[strum(serialize = "TPM_ALG_KDF1_SP800_108")]
    Kdf1Sp800_108 = 0x0022,
    #[strum(serialize = "TPM_ALG_ECC")]
    Ecc = 0x0023,
    #[strum(serialize = "TPM_ALG_SYMCIPHER")]
    SymCipher = 0x0025,
    #[strum(serialize = "TPM_ALG_CAMELLIA")]
    Camellia = 0x0026,
    #[strum(serialize = "TPM_ALG_CTR")]
    Ctr = 0x0040,
    #[strum(serialize = "TPM_ALG_OFB")]
    Ofb = 0x0041,
    #[strum(serialize = "TPM_ALG_CBC")]
    Cbc = 0x0042,
    #[strum(serialize = "TPM_ALG_CFB")]
    Cfb = 0x0043,
    #[strum(serialize = "TPM_ALG_ECB")]
    Ecb = 0x0044,
}

impl_tpm_value!(Algorithm: u16);
