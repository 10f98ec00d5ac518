// tpm2sh: TPM 2.0 command line tool
//
// SPDX-FileCopyrightText: 2025 Opinsys Oy
// SPDX-License-Identifier: GPL-3.0-or-later

//! `TPM_CC` (TPM 2.0 Structures, section 6.5.2).

use strum::{Display, FromRepr, IntoStaticStr};

/// `TPM_CC_FIRST`
pub const CC_FIRST: u32 = 0x0000_011F;

/// `TPM_CC_LAST`
pub const CC_LAST: u32 = 0x0000_019F;

/// Command code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr, IntoStaticStr, Display)]
#[repr(u32)]
pub enum CommandCode {
    #[strum(serialize = "TPM_CC_NV_UndefineSpaceSpecial")]
    NvUndefineSpaceSpecial = 0x0000_011F,
    #[strum(serialize = "TPM_CC_EvictControl")]
    EvictControl = 0x0000_0120,
    #[strum(serialize = "TPM_CC_HierarchyControl")]
    HierarchyControl = 0x0000_0121,
    #[strum(serialize = "TPM_CC_NV_UndefineSpace")]
    NvUndefineSpace = 0x0000_0122,
    #[strum(serialize = "TPM_CC_ChangeEPS")]
    ChangeEps = 0x0000_0124,
    #[strum(serialize = "TPM_CC_ChangePPS")]
    ChangePps = 0x0000_0125,
    #[strum(serialize = "TPM_CC_Clear")]
    Clear = 0x0000_0126,
    #[strum(serialize = "TPM_CC_ClearControl")]
    ClearControl = 0x0000_0127,
    #[strum(serialize = "TPM_CC_ClockSet")]
    ClockSet = 0x0000_0128,
    #[strum(serialize = "TPM_CC_HierarchyChangeAuth")]
    HierarchyChangeAuth = 0x0000_0129,
    #[strum(serialize = "TPM_CC_NV_DefineSpace")]
    NvDefineSpace = 0x0000_0130,
    #[strum(serialize = "TPM_CC_CreatePrimary")]
    CreatePrimary = 0x0000_0131,
    #[strum(serialize = "TPM_CC_NV_GlobalWriteLock")]
    NvGlobalWriteLock = 0x0000_0132,
    #[strum(serialize = "TPM_CC_GetCommandAuditDigest")]
    GetCommandAuditDigest = 0x0000_0133,
    #[strum(serialize = "TPM_CC_NV_Increment")]
    NvIncrement = 0x0000_0134,
    #[strum(serialize = "TPM_CC_NV_SetBits")]
    NvSetBits = 0x0000_0135,
    #[strum(serialize = "TPM_CC_NV_Extend")]
    NvExtend = 0x0000_0136,
    #[strum(serialize = "TPM_CC_NV_Write")]
    NvWrite = 0x0000_0137,
    #[strum(serialize = "TPM_CC_NV_WriteLock")]
    NvWriteLock = 0x0000_0138,
    #[strum(serialize = "TPM_CC_DictionaryAttackLockReset")]
    DictionaryAttackLockReset = 0x0000_0139,
    #[strum(serialize = "TPM_CC_DictionaryAttackParameters")]
    DictionaryAttackParameters = 0x0000_013A,
    #[strum(serialize = "TPM_CC_NV_ChangeAuth")]
    NvChangeAuth = 0x0000_013B,
    #[strum(serialize = "TPM_CC_PCR_Event")]
    PcrEvent = 0x0000_013C,
    #[strum(serialize = "TPM_CC_PCR_Reset")]
    PcrReset = 0x0000_013D,
    #[strum(serialize = "TPM_CC_SequenceComplete")]
    SequenceComplete = 0x0000_013E,
    #[strum(serialize = "TPM_CC_SetAlgorithmSet")]
    SetAlgorithmSet = 0x0000_013F,
    #[strum(serialize = "TPM_CC_SetCommandCodeAuditStatus")]
    SetCommandCodeAuditStatus = 0x0000_0140,
    #[strum(serialize = "TPM_CC_FieldUpgradeData")]
    FieldUpgradeData = 0x0000_0141,
    #[strum(serialize = "TPM_CC_IncrementalSelfTest")]
    IncrementalSelfTest = 0x0000_0142,
    #[strum(serialize = "TPM_CC_SelfTest")]
    SelfTest = 0x0000_0143,
    #[strum(serialize = "TPM_CC_Startup")]
    Startup = 0x0000_0144,
    #[strum(serialize = "TPM_CC_Shutdown")]
    Shutdown = 0x0000_0145,
    #[strum(serialize = "TPM_CC_StirRandom")]
    StirRandom = 0x0000_0146,
    #[strum(serialize = "TPM_CC_ActivateCredential")]
    ActivateCredential = 0x0000_0147,
    #[strum(serialize = "TPM_CC_Certify")]
    Certify = 0x0000_0148,
    #[strum(serialize = "TPM_CC_PolicyNV")]
    PolicyNv = 0x0000_0149,
    #[strum(serialize = "TPM_CC_CertifyCreation")]
    CertifyCreation = 0x0000_014A,
    #[strum(serialize = "TPM_CC_Duplicate")]
    Duplicate = 0x0000_014B,
    #[strum(serialize = "TPM_CC_GetTime")]
    GetTime = 0x0000_014C,
    #[strum(serialize = "TPM_CC_GetSessionAuditDigest")]
    GetSessionAuditDigest = 0x0000_014D,
    #[strum(serialize = "TPM_CC_NV_Read")]
    NvRead = 0x0000_014E,
    #[strum(serialize = "TPM_CC_NV_ReadLock")]
    NvReadLock = 0x0000_014F,
    #[strum(serialize = "TPM_CC_ObjectChangeAuth")]
    ObjectChangeAuth = 0x0000_0150,
    #[strum(serialize = "TPM_CC_PolicySecret")]
    PolicySecret = 0x0000_0151,
    #[strum(serialize = "TPM_CC_Rewrap")]
    Rewrap = 0x0000_0152,
    #[strum(serialize = "TPM_CC_Create")]
    Create = 0x0000_0153,
    #[strum(serialize = "TPM_CC_ECDH_ZGen")]
    EcdhZGen = 0x0000_0154,
    #[strum(serialize = "TPM_CC_HMAC")]
    Hmac = 0x0000_0155,
    #[strum(serialize = "TPM_CC_Import")]
    Import = 0x0000_0156,
    #[strum(serialize = "TPM_CC_Load")]
    Load = 0x0000_0157,
    #[strum(serialize = "TPM_CC_Quote")]
    Quote = 0x0000_0158,
    #[strum(serialize = "TPM_CC_RSA_Decrypt")]
    RsaDecrypt = 0x0000_0159,
    #[strum(serialize = "TPM_CC_HMAC_Start")]
    HmacStart = 0x0000_015B,
    #[strum(serialize = "TPM_CC_SequenceUpdate")]
    SequenceUpdate = 0x0000_015C,
    #[strum(serialize = "TPM_CC_Sign")]
    Sign = 0x0000_015D,
    #[strum(serialize = "TPM_CC_Unseal")]
    Unseal = 0x0000_015E,
    #[strum(serialize = "TPM_CC_PolicySigned")]
    PolicySigned = 0x0000_0160,
    #[strum(serialize = "TPM_CC_ContextLoad")]
    ContextLoad = 0x0000_0161,
    #[strum(serialize = "TPM_CC_ContextSave")]
    ContextSave = 0x0000_0162,
    #[strum(serialize = "TPM_CC_ECDH_KeyGen")]
    EcdhKeyGen = 0x0000_0163,
    #[strum(serialize = "TPM_CC_EncryptDecrypt")]
    EncryptDecrypt = 0x0000_0164,
    #[strum(serialize = "TPM_CC_FlushContext")]
    FlushContext = 0x0000_0165,
    #[strum(serialize = "TPM_CC_LoadExternal")]
    LoadExternal = 0x0000_0167,
    #[strum(serialize = "TPM_CC_MakeCredential")]
    MakeCredential = 0x0000_0168,
    #[strum(serialize = "TPM_CC_NV_ReadPublic")]
    NvReadPublic = 0x0000_0169,
    #[strum(serialize = "TPM_CC_PolicyAuthorize")]
    PolicyAuthorize = 0x0000_016A,
    #[strum(serialize = "TPM_CC_PolicyAuthValue")]
    PolicyAuthValue = 0x0000_016B,
    #[strum(serialize = "TPM_CC_PolicyCommandCode")]
    PolicyCommandCode = 0x0000_016C,
    #[strum(serialize = "TPM_CC_PolicyCounterTimer")]
    PolicyCounterTimer = 0x0000_016D,
    #[strum(serialize = "TPM_CC_PolicyCpHash")]
    PolicyCpHash = 0x0000_016E,
    #[strum(serialize = "TPM_CC_PolicyLocality")]
    PolicyLocality = 0x0000_016F,
    #[strum(serialize = "TPM_CC_PolicyNameHash")]
    PolicyNameHash = 0x0000_0170,
    #[strum(serialize = "TPM_CC_PolicyOR")]
    PolicyOr = 0x0000_0171,
    #[strum(serialize = "TPM_CC_PolicyTicket")]
    PolicyTicket = 0x0000_0172,
    #[strum(serialize = "TPM_CC_ReadPublic")]
    ReadPublic = 0x0000_0173,
    #[strum(serialize = "TPM_CC_RSA_Encrypt")]
    RsaEncrypt = 0x0000_0174,
    #[strum(serialize = "TPM_CC_StartAuthSession")]
    StartAuthSession = 0x0000_0176,
    #[strum(serialize = "TPM_CC_VerifySignature")]
    VerifySignature = 0x0000_0177,
    #[strum(serialize = "TPM_CC_ECC_Parameters")]
    EccParameters = 0x0000_0178,
    #[strum(serialize = "TPM_CC_FirmwareRead")]
    FirmwareRead = 0x0000_0179,
    #[strum(serialize = "TPM_CC_GetCapability")]
    GetCapability = 0x0000_017A,
    #[strum(serialize = "TPM_CC_GetRandom")]
    GetRandom = 0x0000_017B,
    #[strum(serialize = "TPM_CC_GetTestResult")]
    GetTestResult = 0x0000_017C,
    #[strum(serialize = "TPM_CC_Hash")]
    Hash = 0x0000_017D,
    #[strum(serialize = "TPM_CC_PCR_Read")]
    PcrRead = 0x0000_017E,
    #[strum(serialize = "TPM_CC_PolicyPCR")]
    PolicyPcr = 0x0000_017F,
    #[strum(serialize = "TPM_CC_PolicyRestart")]
    PolicyRestart = 0x0000_0180,
    #[strum(serialize = "TPM_CC_ReadClock")]
    ReadClock = 0x0000_0181,
    #[strum(serialize = "TPM_CC_PCR_Extend")]
    PcrExtend = 0x0000_0182,
    #[strum(serialize = "TPM_CC_PCR_SetAuthValue")]
    PcrSetAuthValue = 0x0000_0183,
    #[strum(serialize = "TPM_CC_NV_Certify")]
    NvCertify = 0x0000_0184,
    #[strum(serialize = "TPM_CC_EventSequenceComplete")]
    EventSequenceComplete = 0x0000_0185,
    #[strum(serialize = "TPM_CC_HashSequenceStart")]
    HashSequenceStart = 0x0000_0186,
    #[strum(serialize = "TPM_CC_PolicyPhysicalPresence")]
    PolicyPhysicalPresence = 0x0000_0187,
    #[strum(serialize = "TPM_CC_PolicyDuplicationSelect")]
    PolicyDuplicationSelect = 0x0000_0188,
    #[strum(serialize = "TPM_CC_PolicyGetDigest")]
    PolicyGetDigest = 0x0000_0189,
    #[strum(serialize = "TPM_CC_TestParms")]
    TestParms = 0x0000_018A,
    #[strum(serialize = "TPM_CC_Commit")]
    Commit = 0x0000_018B,
    #[strum(serialize = "TPM_CC_PolicyPassword")]
    PolicyPassword = 0x0000_018C,
    #[strum(serialize = "TPM_CC_ZGen_2Phase")]
    ZGen2Phase = 0x0000_018D,
    #[strum(serialize = "TPM_CC_EC_Ephemeral")]
    EcEphemeral = 0x0000_018E,
    #[strum(serialize = "TPM_CC_PolicyNvWritten")]
    PolicyNvWritten = 0x0000_018F,
    #[strum(serialize = "TPM_CC_PolicyTemplate")]
    PolicyTemplate = 0x0000_0190,
    #[strum(serialize = "TPM_CC_CreateLoaded")]
    CreateLoaded = 0x0000_0191,
    #[strum(serialize = "TPM_CC_PolicyAuthorizeNV")]
    PolicyAuthorizeNv = 0x0000_0192,
    #[strum(serialize = "TPM_CC_EncryptDecrypt2")]
    EncryptDecrypt2 = 0x0000_0193,
    #[strum(serialize = "TPM_CC_AC_GetCapability")]
    AcGetCapability = 0x0000_0194,
    #[strum(serialize = "TPM_CC_AC_Send")]
    AcSend = 0x0000_0195,
    #[strum(serialize = "TPM_CC_Policy_AC_SendSelect")]
    PolicyAcSendSelect = 0x0000_0196,
    #[strum(serialize = "TPM_CC_CertifyX509")]
    CertifyX509 = 0x0000_0197,
    #[strum(serialize = "TPM_CC_ACT_SetTimeout")]
    ActSetTimeout = 0x0000_0198,
    #[strum(serialize = "TPM_CC_ECC_Encrypt")]
    EccEncrypt = 0x0000_0199,
    #[strum(serialize = "TPM_CC_ECC_Decrypt")]
    EccDecrypt = 0x0000_019A,
    #[strum(serialize = "TPM_CC_PolicyCapability")]
    PolicyCapability = 0x0000_019B,
    #[strum(serialize = "TPM_CC_PolicyParameters")]
    PolicyParameters = 0x0000_019C,
    #[strum(serialize = "TPM_CC_NV_DefineSpace2")]
    NvDefineSpace2 = 0x0000_019D,
    #[strum(serialize = "TPM_CC_NV_ReadPublic2")]
    NvReadPublic2 = 0x0000_019E,
    #[strum(serialize = "TPM_CC_SetCapability")]
    SetCapability = 0x0000_019F,
}

impl_tpm_value!(CommandCode: u32);
