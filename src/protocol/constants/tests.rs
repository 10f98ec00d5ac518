// tpm2sh: TPM 2.0 command line tool
//
// SPDX-FileCopyrightText: 2025 Opinsys Oy
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{
    Algorithm, CC_FIRST, CC_LAST, CommandCode, Handle, HandleType, ObjectAttributes, RcLocation,
    ResponseCode, Tag,
};

#[test]
fn test_response_code_format_zero() {
    assert_eq!(ResponseCode::from(0x0000_0000), ResponseCode::Success);
    assert_eq!(ResponseCode::from(0x0000_001E), ResponseCode::BadTag);
    assert_eq!(ResponseCode::from(0x0000_0100), ResponseCode::Initialize);
    assert_eq!(ResponseCode::from(0x0000_0101), ResponseCode::Failure);
    assert_eq!(ResponseCode::from(0x0000_0143), ResponseCode::CommandCode);
}

#[test]
fn test_response_code_format_one_strips_index() {
    // TPM_RC_VALUE + TPM_RC_P + TPM_RC_1
    assert_eq!(ResponseCode::from(0x0000_01C4), ResponseCode::Value);
    // TPM_RC_HANDLE + TPM_RC_H + TPM_RC_2
    assert_eq!(ResponseCode::from(0x0000_028B), ResponseCode::Handle);
    // TPM_RC_AUTH_FAIL + TPM_RC_S + TPM_RC_1
    assert_eq!(ResponseCode::from(0x0000_098E), ResponseCode::AuthFail);
}

#[test]
fn test_response_code_warnings() {
    assert_eq!(ResponseCode::from(0x0000_0901), ResponseCode::ContextGap);
    assert_eq!(ResponseCode::from(0x0000_0922), ResponseCode::Retry);
    assert_eq!(ResponseCode::from(0x0000_0921), ResponseCode::Lockout);
}

#[test]
fn test_response_code_unknown_is_not_used() {
    assert_eq!(ResponseCode::from(0x0000_0002), ResponseCode::NotUsed);
    assert_eq!(ResponseCode::from(0x0000_0960), ResponseCode::NotUsed);
}

#[test]
fn test_response_code_names() {
    insta::assert_snapshot!(ResponseCode::Success.to_string(), @"TPM_RC_SUCCESS");
    insta::assert_snapshot!(ResponseCode::AuthSize.to_string(), @"TPM_RC_AUTHSIZE");
    insta::assert_snapshot!(ResponseCode::ReferenceS6.to_string(), @"TPM_RC_REFERENCE_S6");
}

#[test]
fn test_rc_location() {
    assert_eq!(RcLocation::from_raw(0x0000_01C4), Some(RcLocation::Parameter(1)));
    assert_eq!(RcLocation::from_raw(0x0000_028B), Some(RcLocation::Handle(2)));
    assert_eq!(RcLocation::from_raw(0x0000_098E), Some(RcLocation::Session(1)));
    assert_eq!(RcLocation::from_raw(0x0000_0084), None);
    assert_eq!(RcLocation::from_raw(0x0000_0101), None);
    assert_eq!(
        RcLocation::from_raw(0x0000_0D8E).map(|loc| loc.to_string()),
        Some("session 5".to_string())
    );
}

#[test]
fn test_command_code_range() {
    assert_eq!(CommandCode::from_repr(CC_FIRST), Some(CommandCode::NvUndefineSpaceSpecial));
    assert_eq!(CommandCode::from_repr(CC_LAST), Some(CommandCode::SetCapability));
    assert_eq!(CommandCode::from_repr(0x0000_0123), None);
    assert_eq!(CommandCode::GetCapability.value(), 0x0000_017A);
    assert_eq!(CommandCode::PolicyOr.name(), "TPM_CC_PolicyOR");
}

#[test]
fn test_algorithm_lookup() {
    assert_eq!(Algorithm::from_repr(0x000B), Some(Algorithm::Sha256));
    assert_eq!(Algorithm::from_repr(0x0003), None);
    assert_eq!(Algorithm::Null.value(), 0x0010);
}

#[test]
fn test_tag_lookup() {
    assert_eq!(Tag::from_repr(0x8001), Some(Tag::NoSessions));
    assert_eq!(Tag::from_repr(0x1234), None);
}

#[test]
fn test_handle_type_of() {
    assert_eq!(HandleType::of(Handle::Transient.value()), Some(HandleType::Transient));
    assert_eq!(HandleType::of(0x8100_0001), Some(HandleType::Persistent));
    assert_eq!(HandleType::of(Handle::Owner.value()), Some(HandleType::Permanent));
    assert_eq!(HandleType::of(0x0300_0000), Some(HandleType::PolicySession));
    assert_eq!(HandleType::of(0x2000_0000), None);
}

#[test]
fn test_object_attributes_bits() {
    let attrs = ObjectAttributes::FIXED_TPM
        | ObjectAttributes::FIXED_PARENT
        | ObjectAttributes::SENSITIVE_DATA_ORIGIN
        | ObjectAttributes::USER_WITH_AUTH
        | ObjectAttributes::RESTRICTED
        | ObjectAttributes::DECRYPT;
    assert_eq!(attrs.bits(), 0x0003_0072);
    assert!(ObjectAttributes::from_bits(0x0000_0001).is_none());
}
