use crate::RedeemCode;

#[test]
fn test_redeem_code_uppercases_on_construction() {
    assert_eq!(RedeemCode::new("pocao01").as_str(), "POCAO01");
    assert_eq!(RedeemCode::new("PoCaO01").as_str(), "POCAO01");
    assert_eq!(RedeemCode::new("POCAO01").as_str(), "POCAO01");
}

#[test]
fn test_redeem_code_uppercases_on_deserialization() {
    let code: RedeemCode = serde_json::from_str("\"sword01\"").unwrap();

    assert_eq!(code.as_str(), "SWORD01");
}

#[test]
fn test_redeem_code_serializes_as_plain_string() {
    let code = RedeemCode::new("sword01");

    assert_eq!(serde_json::to_string(&code).unwrap(), "\"SWORD01\"");
}

#[test]
fn test_redeem_codes_compare_case_insensitively() {
    assert_eq!(RedeemCode::new("sword01"), RedeemCode::new("SWORD01"));
    assert_eq!(RedeemCode::from("sword01").to_string(), "SWORD01");
}
