use super::*;

#[test]
fn profile_record_deserializes_complete_row() {
    let json = r#"{"id":"u-1","role":"owner","display_name":"Ada"}"#;
    let record: ProfileRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.id, "u-1");
    assert_eq!(record.role, "owner");
    assert_eq!(record.display_name, "Ada");
}

#[test]
fn profile_record_rejects_missing_role() {
    // Structural validation: a row without a role field is malformed, not a
    // row with some default role.
    let json = r#"{"id":"u-1","display_name":"Ada"}"#;
    assert!(serde_json::from_str::<ProfileRecord>(json).is_err());
}

#[test]
fn profile_record_rejects_non_string_role() {
    let json = r#"{"id":"u-1","role":7,"display_name":"Ada"}"#;
    assert!(serde_json::from_str::<ProfileRecord>(json).is_err());
}

#[test]
fn provider_error_body_tolerates_missing_fields() {
    let body: ProviderErrorBody = serde_json::from_str("{}").unwrap();
    assert_eq!(body.error, "");
    assert_eq!(body.message, None);
}

#[test]
fn account_record_round_trips() {
    let account = AccountRecord { id: "u-9".to_owned(), email: "a@x.com".to_owned() };
    let json = serde_json::to_string(&account).unwrap();
    let back: AccountRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, account);
}
