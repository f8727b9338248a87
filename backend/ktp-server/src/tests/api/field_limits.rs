use crate::{ApiError, FieldLimits};

use ktp_config::ValidationConfig;

fn config() -> ValidationConfig {
    ValidationConfig {
        max_hash_length: 8,
        max_national_id_length: 4,
    }
}

fn field_of(error: ApiError) -> Option<String> {
    match error {
        ApiError::Validation { field, .. } => field,
        other => panic!("expected validation error, got {other}"),
    }
}

#[test]
fn test_hashes_within_limit_are_accepted_verbatim() {
    let config = config();

    let hashes = FieldLimits::new(&config)
        .hashes("12345678".into(), "".into(), "abc".into())
        .unwrap();

    assert_eq!(hashes.data_hash, "12345678");
    assert_eq!(hashes.photo_hash, "");
}

#[test]
fn test_oversized_hash_names_its_field() {
    let config = config();

    let error = FieldLimits::new(&config)
        .hashes("ok".into(), "ok".into(), "123456789".into())
        .unwrap_err();

    assert_eq!(field_of(error).as_deref(), Some("signature_hash"));
}

#[test]
fn test_national_id_length_and_blank_are_rejected() {
    let config = config();
    let limits = FieldLimits::new(&config);

    assert_eq!(limits.national_id("1234".into()).unwrap().as_str(), "1234");
    assert_eq!(
        field_of(limits.national_id("12345".into()).unwrap_err()).as_deref(),
        Some("national_id")
    );
    assert_eq!(
        field_of(limits.national_id("  ".into()).unwrap_err()).as_deref(),
        Some("national_id")
    );
}

#[test]
fn test_invalid_account_names_the_given_field() {
    let config = config();

    let error = FieldLimits::new(&config)
        .account("subject", "has space")
        .unwrap_err();

    assert_eq!(field_of(error).as_deref(), Some("subject"));
}
