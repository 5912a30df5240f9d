use crate::StoreError;

use std::path::PathBuf;

#[test]
fn given_file_write_error_when_is_transient_then_returns_true() {
    let err = StoreError::file_write(
        PathBuf::from("/store/users.json"),
        std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied"),
    );
    assert!(err.is_transient());
}

#[test]
fn given_invalid_key_error_when_is_transient_then_returns_false() {
    let err = StoreError::invalid_key("../etc");
    assert!(!err.is_transient());
}

#[test]
fn given_duplicate_user_error_when_is_transient_then_returns_false() {
    let err = StoreError::duplicate_user("AB12");
    assert!(!err.is_transient());
    assert!(err.to_string().contains("AB12"));
}

#[test]
fn given_any_error_when_recovery_hint_then_returns_non_empty_string() {
    let errors = vec![
        StoreError::invalid_key("bad key"),
        StoreError::unavailable("lock poisoned"),
        StoreError::duplicate_user("X"),
        StoreError::unsupported_schema(9, 1),
        StoreError::file_read(
            PathBuf::from("/test"),
            std::io::Error::new(std::io::ErrorKind::Other, "test"),
        ),
    ];

    for err in errors {
        let hint = err.recovery_hint();
        assert!(
            !hint.is_empty(),
            "recovery_hint should not be empty for {err:?}"
        );
    }
}

#[test]
fn given_serialization_error_when_from_serde_json_then_converts() {
    let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
    let store_err: StoreError = json_err.into();

    match store_err {
        StoreError::Serialization { .. } => {}
        _ => panic!("Expected Serialization variant"),
    }
}
