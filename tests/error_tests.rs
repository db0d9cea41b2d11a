//! Tests for the error system.

use hearth::error::*;

#[test]
fn error_messages_are_stable() {
    assert_eq!(
        HearthError::NotFound("task 7".to_string()).to_string(),
        "Not found: task 7"
    );
    assert_eq!(
        HearthError::InvalidArgument("task title must not be empty".to_string()).to_string(),
        "Invalid argument: task title must not be empty"
    );
}

#[test]
fn error_categories_and_recoverability() {
    let io = HearthError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
    let serde = HearthError::from(serde_json::from_str::<serde_json::Value>("{nope").unwrap_err());

    let cases = [
        (io, ErrorCategory::Storage, true),
        (serde, ErrorCategory::Storage, true),
        (
            HearthError::Configuration("bad".to_string()),
            ErrorCategory::Configuration,
            false,
        ),
        (
            HearthError::InvalidArgument("x".to_string()),
            ErrorCategory::Input,
            true,
        ),
        (
            HearthError::NotFound("x".to_string()),
            ErrorCategory::Input,
            true,
        ),
    ];

    for (error, category, recoverable) in cases {
        assert_eq!(error.category(), category, "{error}");
        assert_eq!(error.is_recoverable(), recoverable, "{error}");
    }
}
