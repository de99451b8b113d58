use skrybe_client::error::{AppError, FieldError, ValidationError};

#[test]
fn test_validation_error_display_lists_fields() {
    let error = ValidationError::new(vec![
        FieldError::required("fromName"),
        FieldError::required("subject"),
    ]);
    assert_eq!(
        error.to_string(),
        "validation failed: fromName: Field 'fromName' is required; subject: Field 'subject' is required"
    );
}

#[test]
fn test_validation_error_single() {
    let error = ValidationError::single("fromEmail", "Invalid email format");
    assert_eq!(error.errors().len(), 1);
    assert_eq!(error.field("fromEmail"), Some("Invalid email format"));
    assert_eq!(error.field("to"), None);
}

#[test]
fn test_app_error_is_transparent_over_validation() {
    let error: AppError = ValidationError::single("to", "Invalid email format: x").into();
    assert_eq!(error.to_string(), "validation failed: to: Invalid email format: x");
    assert!(error.as_validation().is_some());
    assert!(error.as_transport().is_none());
}

#[test]
fn test_app_error_display_serialization() {
    let error = AppError::Serialization("Invalid format".to_string());
    assert_eq!(error.to_string(), "serialization error: Invalid format");
}

#[test]
fn test_app_error_from_serde() {
    let json = r#"{"invalid": json}"#;
    let serde_error = serde_json::from_str::<serde_json::Value>(json).unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::Json(_) => (),
        _ => panic!("Expected Json error"),
    }
}

#[test]
fn test_field_error_serializes() {
    let value = serde_json::to_value(FieldError::required("title")).unwrap();
    assert_eq!(value["field"], "title");
    assert_eq!(value["message"], "Field 'title' is required");
}
