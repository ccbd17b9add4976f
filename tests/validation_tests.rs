//! Integration tests for contact form validation
//!
//! These tests replay complete enquiry forms the way the site submits them.

use slidekit::services::validation::{
    INVALID_EMAIL_MESSAGE, INVALID_PHONE_MESSAGE, REQUIRED_MESSAGE,
};
use slidekit::services::{FieldKind, FormField, FormValidator};

fn enquiry_form(name: &str, email: &str, phone: &str, message: &str) -> Vec<FormField> {
    vec![
        FormField::new("name", FieldKind::Text)
            .required()
            .with_value(name),
        FormField::new("company", FieldKind::Text),
        FormField::new("email", FieldKind::Email)
            .required()
            .with_value(email),
        FormField::new("phone", FieldKind::Tel)
            .required()
            .with_value(phone),
        FormField::new("city", FieldKind::Select),
        FormField::new("message", FieldKind::TextArea)
            .required()
            .with_value(message),
    ]
}

#[test]
fn test_complete_enquiry_passes() {
    let validator = FormValidator::new();
    let form = enquiry_form(
        "Ravi Kumar",
        "ravi@example.in",
        "+91 98765 43210",
        "Please send a price list.",
    );

    assert!(validator.validate_form(&form).is_ok());
}

#[test]
fn test_empty_enquiry_reports_every_required_field() {
    let validator = FormValidator::new();
    let form = enquiry_form("", "", "", "");

    let errors = validator.validate_form(&form).unwrap_err();

    let names: Vec<&str> = errors.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["name", "email", "phone", "message"]);
    assert!(errors.values().all(|e| e.message == REQUIRED_MESSAGE));
}

#[test]
fn test_format_errors_reported_per_field() {
    let validator = FormValidator::new();
    let form = enquiry_form("Ravi", "ravi.example.in", "12345", "Hello");

    let errors = validator.validate_form(&form).unwrap_err();

    assert_eq!(errors.len(), 2);
    assert_eq!(errors["email"].message, INVALID_EMAIL_MESSAGE);
    assert_eq!(errors["phone"].message, INVALID_PHONE_MESSAGE);
}

#[test]
fn test_blur_validation_checks_optional_fields() {
    let validator = FormValidator::new();
    let optional_phone = FormField::new("alt_phone", FieldKind::Tel).with_value("12-34");

    let err = validator.validate_field(&optional_phone).unwrap_err();
    assert_eq!(err.field, "alt_phone");
    assert_eq!(err.message, INVALID_PHONE_MESSAGE);
}
