use indexmap::IndexMap;
use regex::Regex;
use thiserror::Error;

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const INVALID_PHONE_MESSAGE: &str = "Please enter a valid phone number";

/// Minimum number of digits in a phone number
pub const MIN_PHONE_DIGITS: usize = 10;

/// Input kind of a form field, as declared by the host markup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    TextArea,
    Select,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub kind: FieldKind,
    pub required: bool,
    pub value: String,
}

impl FormField {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: false,
            value: String::new(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }
}

/// A field that failed validation, with the message shown next to it
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Validates contact-form fields
///
/// Patterns are compiled once at construction.
#[derive(Debug, Clone)]
pub struct FormValidator {
    email_pattern: Regex,
    phone_pattern: Regex,
}

impl FormValidator {
    pub fn new() -> Self {
        Self {
            email_pattern: Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"),
            phone_pattern: Regex::new(r"^[0-9\s\-+()]+$").expect("Invalid phone regex"),
        }
    }

    /// Check one field
    ///
    /// Rules run in order (required, email, phone) and the last failing
    /// rule supplies the message.
    pub fn validate_field(&self, field: &FormField) -> Result<(), FieldError> {
        let mut message = None;

        if field.required && field.value.trim().is_empty() {
            message = Some(REQUIRED_MESSAGE);
        }

        if field.kind == FieldKind::Email
            && !field.value.is_empty()
            && !self.email_pattern.is_match(&field.value)
        {
            message = Some(INVALID_EMAIL_MESSAGE);
        }

        if field.kind == FieldKind::Tel && !field.value.is_empty() {
            let digits = field.value.chars().filter(char::is_ascii_digit).count();
            if !self.phone_pattern.is_match(&field.value) || digits < MIN_PHONE_DIGITS {
                message = Some(INVALID_PHONE_MESSAGE);
            }
        }

        match message {
            Some(message) => {
                tracing::debug!("Field '{}' failed validation: {}", field.name, message);
                Err(FieldError {
                    field: field.name.clone(),
                    message: message.to_string(),
                })
            }
            None => Ok(()),
        }
    }

    /// Check every required field of a form on submit
    ///
    /// Optional fields are only checked on blur via
    /// [`validate_field`](Self::validate_field).
    ///
    /// # Returns
    /// Every failure, keyed by field name in form order
    pub fn validate_form(&self, fields: &[FormField]) -> Result<(), IndexMap<String, FieldError>> {
        let errors: IndexMap<String, FieldError> = fields
            .iter()
            .filter(|field| field.required)
            .filter_map(|field| self.validate_field(field).err())
            .map(|error| (error.field.clone(), error))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new()
    }
}
