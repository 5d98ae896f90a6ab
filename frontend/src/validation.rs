use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const PHONE_MESSAGE: &str = "Please enter a valid phone number";

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("valid phone pattern"));

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
    Select,
    TextArea,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormField {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub value: String,
}

impl FormField {
    pub fn new(id: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            id,
            label,
            kind,
            required: false,
            value: String::new(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

/// Errors from a single validation pass, at most one per field.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    /// Replaces the entry for `field` with the outcome of checking it again.
    pub fn refresh(&mut self, field: &FormField) {
        match validate_field(field) {
            Some(message) => {
                self.0.insert(field.id, message);
            }
            None => {
                self.0.remove(field.id);
            }
        }
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Formatting characters are dropped before matching, so `+1 (555) 123-4567`
/// is checked as `+15551234567`.
pub fn is_valid_phone(value: &str) -> bool {
    let digits: String = value
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect();
    PHONE_PATTERN.is_match(&digits)
}

/// Presence is judged on the trimmed value, format on the raw one. When a
/// whitespace-only value fails both, the format message is reported.
pub fn validate_field(field: &FormField) -> Option<&'static str> {
    let format_error = match field.kind {
        _ if field.value.is_empty() => None,
        FieldKind::Email if !is_valid_email(&field.value) => Some(EMAIL_MESSAGE),
        FieldKind::Phone if !is_valid_phone(&field.value) => Some(PHONE_MESSAGE),
        _ => None,
    };
    format_error.or_else(|| (field.required && field.is_blank()).then_some(REQUIRED_MESSAGE))
}

/// Runs every rule over every field; the form is valid when the result is empty.
pub fn validate(fields: &[FormField]) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for field in fields {
        errors.refresh(field);
    }
    errors
}
