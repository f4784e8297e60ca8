use std::sync::LazyLock;

use contact_models::{
    form::{FieldName, FormData},
    validation::{FieldError, ValidationError, ValidationResult},
};
use regex::Regex;

use crate::sanitize::trim;

pub static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub fn validate(form: &FormData) -> ValidationResult {
    FieldName::ALL
        .into_iter()
        .filter_map(|field| check(field, form.field(field)).map(|error| (field, error)))
        .collect()
}

/// Checks a single field. A missing or non-string value is treated like an
/// empty one. Lengths are counted in UTF-16 code units.
fn check(field: FieldName, value: Option<&str>) -> Option<FieldError> {
    let trimmed = value.map(trim).unwrap_or_default();
    let too_short = trimmed.encode_utf16().count() < field.rule().min_length.unwrap_or(1);

    let (kind, message) = match field {
        FieldName::FirstName if too_short => (
            ValidationError::Required,
            "First name is required and must be at least 1 character long.",
        ),
        FieldName::LastName if too_short => (
            ValidationError::Required,
            "Last name is required and must be at least 1 character long.",
        ),
        FieldName::Email if trimmed.is_empty() => {
            (ValidationError::Required, "Email is required.")
        }
        // the format check deliberately runs on the untrimmed value
        FieldName::Email if !value.is_some_and(|email| EMAIL_REGEX.is_match(email)) => (
            ValidationError::InvalidFormat,
            "Please enter a valid email address.",
        ),
        FieldName::Subject if too_short => (
            ValidationError::TooShort,
            "Subject is required and must be at least 3 characters.",
        ),
        FieldName::Message if too_short => (
            ValidationError::TooShort,
            "Message is required and must be at least 10 characters.",
        ),
        _ => return None,
    };

    Some(FieldError { kind, message })
}
