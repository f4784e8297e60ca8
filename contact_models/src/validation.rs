use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use crate::form::FieldName;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    /// The field is missing or blank.
    Required,
    /// The value does not have the expected shape (e.g. an email address).
    InvalidFormat,
    /// The trimmed value is shorter than the field's minimum length.
    TooShort,
}

/// A failed check on one field together with its user facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub kind: ValidationError,
    pub message: &'static str,
}

/// Outcome of validating a [`FormData`](crate::form::FormData).
///
/// A result is valid iff it holds no errors, so the two can never disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<FieldName, FieldError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &BTreeMap<FieldName, FieldError> {
        &self.errors
    }

    pub fn error(&self, field: FieldName) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Records an error for `field`, replacing any previous one.
    pub fn add_error(&mut self, field: FieldName, error: FieldError) {
        self.errors.insert(field, error);
    }
}

impl FromIterator<(FieldName, FieldError)> for ValidationResult {
    fn from_iter<T: IntoIterator<Item = (FieldName, FieldError)>>(iter: T) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl Serialize for ValidationResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Repr<'a> {
            is_valid: bool,
            errors: BTreeMap<FieldName, &'a str>,
        }

        Repr {
            is_valid: self.is_valid(),
            errors: self
                .errors
                .iter()
                .map(|(&field, error)| (field, error.message))
                .collect(),
        }
        .serialize(serializer)
    }
}
