use std::collections::BTreeMap;

use serde::Serialize;

use crate::form::FieldName;

pub type FieldConfiguration = BTreeMap<FieldName, FieldRule>;

/// Static constraints attached to a single form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldRule {
    pub required: bool,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub field_type: Option<FieldType>,
    /// Inclusive lower bound on the trimmed length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    /// Inclusive upper bound on the length.
    pub max_length: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Email,
}

impl FieldName {
    pub const fn rule(self) -> FieldRule {
        match self {
            Self::FirstName | Self::LastName => FieldRule {
                required: true,
                field_type: None,
                min_length: Some(1),
                max_length: 50,
            },
            Self::Email => FieldRule {
                required: true,
                field_type: Some(FieldType::Email),
                min_length: None,
                max_length: 100,
            },
            Self::Subject => FieldRule {
                required: true,
                field_type: None,
                min_length: Some(3),
                max_length: 100,
            },
            Self::Message => FieldRule {
                required: true,
                field_type: None,
                min_length: Some(10),
                max_length: 1000,
            },
        }
    }
}

/// Builds the rule table of all known fields.
pub fn field_configuration() -> FieldConfiguration {
    FieldName::ALL
        .into_iter()
        .map(|field| (field, field.rule()))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn serialize_configuration() {
        assert_eq!(
            serde_json::to_value(field_configuration()).unwrap(),
            json!({
                "firstName": {"required": true, "minLength": 1, "maxLength": 50},
                "lastName": {"required": true, "minLength": 1, "maxLength": 50},
                "email": {"required": true, "type": "email", "maxLength": 100},
                "subject": {"required": true, "minLength": 3, "maxLength": 100},
                "message": {"required": true, "minLength": 10, "maxLength": 1000},
            })
        );
    }

    #[test]
    fn configuration_is_stable() {
        assert_eq!(field_configuration(), field_configuration());
        assert_eq!(field_configuration().len(), FieldName::ALL.len());
    }
}
