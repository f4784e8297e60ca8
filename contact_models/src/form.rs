use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

/// Raw contact form input, keyed by field name.
///
/// Keys are not restricted to the known [`FieldName`]s, so arbitrary form
/// payloads can be sanitized and forwarded as they are.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormData(BTreeMap<String, FieldValue>);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    /// Any non-string JSON value (numbers, booleans, null, arrays, objects).
    Other(serde_json::Value),
}

/// The fields of the contact form that are subject to validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    Subject,
    Message,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.0.get(key)
    }

    /// Returns the value of `key` if it is present and a string.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(FieldValue::as_text)
    }

    /// Returns the string value of one of the known form fields.
    pub fn field(&self, field: FieldName) -> Option<&str> {
        self.text(field.as_str())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for FormData
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl IntoIterator for FormData {
    type Item = (String, FieldValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Other(_) => None,
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(text) => Self::Text(text),
            other => Self::Other(other),
        }
    }
}

impl FieldName {
    pub const ALL: [Self; 5] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Subject,
        Self::Message,
    ];

    /// The key under which this field appears in [`FormData`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn deserialize_mixed_values() {
        let form = serde_json::from_value::<FormData>(json!({
            "firstName": "Jane",
            "count": 5,
            "subscribed": true,
        }))
        .unwrap();

        assert_eq!(form.text("firstName"), Some("Jane"));
        assert_eq!(form.text("count"), None);
        assert_eq!(form.get("count"), Some(&FieldValue::Other(json!(5))));
        assert_eq!(form.get("subscribed"), Some(&FieldValue::Other(json!(true))));
        assert_eq!(form.len(), 3);
    }

    #[test]
    fn serialize_preserves_values() {
        let form = FormData::from_iter([
            ("name", FieldValue::from("Bob")),
            ("count", FieldValue::from(json!(5))),
        ]);

        assert_eq!(
            serde_json::to_value(&form).unwrap(),
            json!({"name": "Bob", "count": 5})
        );
    }

    #[test]
    fn field_names() {
        let keys = FieldName::ALL.map(FieldName::as_str);
        assert_eq!(keys, ["firstName", "lastName", "email", "subject", "message"]);

        for field in FieldName::ALL {
            assert_eq!(
                serde_json::to_value(field).unwrap(),
                json!(field.as_str())
            );
        }
    }

    #[test]
    fn field_lookup() {
        let form = FormData::from_iter([("email", "jane@example.com")]);
        assert_eq!(form.field(FieldName::Email), Some("jane@example.com"));
        assert_eq!(form.field(FieldName::Subject), None);
    }
}
