use contact_models::form::{FieldValue, FormData};

/// Trims every string value and removes all `<` and `>` characters from it.
///
/// This is not an HTML sanitizer: tags are not parsed, only the two characters
/// are dropped. Anything rendered or stored downstream still needs proper
/// escaping.
pub fn sanitize(form: &FormData) -> FormData {
    form.iter()
        .map(|(key, value)| (key, sanitize_value(value)))
        .collect()
}

/// Strips leading and trailing whitespace, byte order marks included.
pub fn trim(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

fn sanitize_value(value: &FieldValue) -> FieldValue {
    match value {
        FieldValue::Text(text) => FieldValue::Text(
            trim(text)
                .chars()
                .filter(|c| !matches!(c, '<' | '>'))
                .collect(),
        ),
        FieldValue::Other(_) => value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn strips_brackets_after_trimming() {
        let form = FormData::from_iter([("name", "  <b>Bob</b>  ")]);

        let result = sanitize(&form);

        assert_eq!(result.text("name"), Some("bBob/b"));
    }

    #[test]
    fn removes_stray_brackets() {
        let form = FormData::from_iter([("message", "1 < 2 and 3 > 2 -> ok")]);

        let result = sanitize(&form);

        assert_eq!(result.text("message"), Some("1  2 and 3  2 - ok"));
    }

    #[test]
    fn trims_before_stripping() {
        let form = FormData::from_iter([("subject", "< Hello >")]);

        let result = sanitize(&form);

        assert_eq!(result.text("subject"), Some(" Hello "));
    }

    #[test]
    fn trims_byte_order_marks() {
        let form = FormData::from_iter([("firstName", "\u{FEFF} Jane\u{FEFF}\n")]);

        let result = sanitize(&form);

        assert_eq!(result.text("firstName"), Some("Jane"));
    }

    #[test]
    fn non_string_values_pass_through() {
        let form = FormData::from_iter([
            ("count", FieldValue::from(json!(5))),
            ("tags", FieldValue::from(json!(["<a>", " b "]))),
            ("none", FieldValue::from(json!(null))),
        ]);

        let result = sanitize(&form);

        assert_eq!(result, form);
    }

    #[test]
    fn keeps_keys() {
        let form = FormData::from_iter([("firstName", " Jane "), ("custom", "x")]);

        let result = sanitize(&form);

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"firstName": "Jane", "custom": "x"})
        );
        assert_eq!(form.text("firstName"), Some(" Jane "));
    }
}
