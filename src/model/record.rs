//! One displayed row of input.

use serde_json::Value;
use tracing::debug;

/// A single input line, optionally carrying the fields of a JSON object.
///
/// Parsing happens once at the input boundary. A line that is not a JSON
/// object is still a valid record, it just has no fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    line_number: usize,
    text: String,
    fields: Vec<(String, String)>,
}

impl Record {
    /// Build a record from a raw line. `line_number` is 1-based.
    pub fn parse(line_number: usize, line: impl Into<String>) -> Self {
        let text = line.into();
        let fields = match serde_json::from_str::<Value>(&text) {
            Ok(Value::Object(map)) => map
                .into_iter()
                .map(|(key, value)| (key, field_text(&value)))
                .collect(),
            Ok(_) => Vec::new(),
            Err(e) => {
                if text.trim_start().starts_with('{') {
                    debug!(line_number, error = %e, "line looks like JSON but failed to parse");
                }
                Vec::new()
            }
        };
        Self {
            line_number,
            text,
            fields,
        }
    }

    /// 1-based line number in the input.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// The raw line.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Top-level `(key, value)` pairs in input order; empty for plain text.
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Whether the line was a JSON object.
    pub fn is_structured(&self) -> bool {
        !self.fields.is_empty()
    }
}

/// Display form of a JSON value: strings unquoted, everything else compact JSON.
fn field_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_has_no_fields() {
        let record = Record::parse(3, "hello world");
        assert_eq!(record.line_number(), 3);
        assert_eq!(record.text(), "hello world");
        assert!(!record.is_structured());
    }

    #[test]
    fn json_object_fields_keep_input_order() {
        let record = Record::parse(
            1,
            r#"{"batchId":"B-7","name":"Coffee","carbon":12.5,"certified":true}"#,
        );
        assert_eq!(
            record.fields(),
            &[
                ("batchId".to_string(), "B-7".to_string()),
                ("name".to_string(), "Coffee".to_string()),
                ("carbon".to_string(), "12.5".to_string()),
                ("certified".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn nested_values_render_as_compact_json() {
        let record = Record::parse(1, r#"{"tags":["a","b"],"origin":{"country":"KE"}}"#);
        assert_eq!(record.fields()[0].1, r#"["a","b"]"#);
        assert_eq!(record.fields()[1].1, r#"{"country":"KE"}"#);
    }

    #[test]
    fn json_array_is_not_structured() {
        assert!(!Record::parse(1, "[1, 2, 3]").is_structured());
    }

    #[test]
    fn malformed_json_is_kept_as_text() {
        let record = Record::parse(9, r#"{"name": "#);
        assert!(!record.is_structured());
        assert_eq!(record.text(), r#"{"name": "#);
    }

    #[test]
    fn empty_object_is_not_structured() {
        assert!(!Record::parse(1, "{}").is_structured());
    }
}
