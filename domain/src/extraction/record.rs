//! Typed view over a parsed agent reply.

use super::error::ExtractionError;
use serde_json::{Map, Value};

/// A structured record recovered from agent text (a JSON object).
///
/// Field access goes through explicit required/optional accessors so a
/// missing or mistyped field becomes an [`ExtractionError`] instead of a
/// silent default.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StructuredRecord {
    fields: Map<String, Value>,
}

impl StructuredRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Read a required text field.
    ///
    /// Absent and `null` fields are reported as missing; any other JSON type
    /// is reported as invalid.
    pub fn require_str(&self, field: &str) -> Result<&str, ExtractionError> {
        match self.fields.get(field) {
            None | Some(Value::Null) => Err(ExtractionError::missing(field)),
            Some(Value::String(s)) => Ok(s),
            Some(other) => Err(ExtractionError::InvalidField {
                field: field.to_string(),
                expected: "text",
                found: value_kind(other),
            }),
        }
    }

    /// Read an optional text field. Non-text values count as absent.
    pub fn optional_str(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    /// Read an optional list field as strings.
    ///
    /// Returns `None` unless the field is an array. Text, number and bool
    /// entries are kept (numbers and bools stringified); other entries are
    /// dropped.
    pub fn string_list(&self, field: &str) -> Option<Vec<String>> {
        let items = self.fields.get(field)?.as_array()?;
        Some(items.iter().filter_map(scalar_to_string).collect())
    }
}

impl From<Map<String, Value>> for StructuredRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "text",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> StructuredRecord {
        match value {
            Value::Object(map) => StructuredRecord::from(map),
            _ => panic!("test record must be an object"),
        }
    }

    #[test]
    fn test_require_str_present() {
        let r = record(json!({"draft": "hello"}));
        assert_eq!(r.require_str("draft").unwrap(), "hello");
    }

    #[test]
    fn test_require_str_missing_and_null() {
        let r = record(json!({"status": null}));
        assert!(matches!(
            r.require_str("draft"),
            Err(ExtractionError::MissingField(f)) if f == "draft"
        ));
        assert!(matches!(
            r.require_str("status"),
            Err(ExtractionError::MissingField(_))
        ));
    }

    #[test]
    fn test_require_str_wrong_type() {
        let r = record(json!({"draft": 42}));
        match r.require_str("draft") {
            Err(ExtractionError::InvalidField {
                field,
                expected,
                found,
            }) => {
                assert_eq!(field, "draft");
                assert_eq!(expected, "text");
                assert_eq!(found, "number");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_optional_str() {
        let r = record(json!({"response": "ok", "count": 3}));
        assert_eq!(r.optional_str("response"), Some("ok"));
        assert_eq!(r.optional_str("count"), None);
        assert_eq!(r.optional_str("absent"), None);
    }

    #[test]
    fn test_string_list_mixed_entries() {
        let r = record(json!({"sources": ["a", 2, true, null, {"x": 1}], "single": "a"}));
        assert_eq!(
            r.string_list("sources"),
            Some(vec!["a".to_string(), "2".to_string(), "true".to_string()])
        );
        assert_eq!(r.string_list("single"), None);
        assert_eq!(r.string_list("absent"), None);
    }
}
