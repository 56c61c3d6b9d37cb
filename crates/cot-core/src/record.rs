use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One dataset row: a JSON object with arbitrary fields.
///
/// Records pass through the pipeline as-is; the compression driver only
/// reads the configured text field and appends its derived fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(pub Map<String, Value>);

impl Record {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Identifier used in diagnostics. Stringifies whatever sits in `id`;
    /// empty when the field is missing.
    pub fn id(&self) -> String {
        match self.0.get("id") {
            Some(Value::String(s)) => s.clone(),
            Some(v) => v.to_string(),
            None => String::new(),
        }
    }

    /// Text under `field`, or "" when the field is absent or not a string.
    pub fn text(&self, field: &str) -> &str {
        self.0.get(field).and_then(Value::as_str).unwrap_or("")
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(v: serde_json::Value) -> Record {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn test_id_string() {
        let r = record(json!({"id": "abc", "cot": "text"}));
        assert_eq!(r.id(), "abc");
    }

    #[test]
    fn test_id_numeric() {
        let r = record(json!({"id": 42}));
        assert_eq!(r.id(), "42");
    }

    #[test]
    fn test_id_missing() {
        let r = record(json!({"cot": "text"}));
        assert_eq!(r.id(), "");
    }

    #[test]
    fn test_text_present() {
        let r = record(json!({"response": "step one. step two."}));
        assert_eq!(r.text("response"), "step one. step two.");
    }

    #[test]
    fn test_text_missing_is_empty() {
        let r = record(json!({"id": 1}));
        assert_eq!(r.text("response"), "");
    }

    #[test]
    fn test_text_non_string_is_empty() {
        let r = record(json!({"response": [1, 2, 3]}));
        assert_eq!(r.text("response"), "");
    }

    #[test]
    fn test_insert_and_get() {
        let mut r = Record::new();
        r.insert("compression_rate", json!(0.5));
        assert_eq!(r.get("compression_rate"), Some(&json!(0.5)));
        assert!(r.contains_key("compression_rate"));
        assert_eq!(r.len(), 1);
    }

    #[test]
    fn test_serde_transparent() {
        let r = record(json!({"id": 1, "cot": "x"}));
        let s = serde_json::to_string(&r).unwrap();
        let back: Record = serde_json::from_str(&s).unwrap();
        assert_eq!(r, back);
    }

    #[test]
    fn test_non_object_rejected() {
        assert!(serde_json::from_str::<Record>("[1,2]").is_err());
        assert!(serde_json::from_str::<Record>("\"str\"").is_err());
        assert!(serde_json::from_str::<Record>("5").is_err());
    }
}
