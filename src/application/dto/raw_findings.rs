use crate::shared::error::BomError;
use crate::shared::Result;
use serde::Serialize;
use serde_json::{Map, Value};

/// Scanner output as handed to the exporter
///
/// The scanners emit JSON, but callers may hold it as an already parsed
/// value, as text, as raw bytes or as their own serializable type. All of
/// them are normalized into a JSON object before assembly starts.
#[derive(Debug, Clone)]
pub enum RawScan {
    Value(Value),
    Text(String),
    Bytes(Vec<u8>),
}

impl RawScan {
    /// Serializes any value into a raw scan.
    ///
    /// # Examples
    /// ```
    /// use zero_bom::application::dto::RawScan;
    /// use std::collections::HashMap;
    ///
    /// let mut findings = HashMap::new();
    /// findings.insert("findings", HashMap::<String, Vec<String>>::new());
    /// let raw = RawScan::from_serializable(&findings).unwrap();
    /// assert!(raw.into_document().is_ok());
    /// ```
    pub fn from_serializable<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        let value = serde_json::to_value(value).map_err(|e| BomError::InvalidInput {
            details: e.to_string(),
        })?;
        Ok(RawScan::Value(value))
    }

    /// Normalizes the scan into a findings document
    ///
    /// # Returns
    /// The document, or `BomError::InvalidInput` when the input is not a JSON object
    pub fn into_document(self) -> Result<FindingsDocument> {
        let value = match self {
            RawScan::Value(value) => value,
            RawScan::Text(text) => parse_value(text.as_bytes())?,
            RawScan::Bytes(bytes) => parse_value(&bytes)?,
        };

        match value {
            Value::Object(root) => Ok(FindingsDocument { root }),
            other => Err(BomError::InvalidInput {
                details: format!("expected a JSON object, found {}", kind_of(&other)),
            }
            .into()),
        }
    }
}

impl From<Value> for RawScan {
    fn from(value: Value) -> Self {
        RawScan::Value(value)
    }
}

impl From<Map<String, Value>> for RawScan {
    fn from(map: Map<String, Value>) -> Self {
        RawScan::Value(Value::Object(map))
    }
}

impl From<String> for RawScan {
    fn from(text: String) -> Self {
        RawScan::Text(text)
    }
}

impl From<&str> for RawScan {
    fn from(text: &str) -> Self {
        RawScan::Text(text.to_string())
    }
}

impl From<Vec<u8>> for RawScan {
    fn from(bytes: Vec<u8>) -> Self {
        RawScan::Bytes(bytes)
    }
}

impl From<&[u8]> for RawScan {
    fn from(bytes: &[u8]) -> Self {
        RawScan::Bytes(bytes.to_vec())
    }
}

fn parse_value(bytes: &[u8]) -> Result<Value> {
    serde_json::from_slice(bytes).map_err(|e| {
        BomError::InvalidInput {
            details: e.to_string(),
        }
        .into()
    })
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Normalized scanner output: the top-level JSON object
///
/// Accessors never fail. Missing or mistyped keys read as empty.
#[derive(Debug, Clone, Default)]
pub struct FindingsDocument {
    root: Map<String, Value>,
}

impl FindingsDocument {
    /// The `findings` object, if the scanner produced one.
    pub fn findings(&self) -> Finding<'_> {
        Finding::new(&self.root).object("findings").unwrap_or_default()
    }
}

/// Read-only view over one JSON object of scanner output
#[derive(Debug, Clone, Copy)]
pub struct Finding<'a> {
    fields: &'a Map<String, Value>,
}

static EMPTY: std::sync::OnceLock<Map<String, Value>> = std::sync::OnceLock::new();

impl Default for Finding<'_> {
    fn default() -> Self {
        Self {
            fields: EMPTY.get_or_init(Map::new),
        }
    }
}

impl<'a> Finding<'a> {
    pub fn new(fields: &'a Map<String, Value>) -> Self {
        Self { fields }
    }

    /// String field; empty when absent or not a string.
    pub fn str(&self, key: &str) -> &'a str {
        self.fields.get(key).and_then(Value::as_str).unwrap_or("")
    }

    /// Unsigned integer field
    ///
    /// Scanners emit numbers as integers or floats (`10` or `10.0`); both
    /// are accepted. Negative, out-of-range and non-numeric values read as 0.
    pub fn u32(&self, key: &str) -> u32 {
        match self.fields.get(key) {
            Some(Value::Number(n)) => n
                .as_u64()
                .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
                .and_then(|v| u32::try_from(v).ok())
                .unwrap_or(0),
            _ => 0,
        }
    }

    pub fn bool(&self, key: &str) -> bool {
        self.fields.get(key).and_then(Value::as_bool).unwrap_or(false)
    }

    pub fn object(&self, key: &str) -> Option<Finding<'a>> {
        self.fields
            .get(key)
            .and_then(Value::as_object)
            .map(Finding::new)
    }

    /// String elements of an array field; other elements are skipped.
    pub fn strings(&self, key: &str) -> Vec<&'a str> {
        self.fields
            .get(key)
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// Object entries of an array field, in order
    ///
    /// Entries that are not objects are skipped, as is a field that is not an array.
    pub fn section(&self, key: &str) -> Vec<Finding<'a>> {
        self.fields
            .get(key)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_object)
                    .map(Finding::new)
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_into_document_from_value() {
        let raw = RawScan::from(json!({"findings": {"ciphers": []}}));
        let document = raw.into_document().unwrap();
        assert!(document.findings().section("ciphers").is_empty());
    }

    #[test]
    fn test_into_document_from_text_and_bytes() {
        let text = r#"{"findings": {"ciphers": [{"algorithm": "DES"}]}}"#;

        let from_text = RawScan::from(text).into_document().unwrap();
        let from_bytes = RawScan::from(text.as_bytes()).into_document().unwrap();

        assert_eq!(from_text.findings().section("ciphers")[0].str("algorithm"), "DES");
        assert_eq!(from_bytes.findings().section("ciphers")[0].str("algorithm"), "DES");
    }

    #[test]
    fn test_into_document_rejects_invalid_json() {
        let result = RawScan::from("not json").into_document();
        assert!(result.is_err());
        let message = format!("{}", result.unwrap_err());
        assert!(message.contains("Invalid scanner input"));
    }

    #[test]
    fn test_into_document_rejects_non_object() {
        let result = RawScan::from(json!([1, 2, 3])).into_document();
        let message = format!("{}", result.unwrap_err());
        assert!(message.contains("found an array"));
    }

    #[test]
    fn test_from_serializable() {
        #[derive(Serialize)]
        struct Scan {
            findings: Vec<u8>,
        }
        let raw = RawScan::from_serializable(&Scan { findings: vec![] }).unwrap();
        let document = raw.into_document().unwrap();
        // findings is an array, not an object: reads as empty
        assert!(document.findings().section("ciphers").is_empty());
    }

    #[test]
    fn test_missing_findings_reads_as_empty() {
        let document = RawScan::from(json!({})).into_document().unwrap();
        assert!(document.findings().section("models").is_empty());
        assert!(document.findings().object("certificates").is_none());
    }

    #[test]
    fn test_section_skips_non_object_entries() {
        let document = RawScan::from(json!({
            "findings": {"keys": [{"type": "rsa"}, "junk", 42, null, {"type": "aes"}]}
        }))
        .into_document()
        .unwrap();

        let keys = document.findings().section("keys");
        assert_eq!(keys.len(), 2);
        assert_eq!(keys[1].str("type"), "aes");
    }

    #[test]
    fn test_section_on_mistyped_field() {
        let document = RawScan::from(json!({"findings": {"tls": "nope"}}))
            .into_document()
            .unwrap();
        assert!(document.findings().section("tls").is_empty());
    }

    #[test]
    fn test_u32_accepts_int_and_float() {
        let value = json!({"a": 10, "b": 2048.0, "c": -1, "d": "12", "e": 1e12});
        let finding = Finding::new(value.as_object().unwrap());

        assert_eq!(finding.u32("a"), 10);
        assert_eq!(finding.u32("b"), 2048);
        assert_eq!(finding.u32("c"), 0);
        assert_eq!(finding.u32("d"), 0);
        assert_eq!(finding.u32("e"), 0);
        assert_eq!(finding.u32("missing"), 0);
    }

    #[test]
    fn test_str_bool_and_strings() {
        let value = json!({
            "name": "bert",
            "flag": true,
            "count": 3,
            "datasets": ["mnist", 7, "imagenet"]
        });
        let finding = Finding::new(value.as_object().unwrap());

        assert_eq!(finding.str("name"), "bert");
        assert_eq!(finding.str("count"), "");
        assert!(finding.bool("flag"));
        assert!(!finding.bool("name"));
        assert_eq!(finding.strings("datasets"), vec!["mnist", "imagenet"]);
        assert!(finding.strings("missing").is_empty());
    }
}
