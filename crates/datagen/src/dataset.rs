//! Records and datasets.
//!
//! A `Record` is an insertion-ordered map from field name to scalar value.
//! A `Dataset` is an ordered list of records whose field set is taken from the
//! first record.

use serde::Serialize;
use serde_json::Value;

/// Field name → value, insertion ordered.
pub type Record = serde_json::Map<String, Value>;

#[derive(Debug)]
pub enum DatasetError {
    /// Input is not valid JSON.
    Parse(String),
}

impl std::fmt::Display for DatasetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "dataset parse error: {msg}"),
        }
    }
}

impl std::error::Error for DatasetError {}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Interpret an arbitrary JSON value as a dataset.
    ///
    /// Anything other than a non-empty array of objects is malformed and
    /// yields an empty dataset.
    pub fn from_value(value: Value) -> Self {
        let Value::Array(items) = value else {
            tracing::warn!("dataset is not an array; treating as empty");
            return Self::default();
        };

        let mut records = Vec::with_capacity(items.len());
        for item in items {
            match item {
                Value::Object(map) => records.push(map),
                other => {
                    tracing::warn!(entry = %other, "dataset entry is not an object; treating dataset as empty");
                    return Self::default();
                }
            }
        }
        Self { records }
    }

    /// Parse JSON text. Syntax errors fail; shape errors yield an empty dataset.
    pub fn from_json(input: &str) -> Result<Self, DatasetError> {
        let value: Value =
            serde_json::from_str(input).map_err(|e| DatasetError::Parse(e.to_string()))?;
        Ok(Self::from_value(value))
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Field names of the first record, in order.
    pub fn fields(&self) -> Vec<&str> {
        self.records
            .first()
            .map(|r| r.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Header row followed by one row per record, all stringified.
    ///
    /// Values follow the first record's field order; a record missing one of
    /// those fields contributes an empty string.
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        let fields = self.fields();
        if fields.is_empty() {
            return Vec::new();
        }

        let mut rows = Vec::with_capacity(self.records.len() + 1);
        rows.push(fields.iter().map(|f| f.to_string()).collect());
        for record in &self.records {
            rows.push(
                fields
                    .iter()
                    .map(|f| record.get(*f).map(stringify).unwrap_or_default())
                    .collect(),
            );
        }
        rows
    }
}

impl From<Vec<Record>> for Dataset {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

/// Text written into a cell for `value`. `null` becomes the empty string.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rows_start_with_header() {
        let ds = Dataset::from_value(json!([
            {"Name": "Ada", "Age": 36},
            {"Name": "Linus", "Age": null},
        ]));
        assert_eq!(
            ds.to_rows(),
            vec![
                vec!["Name", "Age"],
                vec!["Ada", "36"],
                vec!["Linus", ""],
            ]
        );
    }

    #[test]
    fn field_order_follows_first_record() {
        let ds = Dataset::from_value(json!([
            {"B": 1, "A": 2},
            {"A": 3, "B": 4, "C": 5},
        ]));
        assert_eq!(ds.fields(), vec!["B", "A"]);
        assert_eq!(ds.to_rows()[2], vec!["4", "3"]);
    }

    #[test]
    fn missing_field_is_empty() {
        let ds = Dataset::from_value(json!([{"A": "x", "B": "y"}, {"A": "z"}]));
        assert_eq!(ds.to_rows()[2], vec!["z", ""]);
    }

    #[test]
    fn stringify_scalars() {
        assert_eq!(stringify(&json!(5)), "5");
        assert_eq!(stringify(&json!(2.5)), "2.5");
        assert_eq!(stringify(&json!(null)), "");
        assert_eq!(stringify(&json!(true)), "true");
        assert_eq!(stringify(&json!("text")), "text");
        assert_eq!(stringify(&json!([1, 2])), "[1,2]");
    }

    #[test]
    fn malformed_shapes_are_empty() {
        assert!(Dataset::from_value(json!({"A": 1})).is_empty());
        assert!(Dataset::from_value(json!("rows")).is_empty());
        assert!(Dataset::from_value(json!([{"A": 1}, 2])).is_empty());
        assert!(Dataset::from_value(json!([])).to_rows().is_empty());
    }

    #[test]
    fn syntax_error_is_reported() {
        let err = Dataset::from_json("[{").unwrap_err();
        assert!(err.to_string().starts_with("dataset parse error"));
    }

    #[test]
    fn serializes_as_plain_array() {
        let ds = Dataset::from_value(json!([{"A": 1}]));
        assert_eq!(serde_json::to_string(&ds).unwrap(), r#"[{"A":1}]"#);
    }
}
