use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DepartmentOption {
    pub id: i64,
    pub name: String,
}

/// Body of the department listing. A missing or non-array `items` is
/// malformed; individual entries of the wrong shape are skipped.
#[derive(Debug, Deserialize)]
pub struct DepartmentList {
    items: Vec<Value>,
}

impl DepartmentList {
    pub fn into_options(self) -> Vec<DepartmentOption> {
        self.items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultStatus {
    Ok,
    Other(String),
}

impl From<Option<&Value>> for ResultStatus {
    fn from(value: Option<&Value>) -> Self {
        match value {
            Some(Value::String(s)) if s == "ok" => ResultStatus::Ok,
            Some(Value::String(s)) => ResultStatus::Other(s.clone()),
            Some(Value::Null) | None => ResultStatus::Other(String::new()),
            Some(other) => ResultStatus::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ValidationResult {
    pub filename: String,
    #[serde(default)]
    pub status: Option<Value>,
    #[serde(default)]
    pub reason: Option<Value>,
}

impl ValidationResult {
    pub fn result_status(&self) -> ResultStatus {
        ResultStatus::from(self.status.as_ref())
    }

    /// Null and empty strings count as no reason.
    pub fn failure_reason(&self) -> Option<String> {
        match self.reason.as_ref()? {
            Value::Null => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchResponse {
    pub results: Vec<ValidationResult>,
}

impl BatchResponse {
    /// Anything that is not a results array counts as no results, and
    /// entries without a string filename are skipped.
    pub fn from_value(value: Value) -> Self {
        let results = match value {
            Value::Object(mut map) => match map.remove("results") {
                Some(Value::Array(entries)) => entries
                    .into_iter()
                    .filter_map(|entry| serde_json::from_value(entry).ok())
                    .collect(),
                _ => Vec::new(),
            },
            _ => Vec::new(),
        };
        Self { results }
    }
}
