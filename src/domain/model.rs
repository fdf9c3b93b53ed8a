use crate::utils::error::{IngestError, Result};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// A customer record as it travels between stages: the raw attribute map,
/// serialized exactly as received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    pub data: Map<String, Value>,
}

impl Record {
    pub fn new(data: Map<String, Value>) -> Self {
        Self { data }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.data.get(field)
    }
}

impl From<Map<String, Value>> for Record {
    fn from(data: Map<String, Value>) -> Self {
        Self { data }
    }
}

impl TryFrom<Value> for Record {
    type Error = IngestError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(data) => Ok(Self { data }),
            other => Err(IngestError::invalid_input(format!(
                "record must be an object, got {}",
                json_type_name(&other)
            ))),
        }
    }
}

/// Splits an event payload into its elements. Anything other than a JSON
/// array is malformed input.
pub fn payload_items(payload: Value) -> Result<Vec<Value>> {
    match payload {
        Value::Array(items) => Ok(items),
        other => Err(IngestError::invalid_input(format!(
            "expected an array of records, got {}",
            json_type_name(&other)
        ))),
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Outcome of a persister run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PersistSummary {
    pub stored: usize,
}

impl PersistSummary {
    pub fn message(&self) -> String {
        format!(
            "{} Marketing interests records stored successfully",
            self.stored
        )
    }

    pub fn into_response(self) -> StageResponse {
        StageResponse::Status {
            status_code: 200,
            body: self.message(),
        }
    }
}

/// Counts reported by [`crate::core::engine::IngestEngine`] after a full chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    pub received: usize,
    pub valid: usize,
    pub unique: usize,
    pub stored: usize,
}

/// Wire response of a stage invocation.
///
/// Serializes to one of the three shapes callers branch on: a bare array of
/// records, the `{"result": "invalid"}` sentinel, or a `statusCode`/`body` object.
#[derive(Debug, Clone, PartialEq)]
pub enum StageResponse {
    Records(Vec<Record>),
    Invalid,
    Status { status_code: u16, body: String },
}

impl StageResponse {
    pub fn failure(error: &IngestError) -> Self {
        StageResponse::Status {
            status_code: 500,
            body: format!("An error occurred: {}", error),
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            StageResponse::Status { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}

impl Serialize for StageResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            StageResponse::Records(records) => records.serialize(serializer),
            StageResponse::Invalid => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("result", "invalid")?;
                map.end()
            }
            StageResponse::Status { status_code, body } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("statusCode", status_code)?;
                map.serialize_entry("body", body)?;
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_serializes_as_plain_mapping() {
        let record = Record::try_from(json!({"Email": "a@x.com", "v": 1})).unwrap();
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"Email": "a@x.com", "v": 1})
        );
    }

    #[test]
    fn test_record_rejects_non_object() {
        let err = Record::try_from(json!("a@x.com")).unwrap_err();
        assert!(err.to_string().contains("got string"));
    }

    #[test]
    fn test_payload_items_requires_array() {
        assert_eq!(payload_items(json!([1, 2])).unwrap().len(), 2);
        assert!(payload_items(json!({"Email": "a@x.com"})).is_err());
    }

    #[test]
    fn test_persist_summary_response() {
        let response = PersistSummary { stored: 1 }.into_response();
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"statusCode": 200, "body": "1 Marketing interests records stored successfully"})
        );
    }

    #[test]
    fn test_records_response_is_bare_array() {
        let response = StageResponse::Records(vec![Record::default()]);
        assert_eq!(serde_json::to_value(&response).unwrap(), json!([{}]));
        assert_eq!(response.status_code(), None);
    }
}
