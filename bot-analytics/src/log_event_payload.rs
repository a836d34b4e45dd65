use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LogEventPayload {
    pub api_key: String,
    pub events: Vec<Map<String, Value>>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ApiErrorDetails {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub code: Option<Value>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct LogEventResponse {
    #[serde(default)]
    pub ok: Option<Value>,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<ApiErrorDetails>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LogEventResponse {
    /// Mirrors JSON truthiness: missing, `null`, `false`, `0`, `""`, `[]` and
    /// `{}` all count as failure.
    pub fn is_ok(&self) -> bool {
        match &self.ok {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(a)) => !a.is_empty(),
            Some(Value::Object(o)) => !o.is_empty(),
        }
    }

    pub fn error_name(&self) -> String {
        display_field(self.error.as_ref().and_then(|e| e.name.as_ref()))
    }

    pub fn error_code(&self) -> String {
        display_field(self.error.as_ref().and_then(|e| e.code.as_ref()))
    }
}

/// Renders strings without quotes, absent fields as "unknown".
pub(crate) fn display_field(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "unknown".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
