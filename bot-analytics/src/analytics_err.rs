use crate::networking::NetworkError;
use serde::Serialize;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum AnalyticsErr {
    // Network
    NetworkError(NetworkError),

    // Data Format / Serialization / Parsing
    SerializationError(String),
    JsonParseError(String, String),

    // Collection endpoint rejected the event
    ApiError {
        provider: String,
        name: String,
        code: String,
    },
}

impl Display for AnalyticsErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalyticsErr::NetworkError(error) => write!(f, "NetworkError|{error}"),

            AnalyticsErr::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            AnalyticsErr::JsonParseError(type_name, err_msg) => {
                write!(f, "Failed to parse JSON {type_name} - {err_msg}")
            }

            AnalyticsErr::ApiError {
                provider,
                name,
                code,
            } => write!(f, "Error in {provider} API call | name: {name} | code: {code}"),
        }
    }
}

impl std::error::Error for AnalyticsErr {}

impl From<NetworkError> for AnalyticsErr {
    fn from(error: NetworkError) -> Self {
        AnalyticsErr::NetworkError(error)
    }
}

impl AnalyticsErr {
    pub fn name(&self) -> &'static str {
        match self {
            AnalyticsErr::NetworkError(e) => e.name(),

            AnalyticsErr::SerializationError(_) => "SerializationError",
            AnalyticsErr::JsonParseError(_, _) => "JsonParseError",

            AnalyticsErr::ApiError { .. } => "ApiError",
        }
    }

    /// Transport and HTTP status failures. `log_event` absorbs these.
    pub fn is_network_error(&self) -> bool {
        matches!(self, AnalyticsErr::NetworkError(_))
    }
}
