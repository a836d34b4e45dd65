use serde::Serialize;
use std::fmt;

type RequestUrl = String;

#[derive(PartialEq, Debug, Clone, Serialize)]
pub enum NetworkError {
    TransportFailure(RequestUrl, String),
    RequestFailed(RequestUrl, Option<u16>, String),
}

impl NetworkError {
    pub fn name(&self) -> &'static str {
        match self {
            NetworkError::TransportFailure(_, _) => "TransportFailure",
            NetworkError::RequestFailed(_, _, _) => "RequestFailed",
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::TransportFailure(url, message) => {
                write!(f, "TransportFailure: {url} {message}")
            }
            NetworkError::RequestFailed(url, status, message) => {
                let status_display = match status {
                    Some(code) => code.to_string(),
                    None => "None".to_string(),
                };
                write!(f, "RequestFailed: {url} {status_display} {message}")
            }
        }
    }
}
