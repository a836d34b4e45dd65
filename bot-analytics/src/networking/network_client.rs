use super::providers::get_network_provider;
use super::{HttpMethod, NetworkError, NetworkProvider, RequestArgs};
use crate::log_d;
use std::collections::HashMap;
use std::sync::Arc;

const TAG: &str = stringify!(NetworkClient);

#[derive(Debug, Clone, PartialEq)]
pub struct NetworkResponse {
    pub status_code: u16,
    pub body: Vec<u8>,
}

/// Issues exactly one request per call. Nothing is retried or buffered.
pub struct NetworkClient {
    headers: HashMap<String, String>,
    net_provider: Arc<dyn NetworkProvider>,
}

impl NetworkClient {
    #[must_use]
    pub fn new(
        headers: Option<HashMap<String, String>>,
        net_provider: Option<Arc<dyn NetworkProvider>>,
    ) -> Self {
        NetworkClient {
            headers: headers.unwrap_or_default(),
            net_provider: net_provider.unwrap_or_else(get_network_provider),
        }
    }

    pub async fn post(
        &self,
        mut request_args: RequestArgs,
        body: Option<Vec<u8>>,
    ) -> Result<NetworkResponse, NetworkError> {
        request_args.body = body;
        self.make_request(HttpMethod::POST, request_args).await
    }

    async fn make_request(
        &self,
        method: HttpMethod,
        mut request_args: RequestArgs,
    ) -> Result<NetworkResponse, NetworkError> {
        request_args.populate_headers(self.headers.clone());

        log_d!(TAG, "{:?} {}", method, request_args.url);
        let response = self.net_provider.send(&method, &request_args).await;

        let status = response.status_code;
        let url = request_args.url;

        if status == 0 {
            let message = response
                .error
                .unwrap_or_else(|| get_error_message_for_status(status));
            return Err(NetworkError::TransportFailure(url, message));
        }

        if !(200..300).contains(&status) {
            let message = response
                .error
                .unwrap_or_else(|| get_error_message_for_status(status));
            return Err(NetworkError::RequestFailed(url, Some(status), message));
        }

        // decoding is left to the caller, a bad body is not a network failure
        Ok(NetworkResponse {
            status_code: status,
            body: response.data.unwrap_or_default(),
        })
    }
}

fn get_error_message_for_status(status: u16) -> String {
    match status {
        400 => "Bad Request".to_string(),
        401 => "Unauthorized".to_string(),
        403 => "Forbidden".to_string(),
        404 => "Not Found".to_string(),
        405 => "Method Not Allowed".to_string(),
        406 => "Not Acceptable".to_string(),
        408 => "Request Timeout".to_string(),
        413 => "Payload Too Large".to_string(),
        429 => "Too Many Requests".to_string(),
        500 => "Internal Server Error".to_string(),
        502 => "Bad Gateway".to_string(),
        503 => "Service Unavailable".to_string(),
        504 => "Gateway Timeout".to_string(),
        0 => "Unknown Error".to_string(),
        _ => format!("HTTP Error {status}"),
    }
}
