use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;

use crate::{
    log_w,
    networking::{HttpMethod, NetworkProvider, RequestArgs, Response},
};

const TAG: &str = "NetworkProviderReqwest";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub struct NetworkProviderReqwest {}

#[async_trait]
impl NetworkProvider for NetworkProviderReqwest {
    async fn send(&self, method: &HttpMethod, args: &RequestArgs) -> Response {
        // The client lives only for this call, so its connection pool is
        // released on every exit path.
        let client = reqwest::Client::new();
        let request = self.build_request(&client, method, args);

        let error;
        let mut status_code = 0;
        let mut data = None;

        match request.send().await {
            Ok(response) => {
                status_code = response.status().as_u16();
                match response.bytes().await {
                    Ok(bytes) => {
                        data = Some(bytes.to_vec());
                        error = None;
                    }
                    Err(e) => {
                        // body was cut off, report it as a transport failure
                        let error_message = get_error_message(e);
                        log_w!(TAG, "Failed to read response body: {} {}", args.url, error_message);
                        status_code = 0;
                        error = Some(error_message);
                    }
                }
            }
            Err(e) => {
                let error_message = get_error_message(e);
                log_w!(TAG, "Request Error: {} {}", args.url, error_message);
                error = Some(error_message);
            }
        }

        Response {
            status_code,
            data,
            error,
        }
    }
}

impl NetworkProviderReqwest {
    fn build_request(
        &self,
        client: &reqwest::Client,
        method: &HttpMethod,
        request_args: &RequestArgs,
    ) -> reqwest::RequestBuilder {
        let method_actual = match method {
            HttpMethod::POST => Method::POST,
        };

        let mut request = client.request(method_actual, &request_args.url);

        let timeout_duration = match request_args.timeout_ms > 0 {
            true => Duration::from_millis(request_args.timeout_ms),
            false => DEFAULT_TIMEOUT,
        };
        request = request.timeout(timeout_duration);

        if let Some(headers) = &request_args.headers {
            for (key, value) in headers {
                request = request.header(key, value);
            }
        }

        let bytes = request_args.body.clone().unwrap_or_default();
        let byte_len = bytes.len();

        request = request.body(bytes);
        request.header("Content-Length", byte_len.to_string())
    }
}

fn get_error_message(error: reqwest::Error) -> String {
    let mut error_message = error.to_string();

    if error.is_timeout() {
        error_message.push_str(". Timed out");
    } else if error.is_connect() {
        error_message.push_str(". Connection failed");
    }

    if let Some(status_error) = error.status() {
        error_message.push_str(&format!(". Status: {}", status_error));
    }

    error_message
}
