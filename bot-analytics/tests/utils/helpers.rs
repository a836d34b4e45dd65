use std::net::TcpListener;
use std::sync::Arc;

use bot_analytics::output_logger::{LogLevel, OutputLogProvider};
use bot_analytics::AnalyticsOptions;
use serde_json::Value;
use wiremock::Request;

use super::mock_log_provider::MockLogProvider;

lazy_static::lazy_static! {
    // The output logger is process wide, so every client in a test binary shares one provider.
    static ref LOG_PROVIDER: Arc<MockLogProvider> = Arc::new(MockLogProvider::new());
}

pub fn shared_log_provider() -> Arc<MockLogProvider> {
    LOG_PROVIDER.clone()
}

pub fn options_for(url: &str) -> AnalyticsOptions {
    let provider: Arc<dyn OutputLogProvider> = shared_log_provider();
    AnalyticsOptions {
        base_url: Some(url.to_string()),
        output_log_level: Some(LogLevel::Debug),
        output_logger_provider: Some(provider),
        ..AnalyticsOptions::default()
    }
}

/// A local address with nothing listening on it.
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    format!("http://127.0.0.1:{port}/collect")
}

pub fn body_json(request: &Request) -> Value {
    serde_json::from_slice(&request.body).unwrap()
}

pub fn header(request: &Request, name: &str) -> String {
    request.headers[name].to_str().unwrap().to_string()
}
