use crate::analytics_logger::AnalyticsLogger;
use crate::analytics_options::AnalyticsOptions;
use crate::event::AnalyticsEvent;
use crate::log_event_payload::{display_field, LogEventPayload, LogEventResponse};
use crate::networking::{NetworkClient, RequestArgs};
use crate::output_logger::initialize_output_logger;
use crate::{log_d, log_e, log_i, AnalyticsErr};
use async_trait::async_trait;
use std::collections::HashMap;

const TAG: &str = stringify!(AnalyticsClient);

/// Sends each event to the collection endpoint in its own POST request.
pub struct AnalyticsClient {
    api_secret: String,
    measurement_id: String,
    base_url: String,
    provider_name: String,
    request_timeout_ms: u64,
    network: NetworkClient,
}

impl AnalyticsClient {
    #[must_use]
    pub fn new(api_secret: &str, measurement_id: &str, options: Option<AnalyticsOptions>) -> Self {
        let options = options.unwrap_or_default();

        initialize_output_logger(
            &options.output_log_level,
            options.output_logger_provider.clone(),
        );

        let headers = HashMap::from([
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Accept".to_string(), "*/*".to_string()),
        ]);

        Self {
            api_secret: api_secret.to_string(),
            measurement_id: measurement_id.to_string(),
            base_url: options.base_url_or_default(),
            provider_name: options.provider_name_or_default(),
            request_timeout_ms: options.request_timeout_ms_or_default(),
            network: NetworkClient::new(Some(headers), options.network_provider.clone()),
        }
    }

    pub fn measurement_id(&self) -> &str {
        &self.measurement_id
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends `event` and returns the parsed response. Transport and HTTP
    /// status failures are dropped after being logged.
    pub async fn log_event(
        &self,
        event: &dyn AnalyticsEvent,
    ) -> Result<Option<LogEventResponse>, AnalyticsErr> {
        match self.send_event(event).await {
            Ok(response) => Ok(Some(response)),
            Err(e) if e.is_network_error() => {
                log_e!(
                    TAG,
                    "Failed to send event to {} | {}",
                    self.provider_name,
                    e
                );
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Same request as `log_event`, but every failure is returned to the caller.
    pub async fn send_event(
        &self,
        event: &dyn AnalyticsEvent,
    ) -> Result<LogEventResponse, AnalyticsErr> {
        let payload = LogEventPayload {
            api_key: self.api_secret.clone(),
            events: vec![event.to_map()],
        };

        let body = serde_json::to_vec(&payload)
            .map_err(|e| AnalyticsErr::SerializationError(e.to_string()))?;

        log_d!(
            TAG,
            "Logging Events ({}) to {} | measurement_id: {}",
            payload.events.len(),
            self.base_url,
            self.measurement_id
        );

        let response = self
            .network
            .post(
                RequestArgs {
                    url: self.base_url.clone(),
                    timeout_ms: self.request_timeout_ms,
                    ..RequestArgs::default()
                },
                Some(body),
            )
            .await?;

        let parsed = serde_json::from_slice::<LogEventResponse>(&response.body).map_err(|e| {
            log_e!(
                TAG,
                "Malformed response from {} | status: {} | {}",
                self.provider_name,
                response.status_code,
                e
            );
            AnalyticsErr::JsonParseError(stringify!(LogEventResponse).to_string(), e.to_string())
        })?;

        Self::validate_response(&self.provider_name, response.status_code, parsed)
    }

    pub(crate) fn validate_response(
        provider_name: &str,
        status_code: u16,
        response: LogEventResponse,
    ) -> Result<LogEventResponse, AnalyticsErr> {
        if !response.is_ok() {
            let name = response.error_name();
            let code = response.error_code();

            log_e!(
                TAG,
                "got error from {} api | name: {} | code: {}",
                provider_name,
                name,
                code
            );

            return Err(AnalyticsErr::ApiError {
                provider: provider_name.to_string(),
                name,
                code,
            });
        }

        log_i!(
            TAG,
            "got response | status: {} | ok: {} | result: {}",
            status_code,
            display_field(response.ok.as_ref()),
            display_field(response.result.as_ref())
        );

        Ok(response)
    }
}

#[async_trait]
impl AnalyticsLogger for AnalyticsClient {
    async fn log_event(
        &self,
        event: &dyn AnalyticsEvent,
    ) -> Result<Option<LogEventResponse>, AnalyticsErr> {
        AnalyticsClient::log_event(self, event).await
    }
}
