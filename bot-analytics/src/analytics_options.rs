use crate::networking::NetworkProvider;
use crate::output_logger::{LogLevel, OutputLogProvider};
use std::fmt;
use std::sync::Arc;

pub const GOOGLE_ANALYTICS_ENDPOINT: &str = "https://www.google-analytics.com";
pub const DEFAULT_PROVIDER_NAME: &str = "Google Analytics";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

#[derive(Clone, Default)]
pub struct AnalyticsOptions {
    pub base_url: Option<String>, // Collection endpoint, defaults to GOOGLE_ANALYTICS_ENDPOINT
    pub provider_name: Option<String>, // Used in ApiError messages
    pub request_timeout_ms: Option<u64>,

    pub network_provider: Option<Arc<dyn NetworkProvider>>,

    pub output_log_level: Option<LogLevel>,
    pub output_logger_provider: Option<Arc<dyn OutputLogProvider>>,
}

impl AnalyticsOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn builder() -> AnalyticsOptionsBuilder {
        AnalyticsOptionsBuilder::default()
    }

    pub(crate) fn base_url_or_default(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| GOOGLE_ANALYTICS_ENDPOINT.to_string())
    }

    pub(crate) fn provider_name_or_default(&self) -> String {
        self.provider_name
            .clone()
            .unwrap_or_else(|| DEFAULT_PROVIDER_NAME.to_string())
    }

    pub(crate) fn request_timeout_ms_or_default(&self) -> u64 {
        match self.request_timeout_ms {
            Some(ms) if ms > 0 => ms,
            _ => DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

#[derive(Default)]
pub struct AnalyticsOptionsBuilder {
    inner: AnalyticsOptions,
}

impl AnalyticsOptionsBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // Endpoint

    #[must_use]
    pub fn base_url(mut self, base_url: Option<String>) -> Self {
        self.inner.base_url = base_url;
        self
    }

    #[must_use]
    pub fn provider_name(mut self, provider_name: Option<String>) -> Self {
        self.inner.provider_name = provider_name;
        self
    }

    #[must_use]
    pub fn request_timeout_ms(mut self, request_timeout_ms: Option<u64>) -> Self {
        self.inner.request_timeout_ms = request_timeout_ms;
        self
    }

    #[must_use]
    pub fn network_provider(mut self, network_provider: Option<Arc<dyn NetworkProvider>>) -> Self {
        self.inner.network_provider = network_provider;
        self
    }

    // Logging

    #[must_use]
    pub fn output_log_level(mut self, output_log_level: Option<u32>) -> Self {
        if let Some(level) = output_log_level {
            self.inner.output_log_level = Some(LogLevel::from(level));
        }
        self
    }

    #[must_use]
    pub fn output_logger_provider(
        mut self,
        output_logger_provider: Option<Arc<dyn OutputLogProvider>>,
    ) -> Self {
        self.inner.output_logger_provider = output_logger_provider;
        self
    }

    #[must_use]
    pub fn build(self) -> AnalyticsOptions {
        self.inner
    }
}

impl fmt::Debug for AnalyticsOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalyticsOptions")
            .field("base_url", &self.base_url)
            .field("provider_name", &self.provider_name)
            .field("request_timeout_ms", &self.request_timeout_ms)
            .field(
                "network_provider",
                &self.network_provider.as_ref().map(|_| "<provider>"),
            )
            .field("output_log_level", &self.output_log_level)
            .field(
                "output_logger_provider",
                &self.output_logger_provider.as_ref().map(|_| "<provider>"),
            )
            .finish()
    }
}
