pub use analytics_client::AnalyticsClient;
pub use analytics_err::AnalyticsErr;
pub use analytics_logger::AnalyticsLogger;
pub use analytics_options::{
    AnalyticsOptions, AnalyticsOptionsBuilder, DEFAULT_REQUEST_TIMEOUT_MS,
    GOOGLE_ANALYTICS_ENDPOINT,
};
pub use event::{AnalyticsEvent, BaseEvent, BaseEventBuilder};
pub use log_event_payload::{ApiErrorDetails, LogEventPayload, LogEventResponse};

pub mod analytics_options;
pub mod event;
pub mod log_event_payload;
pub mod networking;
pub mod output_logger;

mod analytics_client;
mod analytics_err;
mod analytics_logger;
