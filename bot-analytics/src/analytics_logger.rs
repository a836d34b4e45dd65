use crate::event::AnalyticsEvent;
use crate::log_event_payload::LogEventResponse;
use crate::AnalyticsErr;
use async_trait::async_trait;

/// Capability implemented by every analytics backend the bot can log to.
///
/// `Ok(None)` means the event was dropped after a logged transport or HTTP
/// failure. Only a rejected or malformed response body is returned as `Err`.
#[async_trait]
pub trait AnalyticsLogger: Send + Sync {
    async fn log_event(
        &self,
        event: &dyn AnalyticsEvent,
    ) -> Result<Option<LogEventResponse>, AnalyticsErr>;
}
