use serde_json::{Map, Value};

/// Anything the bot wants recorded. `to_map` produces the object placed in
/// the `events` array of the outgoing payload.
pub trait AnalyticsEvent: Send + Sync {
    fn to_map(&self) -> Map<String, Value>;
}

impl AnalyticsEvent for Map<String, Value> {
    fn to_map(&self) -> Map<String, Value> {
        self.clone()
    }
}
