use super::BaseEvent;
use chrono::Utc;
use serde_json::Value;
use std::collections::HashMap;
use uuid::Uuid;

pub struct BaseEventBuilder {
    pub event_type: String,
    pub user_id: Option<String>,
    pub device_id: Option<String>,
    pub time: Option<i64>,
    pub event_properties: HashMap<String, Value>,
    pub user_properties: HashMap<String, Value>,
}

impl BaseEventBuilder {
    #[must_use]
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            user_id: None,
            device_id: None,
            time: None,
            event_properties: HashMap::new(),
            user_properties: HashMap::new(),
        }
    }

    #[must_use]
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    #[must_use]
    pub fn device_id(mut self, device_id: impl Into<String>) -> Self {
        self.device_id = Some(device_id.into());
        self
    }

    /// Overrides the capture time. Defaults to now.
    #[must_use]
    pub fn time(mut self, time_ms: i64) -> Self {
        self.time = Some(time_ms);
        self
    }

    #[must_use]
    pub fn event_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.event_properties.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn event_properties(
        mut self,
        properties: HashMap<impl Into<String>, impl Into<Value>>,
    ) -> Self {
        self.event_properties
            .extend(properties.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    #[must_use]
    pub fn user_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.user_properties.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn build(self) -> BaseEvent {
        BaseEvent {
            event_type: self.event_type,
            user_id: self.user_id,
            device_id: self.device_id,
            time: self.time.unwrap_or_else(|| Utc::now().timestamp_millis()),
            insert_id: Uuid::new_v4().to_string(),
            event_properties: self.event_properties,
            user_properties: self.user_properties,
        }
    }
}
