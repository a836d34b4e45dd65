use super::{AnalyticsEvent, BaseEventBuilder};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// An immutable record of a single user or bot action.
#[derive(Clone, Debug, PartialEq)]
pub struct BaseEvent {
    pub(crate) event_type: String,
    pub(crate) user_id: Option<String>,
    pub(crate) device_id: Option<String>,
    pub(crate) time: i64,
    pub(crate) insert_id: String,
    pub(crate) event_properties: HashMap<String, Value>,
    pub(crate) user_properties: HashMap<String, Value>,
}

impl BaseEvent {
    #[must_use]
    pub fn builder(event_type: impl Into<String>) -> BaseEventBuilder {
        BaseEventBuilder::new(event_type)
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn device_id(&self) -> Option<&str> {
        self.device_id.as_deref()
    }

    /// Milliseconds since the unix epoch, captured when the event was built.
    pub fn time(&self) -> i64 {
        self.time
    }

    pub fn insert_id(&self) -> &str {
        &self.insert_id
    }

    pub fn event_properties(&self) -> &HashMap<String, Value> {
        &self.event_properties
    }

    pub fn user_properties(&self) -> &HashMap<String, Value> {
        &self.user_properties
    }
}

impl AnalyticsEvent for BaseEvent {
    fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(
            "event_type".to_string(),
            Value::String(self.event_type.clone()),
        );

        if let Some(user_id) = &self.user_id {
            map.insert("user_id".to_string(), Value::String(user_id.clone()));
        }

        if let Some(device_id) = &self.device_id {
            map.insert("device_id".to_string(), Value::String(device_id.clone()));
        }

        map.insert("time".to_string(), Value::from(self.time));
        map.insert(
            "insert_id".to_string(),
            Value::String(self.insert_id.clone()),
        );

        if !self.event_properties.is_empty() {
            map.insert(
                "event_properties".to_string(),
                properties_to_value(&self.event_properties),
            );
        }

        if !self.user_properties.is_empty() {
            map.insert(
                "user_properties".to_string(),
                properties_to_value(&self.user_properties),
            );
        }

        map
    }
}

fn properties_to_value(properties: &HashMap<String, Value>) -> Value {
    Value::Object(
        properties
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect(),
    )
}
