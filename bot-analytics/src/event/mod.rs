pub mod analytics_event;
pub mod base_event;
pub mod base_event_builder;

pub use analytics_event::AnalyticsEvent;
pub use base_event::BaseEvent;
pub use base_event_builder::BaseEventBuilder;
