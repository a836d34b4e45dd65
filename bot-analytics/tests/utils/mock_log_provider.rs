use std::time::Duration;

use bot_analytics::output_logger::{LogLevel, OutputLogProvider};
use parking_lot::Mutex;

#[derive(Debug, PartialEq, Clone)]
pub enum RecordedLog {
    Debug(String, String),
    Info(String, String),
    Warn(String, String),
    Error(String, String),
}

pub struct MockLogProvider {
    pub logs: Mutex<Vec<RecordedLog>>,
}

impl MockLogProvider {
    pub fn new() -> Self {
        Self {
            logs: Mutex::new(Vec::new()),
        }
    }

    pub fn snapshot(&self) -> Vec<RecordedLog> {
        self.logs
            .try_lock_for(Duration::from_secs(5))
            .unwrap()
            .clone()
    }

    pub fn errors_containing(&self, pattern: &str) -> Vec<String> {
        self.snapshot()
            .into_iter()
            .filter_map(|log| match log {
                RecordedLog::Error(_, msg) if msg.contains(pattern) => Some(msg),
                _ => None,
            })
            .collect()
    }

    pub fn infos_containing(&self, pattern: &str) -> Vec<String> {
        self.snapshot()
            .into_iter()
            .filter_map(|log| match log {
                RecordedLog::Info(_, msg) if msg.contains(pattern) => Some(msg),
                _ => None,
            })
            .collect()
    }

    fn push(&self, log: RecordedLog) {
        self.logs
            .try_lock_for(Duration::from_secs(5))
            .unwrap()
            .push(log);
    }
}

impl OutputLogProvider for MockLogProvider {
    fn log(&self, level: LogLevel, tag: &str, msg: String) {
        let tag = tag.to_string();
        match level {
            LogLevel::Debug => self.push(RecordedLog::Debug(tag, msg)),
            LogLevel::Info => self.push(RecordedLog::Info(tag, msg)),
            LogLevel::Warn => self.push(RecordedLog::Warn(tag, msg)),
            LogLevel::Error => self.push(RecordedLog::Error(tag, msg)),
            LogLevel::None => {}
        }
    }
}
