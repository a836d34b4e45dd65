use log::Level;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;

const MAX_CHARS: usize = 400;
const TRUNCATED_SUFFIX: &str = "...[TRUNCATED]";
const LOCK_TIMEOUT: Duration = Duration::from_secs(5);

const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Warn;

lazy_static::lazy_static! {
    static ref LOGGER_STATE: RwLock<LoggerState> = RwLock::new(LoggerState::default());
}

struct LoggerState {
    initialized: bool,
    level: LogLevel,
    provider: Option<Arc<dyn OutputLogProvider>>,
}

impl Default for LoggerState {
    fn default() -> Self {
        Self {
            initialized: false,
            level: DEFAULT_LOG_LEVEL,
            provider: None,
        }
    }
}

/// Ordered by verbosity, so a message passes when its level is `<=` the configured one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    None = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
}

impl From<u32> for LogLevel {
    fn from(level: u32) -> Self {
        match level {
            0 => LogLevel::None,
            1 => LogLevel::Error,
            2 => LogLevel::Warn,
            3 => LogLevel::Info,
            4 => LogLevel::Debug,
            _ => DEFAULT_LOG_LEVEL,
        }
    }
}

impl LogLevel {
    fn to_third_party_level(self) -> Option<Level> {
        match self {
            LogLevel::Debug => Some(Level::Debug),
            LogLevel::Info => Some(Level::Info),
            LogLevel::Warn => Some(Level::Warn),
            LogLevel::Error => Some(Level::Error),
            LogLevel::None => None,
        }
    }
}

/// Receives every message that passes the level filter. Without one,
/// messages go to the `log` facade.
pub trait OutputLogProvider: Send + Sync {
    fn log(&self, level: LogLevel, tag: &str, msg: String);
}

/// Only the first call per process takes effect until `shutdown_output_logger`.
pub fn initialize_output_logger(
    level: &Option<LogLevel>,
    provider: Option<Arc<dyn OutputLogProvider>>,
) {
    let Some(mut state) = LOGGER_STATE.try_write_for(LOCK_TIMEOUT) else {
        eprintln!("[BotAnalytics] Failed to acquire write lock for logger state");
        return;
    };

    if state.initialized {
        return;
    }

    let level = level.unwrap_or(DEFAULT_LOG_LEVEL);
    state.initialized = true;
    state.level = level;

    if provider.is_some() {
        state.provider = provider;
        return;
    }

    if let Some(level) = level.to_third_party_level() {
        if simple_logger::init_with_level(level).is_err() {
            // the host already installed a logger
            log::set_max_level(level.to_level_filter());
        }
    }
}

pub fn shutdown_output_logger() {
    match LOGGER_STATE.try_write_for(LOCK_TIMEOUT) {
        Some(mut state) => *state = LoggerState::default(),
        None => eprintln!("[BotAnalytics] Failed to acquire write lock for logger state"),
    }
}

pub fn has_valid_log_level(level: &LogLevel) -> bool {
    match LOGGER_STATE.try_read_for(LOCK_TIMEOUT) {
        Some(state) => *level != LogLevel::None && *level <= state.level,
        None => false,
    }
}

pub fn log_message(tag: &str, level: LogLevel, msg: String) {
    let msg = truncate_message(msg);

    let provider = LOGGER_STATE
        .try_read_for(LOCK_TIMEOUT)
        .and_then(|state| state.provider.clone());

    if let Some(provider) = provider {
        provider.log(level, tag, msg);
        return;
    }

    if let Some(level) = level.to_third_party_level() {
        let target = format!("BotAnalytics::{tag}");
        log::log!(target: target.as_str(), level, "{}", msg);
    }
}

fn truncate_message(msg: String) -> String {
    if msg.chars().count() <= MAX_CHARS {
        return msg;
    }

    let visible_chars = MAX_CHARS - TRUNCATED_SUFFIX.len();
    let mut truncated: String = msg.chars().take(visible_chars).collect();
    truncated.push_str(TRUNCATED_SUFFIX);
    truncated
}

#[doc(hidden)]
#[macro_export]
macro_rules! log_at {
    ($level:expr, $tag:expr, $($arg:tt)*) => {
        {
            let level = $level;
            if $crate::output_logger::has_valid_log_level(&level) {
                $crate::output_logger::log_message($tag, level, format!($($arg)*));
            }
        }
    }
}

#[macro_export]
macro_rules! log_d {
    ($tag:expr, $($arg:tt)*) => {
        $crate::log_at!($crate::output_logger::LogLevel::Debug, $tag, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_i {
    ($tag:expr, $($arg:tt)*) => {
        $crate::log_at!($crate::output_logger::LogLevel::Info, $tag, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_w {
    ($tag:expr, $($arg:tt)*) => {
        $crate::log_at!($crate::output_logger::LogLevel::Warn, $tag, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_e {
    ($tag:expr, $($arg:tt)*) => {
        $crate::log_at!($crate::output_logger::LogLevel::Error, $tag, $($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_from_number() {
        assert_eq!(LogLevel::from(0), LogLevel::None);
        assert_eq!(LogLevel::from(3), LogLevel::Info);
        assert_eq!(LogLevel::from(42), LogLevel::Warn);
    }

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Error < LogLevel::Warn);
        assert!(LogLevel::Info < LogLevel::Debug);
    }

    #[test]
    fn test_short_message_is_untouched() {
        let msg = "got response | ok: true".to_string();
        assert_eq!(truncate_message(msg.clone()), msg);
    }

    #[test]
    fn test_long_message_is_truncated() {
        let truncated = truncate_message("a".repeat(1000));
        assert_eq!(truncated.chars().count(), MAX_CHARS);
        assert!(truncated.ends_with(TRUNCATED_SUFFIX));
    }
}
