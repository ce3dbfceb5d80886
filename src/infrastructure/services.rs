use crate::domain::logging::{LogEntry, LogLevel, Logger, TimeProvider};
use chrono::DateTime;

/// Logger writing to the browser console on wasm32 and to stderr elsewhere
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    pub fn new_production() -> Self {
        Self::new(LogLevel::Info)
    }

    pub fn new_development() -> Self {
        Self::new(LogLevel::Debug)
    }

    pub fn format_log_entry(entry: &LogEntry) -> String {
        let timestamp = Self::format_timestamp(entry.timestamp_ms);
        match &entry.metadata {
            Some(metadata) => format!(
                "[{}] {} {} | {} | {}",
                timestamp, entry.level, entry.component, entry.message, metadata
            ),
            None => format!("[{}] {} {} | {}", timestamp, entry.level, entry.component, entry.message),
        }
    }

    fn format_timestamp(timestamp_ms: i64) -> String {
        DateTime::from_timestamp_millis(timestamp_ms)
            .map(|t| t.format("%H:%M:%S%.3f").to_string())
            .unwrap_or_else(|| format!("{timestamp_ms}ms"))
    }

    #[cfg(target_arch = "wasm32")]
    fn emit(level: LogLevel, line: &str) {
        let value = wasm_bindgen::JsValue::from_str(line);
        match level {
            LogLevel::Trace | LogLevel::Debug => web_sys::console::debug_1(&value),
            LogLevel::Info => web_sys::console::info_1(&value),
            LogLevel::Warn => web_sys::console::warn_1(&value),
            LogLevel::Error => web_sys::console::error_1(&value),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn emit(_level: LogLevel, line: &str) {
        eprintln!("{line}");
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, entry: LogEntry) {
        if entry.level >= self.min_level {
            Self::emit(entry.level, &Self::format_log_entry(&entry));
        }
    }
}

/// Wall clock used to stamp log entries
#[derive(Debug, Clone, Copy, Default)]
pub struct ClockTimeProvider;

impl ClockTimeProvider {
    pub fn new() -> Self {
        Self
    }
}

impl TimeProvider for ClockTimeProvider {
    #[cfg(target_arch = "wasm32")]
    fn now_millis(&self) -> i64 {
        js_sys::Date::now() as i64
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}
