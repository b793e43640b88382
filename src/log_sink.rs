// log_sink.rs - Structured boot logging
// Purpose: Trusted runtime logging of guard decisions around the boot path

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// LogLevel classifies the severity of log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

/// LogEvent is a structured record of boot-path activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEvent {
    pub trace_id: String,
    pub component: String,
    pub event_type: String,
    pub context: String,
    pub level: LogLevel,
    pub timestamp: DateTime<Utc>,
}

impl LogEvent {
    pub fn new(component: &str, event_type: &str, context: impl Into<String>) -> Self {
        Self {
            trace_id: Uuid::new_v4().to_string(),
            component: component.to_string(),
            event_type: event_type.to_string(),
            context: context.into(),
            level: LogLevel::Info,
            timestamp: Utc::now(),
        }
    }

    /// Sets log severity
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Emit this log event to stderr. The guard core never calls this;
    /// logging stays with the embedding caller.
    pub fn emit(&self) {
        eprintln!(
            "[LOG] {} | {} | {} | {}",
            self.level_string(),
            self.component,
            self.event_type,
            self.context
        );
    }

    fn level_string(&self) -> &'static str {
        match self.level {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_order_by_severity() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Error < LogLevel::Fatal);
    }

    #[test]
    fn events_serialize_with_screaming_levels() {
        let event = LogEvent::new("guard", "marker_advanced", "1234-2 -> 1234-3")
            .with_level(LogLevel::Warn);
        let json = serde_json::to_string(&event).expect("serialize failed");
        assert!(json.contains("\"WARN\""));
        assert!(json.contains("\"eventType\":\"marker_advanced\""));
    }
}
