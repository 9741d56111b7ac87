//! Log domain types

use serde::{Deserialize, Serialize};

/// A log entry belonging to one job
///
/// The backend appends these; the client only reads snapshots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub level: LogLevel,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_uses_uppercase_wire_format() {
        let entry: LogEntry = serde_json::from_str(
            r#"{"timestamp": "2024-01-01T00:00:00Z", "level": "ERROR", "message": "boom"}"#,
        )
        .unwrap();
        assert_eq!(entry.level, LogLevel::Error);
        assert_eq!(serde_json::to_string(&entry.level).unwrap(), "\"ERROR\"");
    }
}
