use std::fmt;
use std::ops::{Deref, Index};
use std::slice::Iter;

use chrono::{DateTime, NaiveTime, Utc};

/// Severity of a log line, which decides its colour on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// A single line in the operator log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: NaiveTime,
    pub message: String,
    pub severity: Severity,
}

impl LogEntry {
    pub fn new(at: DateTime<Utc>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            timestamp: at.time(),
            message: message.into(),
            severity,
        }
    }

    /// `HH:MM:SS` in UTC
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.time_label(), self.message)
    }
}

/// Ordered operator log. Entries are only ever appended or cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsoleLog {
    entries: Vec<LogEntry>,
}

impl ConsoleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: LogEntry) {
        log::debug!("console log: {entry}");
        self.entries.push(entry);
    }

    pub fn info(&mut self, at: DateTime<Utc>, message: impl Into<String>) {
        self.push(LogEntry::new(at, message, Severity::Info));
    }

    pub fn warning(&mut self, at: DateTime<Utc>, message: impl Into<String>) {
        self.push(LogEntry::new(at, message, Severity::Warning));
    }

    pub fn error(&mut self, at: DateTime<Utc>, message: impl Into<String>) {
        self.push(LogEntry::new(at, message, Severity::Error));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    pub fn iter(&self) -> Iter<'_, LogEntry> {
        self.entries.iter()
    }

    /// Messages in order, without timestamps
    pub fn messages(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.message.as_str()).collect()
    }

    /// Whether any entry carries exactly this message
    pub fn contains_message(&self, message: &str) -> bool {
        self.entries.iter().any(|e| e.message == message)
    }
}

impl Deref for ConsoleLog {
    type Target = [LogEntry];

    fn deref(&self) -> &Self::Target {
        &self.entries
    }
}

impl Index<usize> for ConsoleLog {
    type Output = LogEntry;

    fn index(&self, index: usize) -> &Self::Output {
        &self.entries[index]
    }
}

impl<'a> IntoIterator for &'a ConsoleLog {
    type Item = &'a LogEntry;
    type IntoIter = Iter<'a, LogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 5, h, m, s)
            .single()
            .expect("valid timestamp")
    }

    #[test]
    fn test_entry_display() {
        let entry = LogEntry::new(at(7, 5, 9), "POWER SYSTEMS NOMINAL", Severity::Info);
        assert_eq!(entry.time_label(), "07:05:09");
        assert_eq!(entry.to_string(), "[07:05:09] POWER SYSTEMS NOMINAL");
    }

    #[test]
    fn test_log_preserves_order_and_severity() {
        let mut log = ConsoleLog::new();
        log.info(at(0, 0, 1), "first");
        log.warning(at(0, 0, 2), "second");
        log.error(at(0, 0, 3), "third");

        assert_eq!(log.messages(), vec!["first", "second", "third"]);
        assert_eq!(log[1].severity, Severity::Warning);
        assert_eq!(log.last().map(|e| e.severity), Some(Severity::Error));
        assert!(log.contains_message("second"));
        assert!(!log.contains_message("fourth"));
    }

    #[test]
    fn test_log_clear() {
        let mut log = ConsoleLog::new();
        log.info(at(0, 0, 1), "entry");
        assert_eq!(log.len(), 1);

        log.clear();
        assert!(log.is_empty());
        assert!(log.last().is_none());
    }
}
