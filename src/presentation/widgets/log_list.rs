use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Widget};

use crate::domain::log::{ConsoleLog, LogEntry, Severity};

pub const EMPTY_LOG_PLACEHOLDER: &str = "SYSTEM INITIALIZED - AWAITING COMMANDS";

/// Console log scrolled so the newest entry is always visible
#[derive(Debug, Clone)]
pub struct LogList<'a> {
    log: &'a ConsoleLog,
    info_style: Style,
    warning_style: Style,
    error_style: Style,
    placeholder_style: Style,
}

impl<'a> LogList<'a> {
    pub fn new(log: &'a ConsoleLog) -> Self {
        Self {
            log,
            info_style: Style::default(),
            warning_style: Style::default(),
            error_style: Style::default(),
            placeholder_style: Style::default(),
        }
    }

    pub fn severity_styles(mut self, info: Style, warning: Style, error: Style) -> Self {
        self.info_style = info;
        self.warning_style = warning;
        self.error_style = error;
        self
    }

    pub fn placeholder_style(mut self, style: Style) -> Self {
        self.placeholder_style = style;
        self
    }

    fn style_for(&self, severity: Severity) -> Style {
        match severity {
            Severity::Info => self.info_style,
            Severity::Warning => self.warning_style,
            Severity::Error => self.error_style,
        }
    }

    /// Entries that fit in `height` rows, oldest first
    pub fn visible(&self, height: usize) -> &'a [LogEntry] {
        let entries: &'a [LogEntry] = self.log;
        let skip = entries.len().saturating_sub(height);
        &entries[skip..]
    }
}

impl<'a> Widget for LogList<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        if self.log.is_empty() {
            Paragraph::new(Line::styled(EMPTY_LOG_PLACEHOLDER, self.placeholder_style))
                .render(area, buf);
            return;
        }

        let lines: Vec<Line> = self
            .visible(area.height as usize)
            .iter()
            .map(|entry| Line::styled(entry.to_string(), self.style_for(entry.severity)))
            .collect();
        Paragraph::new(lines).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use pretty_assertions::assert_eq;

    use super::*;

    fn log_with(count: usize) -> ConsoleLog {
        let at = DateTime::from_timestamp(1_709_642_096, 0).expect("valid timestamp");
        let mut log = ConsoleLog::new();
        for i in 0..count {
            log.info(at, format!("T-MINUS {i}"));
        }
        log
    }

    fn rows(buffer: &Buffer) -> Vec<String> {
        let area = buffer.area;
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    #[test]
    fn test_placeholder_when_empty() {
        let log = ConsoleLog::new();
        let area = Rect::new(0, 0, 50, 2);
        let mut buffer = Buffer::empty(area);

        LogList::new(&log).render(area, &mut buffer);

        assert_eq!(rows(&buffer)[0], EMPTY_LOG_PLACEHOLDER);
    }

    #[test]
    fn test_scrolls_to_newest() {
        let log = log_with(5);
        let area = Rect::new(0, 0, 30, 2);
        let mut buffer = Buffer::empty(area);

        LogList::new(&log).render(area, &mut buffer);

        assert_eq!(
            rows(&buffer),
            vec!["[12:34:56] T-MINUS 3", "[12:34:56] T-MINUS 4"]
        );
    }

    #[test]
    fn test_severity_colors() {
        let at = DateTime::from_timestamp(1_709_642_096, 0).expect("valid timestamp");
        let mut log = ConsoleLog::new();
        log.warning(at, "FAILSAFE ENGAGED - OPERATION ABORTED");
        log.error(at, "MISSILE LAUNCHED");
        let area = Rect::new(0, 0, 50, 2);
        let mut buffer = Buffer::empty(area);

        LogList::new(&log)
            .severity_styles(
                Style::default().fg(Color::Green),
                Style::default().fg(Color::Yellow),
                Style::default().fg(Color::Red),
            )
            .render(area, &mut buffer);

        assert_eq!(buffer[(0, 0)].fg, Color::Yellow);
        assert_eq!(buffer[(0, 1)].fg, Color::Red);
    }

    #[test]
    fn test_visible_short_log() {
        let log = log_with(2);
        assert_eq!(LogList::new(&log).visible(10).len(), 2);
        assert_eq!(LogList::new(&log).visible(0).len(), 0);
    }
}
