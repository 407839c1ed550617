use ratatui::prelude::*;
use ratatui::widgets::Widget;

use crate::domain::status::DiagnosticsStatus;

/// Round status light next to the status panel title
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Indicator {
    status: Option<DiagnosticsStatus>,
}

impl Indicator {
    pub const SYMBOL: &'static str = "●";

    pub fn new(status: Option<DiagnosticsStatus>) -> Self {
        Self { status }
    }

    /// Green once passed, red once failed, yellow otherwise
    pub fn color(&self) -> Color {
        match self.status {
            Some(DiagnosticsStatus::Passed) => Color::Green,
            Some(DiagnosticsStatus::Failed) => Color::Red,
            _ => Color::Yellow,
        }
    }
}

impl From<Indicator> for Span<'static> {
    fn from(value: Indicator) -> Self {
        Span::styled(Indicator::SYMBOL, Style::default().fg(value.color()))
    }
}

impl Widget for Indicator {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Span::from(self).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(None, Color::Yellow)]
    #[case(Some(DiagnosticsStatus::Running), Color::Yellow)]
    #[case(Some(DiagnosticsStatus::Passed), Color::Green)]
    #[case(Some(DiagnosticsStatus::Failed), Color::Red)]
    fn test_color(#[case] status: Option<DiagnosticsStatus>, #[case] expected: Color) {
        assert_eq!(Indicator::new(status).color(), expected);
    }

    #[test]
    fn test_render() {
        let area = Rect::new(0, 0, 3, 1);
        let mut buffer = Buffer::empty(area);

        Indicator::new(Some(DiagnosticsStatus::Failed)).render(area, &mut buffer);

        assert_eq!(buffer[(0, 0)].symbol(), Indicator::SYMBOL);
        assert_eq!(buffer[(0, 0)].fg, Color::Red);
    }
}
