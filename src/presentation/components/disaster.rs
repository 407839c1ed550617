use ratatui::{layout::Flex, prelude::*, widgets::*};

use crate::{core::state::AppState, presentation::widgets::Button};

pub const HEADLINE: &str = "⚠️ CRITICAL SYSTEM FAILURE ⚠️";
pub const ALERT: &str = "MISSILE LAUNCH DETECTED - THIS IS NOT A DRILL";
pub const ERROR_REPORT: [&str; 5] = [
    "- FAILSAFE MECHANISM FAILURE",
    "- SIMULATION MODE BYPASS DETECTED",
    "- UNAUTHORIZED LAUNCH SEQUENCE INITIATED",
    "- GLOBAL STRIKE CAPABILITY ACTIVATED",
    "ERROR CODE: 0xE7C89FAD",
];
pub const EMERGENCY_RESET: &str = "EMERGENCY SYSTEM RESET";

/// Full-width failure screen shown after a simulated countdown completes.
/// The reset button is the only control and always has focus.
#[derive(Debug, Clone, Default)]
pub struct DisasterComponent;

impl DisasterComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let critical = styles.style("critical");
        let error = styles.style("error");

        let block = Block::bordered().border_style(error);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Headline
                Constraint::Length(1),
                Constraint::Length(1), // Alert
                Constraint::Length(1),
                Constraint::Length(ERROR_REPORT.len() as u16 + 3), // Report box
                Constraint::Length(1),
                Constraint::Length(1), // Reset button
                Constraint::Min(0),
            ])
            .split(inner);

        frame.render_widget(
            Paragraph::new(Line::styled(HEADLINE, critical)).centered(),
            layout[0],
        );
        frame.render_widget(
            Paragraph::new(Line::styled(ALERT, critical)).centered(),
            layout[2],
        );

        let report_area = center_horizontally(layout[4], 48);
        let report_block = Block::bordered()
            .border_style(error)
            .title(Line::styled("CRITICAL ERROR REPORT:", error));
        let lines: Vec<Line> = ERROR_REPORT
            .iter()
            .map(|line| Line::styled(*line, error))
            .collect();
        frame.render_widget(Paragraph::new(lines).block(report_block), report_area);

        let button = Button::new(EMERGENCY_RESET)
            .style(styles.style("text"))
            .focus_style(styles.style("focus"))
            .focused(true);
        frame.render_widget(button, layout[6]);
    }
}

fn center_horizontally(area: Rect, width: u16) -> Rect {
    let [centered] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    centered
}
