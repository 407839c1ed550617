use ratatui::{prelude::*, widgets::*};

use crate::core::state::AppState;

pub const TITLE: &str = "ICBM-3000 COMMAND CONSOLE";
pub const SUBTITLE: &str = "TACTICAL MISSILE CONTROL SYSTEM v8.12.4";

/// Title block with the session date and the wall clock
#[derive(Debug, Clone, Default)]
pub struct HeaderComponent;

impl HeaderComponent {
    pub const HEIGHT: u16 = 3;

    pub fn new() -> Self {
        Self
    }

    /// `05-MAR-2024`
    pub fn date_label(state: &AppState) -> String {
        state
            .system
            .started_at
            .format("%d-%b-%Y")
            .to_string()
            .to_uppercase()
    }

    /// `12:34:56`
    pub fn clock_label(state: &AppState) -> String {
        state.system.now.format("%H:%M:%S").to_string()
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(styles.style("frame"));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let title = Paragraph::new(vec![
            Line::styled(TITLE, styles.style("title")),
            Line::styled(SUBTITLE, styles.style("label")),
        ]);
        frame.render_widget(title, inner);

        let clock = Paragraph::new(vec![
            Line::styled(Self::date_label(state), styles.style("text")),
            Line::styled(Self::clock_label(state), styles.style("title")),
        ])
        .right_aligned();
        frame.render_widget(clock, inner);
    }
}
