use ratatui::{prelude::*, widgets::*};

use crate::core::state::AppState;

pub const RESTRICTED_NOTICE: &str = "RESTRICTED ACCESS - AUTHORIZED PERSONNEL ONLY";
pub const CLASSIFICATION: &str = "DEPARTMENT OF DEFENSE - TOP SECRET";

#[derive(Debug, Clone, Default)]
pub struct FooterComponent;

impl FooterComponent {
    pub const HEIGHT: u16 = 2;

    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(styles.style("frame"));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let label = styles.style("label");
        frame.render_widget(Paragraph::new(Line::styled(RESTRICTED_NOTICE, label)), inner);
        frame.render_widget(
            Paragraph::new(Line::styled(CLASSIFICATION, label)).right_aligned(),
            inner,
        );
    }
}
