use ratatui::{prelude::*, widgets::*};

use crate::core::state::AppState;

/// Latest status message, e.g. a locked command or a runtime error
#[derive(Debug, Clone, Default)]
pub struct StatusLineComponent;

impl StatusLineComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);
        let message = state.system.status_message.clone().unwrap_or_default();
        let style = state.config.config.styles.style("warning");
        frame.render_widget(Paragraph::new(Line::styled(message, style)), area);
    }
}
