//! Console components
//!
//! Components are stateless renderers that receive the whole `AppState`
//! during render and draw one region of the screen.

use ratatui::prelude::*;

use crate::core::state::AppState;

pub mod disaster;
pub mod footer;
pub mod header;
pub mod log_panel;
pub mod status_line;
pub mod status_panel;

pub use disaster::DisasterComponent;
pub use footer::FooterComponent;
pub use header::HeaderComponent;
pub use log_panel::LogPanelComponent;
pub use status_line::StatusLineComponent;
pub use status_panel::StatusPanelComponent;

/// Collection of all components
#[derive(Debug, Clone, Default)]
pub struct Components {
    pub header: HeaderComponent,
    pub status_panel: StatusPanelComponent,
    pub log_panel: LogPanelComponent,
    pub disaster: DisasterComponent,
    pub footer: FooterComponent,
    pub status_line: StatusLineComponent,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the whole console
    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Length(HeaderComponent::HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FooterComponent::HEIGHT),
                Constraint::Length(1), // Status line
            ])
            .split(frame.area());

        self.header.view(state, frame, layout[0]);

        if state.is_disaster() {
            self.disaster.view(state, frame, layout[1]);
        } else {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(layout[1]);
            self.status_panel.view(state, frame, columns[0]);
            self.log_panel.view(state, frame, columns[1]);
        }

        self.footer.view(state, frame, layout[2]);
        self.status_line.view(state, frame, layout[3]);
    }
}

/// `LABEL value` on one line
pub(crate) fn labelled<'a>(
    label: &'a str,
    value: impl Into<std::borrow::Cow<'a, str>>,
    label_style: Style,
    value_style: Style,
) -> Line<'a> {
    Line::from(vec![
        Span::styled(label, label_style),
        Span::raw(" "),
        Span::styled(value.into(), value_style),
    ])
}
