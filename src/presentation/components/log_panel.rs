use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{AppState, Focus},
    presentation::widgets::{Checkbox, LogList},
};

pub const REVISION: &str = "REV. 20240305-A";

/// `SYSTEM LOG` panel with the configuration footer and the simulation toggle
#[derive(Debug, Clone, Default)]
pub struct LogPanelComponent;

impl LogPanelComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn simulation_label(simulation_mode: bool) -> &'static str {
        if simulation_mode {
            "SIMULATION MODE ENABLED"
        } else {
            "SIMULATION MODE DISABLED"
        }
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let label = styles.style("label");

        let block = Block::bordered()
            .border_style(styles.style("frame"))
            .title(Line::styled("SYSTEM LOG", styles.style("title")))
            .title_top(Line::styled("ICBM-3000.SYS", label).right_aligned());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [log_area, config_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).areas(inner);

        let log_list = LogList::new(&state.console.log)
            .severity_styles(
                styles.style("info"),
                styles.style("warning"),
                styles.style("error"),
            )
            .placeholder_style(label);
        frame.render_widget(log_list, log_area);

        let config_block = Block::default()
            .borders(Borders::TOP)
            .border_style(styles.style("frame"));
        let config_inner = config_block.inner(config_area);
        frame.render_widget(config_block, config_area);

        let [heading_row, toggle_row] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(config_inner);

        frame.render_widget(
            Paragraph::new(Line::styled("SYSTEM CONFIGURATION", label)),
            heading_row,
        );
        frame.render_widget(
            Paragraph::new(Line::styled(REVISION, label)).right_aligned(),
            heading_row,
        );

        let checkbox = Checkbox::new(
            Self::simulation_label(state.console.simulation_mode),
            state.console.simulation_mode,
        )
        .style(styles.style("text"))
        .focus_style(styles.style("focus"))
        .focused(state.form.focus == Focus::SimulationToggle);
        frame.render_widget(checkbox, toggle_row);

        let payload = Line::from(vec![
            Span::styled("PAYLOAD STATUS: ", label),
            Span::styled("READY", styles.style("text")),
        ]);
        frame.render_widget(Paragraph::new(payload).right_aligned(), toggle_row);
    }
}
