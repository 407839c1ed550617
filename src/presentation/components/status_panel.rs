use ratatui::{prelude::*, widgets::*};

use super::labelled;
use crate::{
    core::state::{AppState, Focus},
    domain::status::DiagnosticsStatus,
    presentation::widgets::{Button, Indicator, TextField},
};

/// `SYSTEM STATUS` panel: readouts, inputs, countdown and the three buttons
#[derive(Debug, Clone, Default)]
pub struct StatusPanelComponent;

impl StatusPanelComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let console = &state.console;
        let label = styles.style("label");
        let text = styles.style("text");

        let block = Block::bordered()
            .border_style(styles.style("frame"))
            .title(Line::styled("SYSTEM STATUS", styles.style("title")))
            .title_top(
                Line::from(Span::from(Indicator::new(console.diagnostics_status))).right_aligned(),
            );
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let countdown_height = if console.countdown.is_some() && console.is_preparing() {
            3
        } else {
            0
        };
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Readouts
                Constraint::Length(1),
                Constraint::Length(3), // Target coordinates
                Constraint::Length(1),
                Constraint::Length(1), // Authorization code
                Constraint::Length(1),
                Constraint::Length(countdown_height),
                Constraint::Length(3), // Buttons
                Constraint::Min(0),
            ])
            .split(inner);

        let mode_style = if console.simulation_mode {
            styles.style("simulation")
        } else {
            styles.style("actual")
        };
        let readouts = vec![
            labelled("OPERATIONAL MODE:", console.mode_label(), label, mode_style),
            labelled("SYSTEM STATE:", console.system_mode.to_string(), label, text),
            labelled("LAUNCH STATUS:", console.launch_status.label(), label, text),
            labelled(
                "DIAGNOSTICS:",
                DiagnosticsStatus::label(console.diagnostics_status),
                label,
                text,
            ),
        ];
        frame.render_widget(Paragraph::new(readouts), layout[0]);

        let [heading, lat_row, lng_row] =
            Layout::vertical([Constraint::Length(1); 3]).areas(layout[2]);
        frame.render_widget(
            Paragraph::new(Line::styled("TARGET COORDINATES:", label)),
            heading,
        );
        frame.render_widget(
            self.text_field(state, "LAT:", &state.form.latitude, Focus::Latitude),
            lat_row,
        );
        frame.render_widget(
            self.text_field(state, "LONG:", &state.form.longitude, Focus::Longitude),
            lng_row,
        );
        frame.render_widget(
            self.text_field(
                state,
                "AUTHORIZATION CODE:",
                &state.form.authorization_code,
                Focus::AuthorizationCode,
            )
            .placeholder("00000000"),
            layout[4],
        );

        if let (Some(remaining), true) = (console.countdown, countdown_height > 0) {
            let countdown_style = styles.style("countdown");
            let countdown_block = Block::bordered()
                .border_style(styles.style("warning"))
                .title(
                    Line::styled(
                        format!("{} LAUNCH SEQUENCE", console.sequence_label()),
                        styles.style("warning"),
                    )
                    .centered(),
                );
            frame.render_widget(
                Paragraph::new(Line::styled(format!("T-{remaining}"), countdown_style))
                    .centered()
                    .block(countdown_block),
                layout[6],
            );
        }

        let [diagnostics_row, initiate_row, reset_row] =
            Layout::vertical([Constraint::Length(1); 3]).areas(layout[7]);
        let locked = !console.can_start();
        let button = |title: &'static str, style: &str, focus: Focus, disabled: bool| {
            Button::new(title)
                .style(styles.style(style))
                .focus_style(styles.style("focus"))
                .disabled_style(styles.style("disabled"))
                .focused(state.form.focus == focus)
                .disabled(disabled)
        };
        frame.render_widget(
            button("RUN DIAGNOSTICS", "text", Focus::RunDiagnostics, locked),
            diagnostics_row,
        );
        frame.render_widget(
            button("INITIATE SEQUENCE", "danger", Focus::InitiateSequence, locked),
            initiate_row,
        );
        frame.render_widget(
            button("SYSTEM RESET", "reset", Focus::Reset, false),
            reset_row,
        );
    }

    fn text_field<'a>(
        &self,
        state: &'a AppState,
        title: &'a str,
        value: &'a str,
        focus: Focus,
    ) -> TextField<'a> {
        let styles = &state.config.config.styles;
        TextField::new(title, value)
            .label_style(styles.style("label"))
            .style(styles.style("text"))
            .focus_style(styles.style("focus"))
            .focused(state.form.focus == focus)
    }
}
