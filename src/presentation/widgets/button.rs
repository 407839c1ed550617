use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Widget};

/// Single-line push button, `[ LABEL ]`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Button<'a> {
    label: &'a str,
    style: Style,
    focus_style: Style,
    disabled_style: Style,
    focused: bool,
    disabled: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            ..Default::default()
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn focus_style(mut self, style: Style) -> Self {
        self.focus_style = style;
        self
    }

    pub fn disabled_style(mut self, style: Style) -> Self {
        self.disabled_style = style;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn text(&self) -> String {
        format!("[ {} ]", self.label)
    }

    pub fn effective_style(&self) -> Style {
        let mut style = self.style;
        if self.disabled {
            style = style.patch(self.disabled_style);
        }
        if self.focused {
            style = style.patch(self.focus_style);
        }
        style
    }
}

impl<'a> Widget for Button<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let line = Line::styled(self.text(), self.effective_style());
        Paragraph::new(line).centered().render(area, buf);
    }
}
