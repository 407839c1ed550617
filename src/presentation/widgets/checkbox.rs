use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Widget};

/// `[x] LABEL` toggle
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Checkbox<'a> {
    label: &'a str,
    checked: bool,
    focused: bool,
    style: Style,
    focus_style: Style,
}

impl<'a> Checkbox<'a> {
    pub fn new(label: &'a str, checked: bool) -> Self {
        Self {
            label,
            checked,
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

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn mark(&self) -> &'static str {
        if self.checked {
            "[x]"
        } else {
            "[ ]"
        }
    }
}

impl<'a> Widget for Checkbox<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let mark_style = if self.focused {
            self.style.patch(self.focus_style)
        } else {
            self.style
        };
        let line = Line::from(vec![
            Span::styled(self.mark(), mark_style),
            Span::raw(" "),
            Span::styled(self.label, self.style),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}
