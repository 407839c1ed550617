use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Widget};

const CURSOR: &str = "_";

/// One-line input: `LABEL value_`, with a dimmed placeholder when empty
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextField<'a> {
    label: &'a str,
    value: &'a str,
    placeholder: Option<&'a str>,
    focused: bool,
    label_style: Style,
    style: Style,
    focus_style: Style,
}

impl<'a> TextField<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            ..Default::default()
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn label_style(mut self, style: Style) -> Self {
        self.label_style = style;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn focus_style(mut self, style: Style) -> Self {
        self.focus_style = style;
        self
    }

    pub fn line(&self) -> Line<'a> {
        let mut spans = vec![
            Span::styled(self.label, self.label_style),
            Span::raw(" "),
        ];
        let value_style = if self.focused {
            self.style.patch(self.focus_style)
        } else {
            self.style
        };
        match self.placeholder {
            Some(placeholder) if self.value.is_empty() && !self.focused => {
                spans.push(Span::styled(placeholder, self.style.add_modifier(Modifier::DIM)));
            }
            _ => spans.push(Span::styled(self.value, value_style)),
        }
        if self.focused {
            spans.push(Span::styled(
                CURSOR,
                self.style.add_modifier(Modifier::SLOW_BLINK),
            ));
        }
        Line::from(spans)
    }
}

impl<'a> Widget for TextField<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Paragraph::new(self.line()).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn rendered(field: TextField<'_>) -> String {
        let area = Rect::new(0, 0, 40, 1);
        let mut buffer = Buffer::empty(area);
        field.render(area, &mut buffer);
        buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    #[test]
    fn test_value() {
        assert_eq!(rendered(TextField::new("LAT:", "38.897957")), "LAT: 38.897957");
    }

    #[test]
    fn test_placeholder_when_empty() {
        let field = TextField::new("AUTHORIZATION CODE:", "").placeholder("00000000");
        assert_eq!(rendered(field), "AUTHORIZATION CODE: 00000000");
    }

    #[test]
    fn test_focused_shows_cursor_instead_of_placeholder() {
        let field = TextField::new("AUTHORIZATION CODE:", "")
            .placeholder("00000000")
            .focused(true);
        assert_eq!(rendered(field), "AUTHORIZATION CODE: _");

        let field = TextField::new("LONG:", "-77.0").focused(true);
        assert_eq!(rendered(field), "LONG: -77.0_");
    }
}
