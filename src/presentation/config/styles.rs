use std::{collections::HashMap, str::FromStr};

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

/// Named styles used by the console widgets
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl Styles {
    /// Style registered under `name`, or the terminal default
    pub fn style(&self, name: &str) -> Style {
        self.0.get(name).copied().unwrap_or_default()
    }
}

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, String>::deserialize(deserializer)?;

        let styles = parsed_map
            .into_iter()
            .map(|(name, spec)| (name, parse_style(&spec)))
            .collect();

        Ok(Styles(styles))
    }
}

/// Parses `"[modifiers] [fg] [on bg]"`, e.g. `"bold lightgreen on black"`.
/// Unknown words are ignored.
pub fn parse_style(line: &str) -> Style {
    let lowered = line.to_lowercase();
    let (foreground, background) = match lowered.split_once(" on ") {
        Some((fg, bg)) => (fg, Some(bg)),
        None => (lowered.as_str(), None),
    };

    let mut style = Style::default();
    for word in foreground.split_whitespace() {
        if let Some(modifier) = parse_modifier(word) {
            style = style.add_modifier(modifier);
        } else if let Some(color) = parse_color(word) {
            style = style.fg(color);
        }
    }
    if let Some(color) = background.and_then(|bg| parse_color(bg.trim())) {
        style = style.bg(color);
    }
    style
}

fn parse_modifier(word: &str) -> Option<Modifier> {
    match word {
        "bold" => Some(Modifier::BOLD),
        "dim" => Some(Modifier::DIM),
        "italic" => Some(Modifier::ITALIC),
        "underline" | "underlined" => Some(Modifier::UNDERLINED),
        "blink" | "slow_blink" => Some(Modifier::SLOW_BLINK),
        "rapid_blink" => Some(Modifier::RAPID_BLINK),
        "reversed" | "reverse" => Some(Modifier::REVERSED),
        "hidden" => Some(Modifier::HIDDEN),
        "crossed_out" => Some(Modifier::CROSSED_OUT),
        _ => None,
    }
}

fn parse_color(word: &str) -> Option<Color> {
    Color::from_str(word).ok()
}
