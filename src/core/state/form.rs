use serde::{Deserialize, Serialize};

use crate::{
    core::msg::{console::ConsoleMsg, form::FormMsg},
    domain::{
        authorization::AUTHORIZATION_CODE_LEN,
        coordinates::{format_coordinate, parse_coordinate, TargetCoordinates},
    },
};

/// Longest text accepted by a coordinate field
pub const COORDINATE_INPUT_LEN: usize = 16;

/// Focusable elements of the console, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Focus {
    Latitude,
    Longitude,
    AuthorizationCode,
    #[default]
    RunDiagnostics,
    InitiateSequence,
    Reset,
    SimulationToggle,
}

impl Focus {
    pub const ORDER: [Focus; 7] = [
        Focus::Latitude,
        Focus::Longitude,
        Focus::AuthorizationCode,
        Focus::RunDiagnostics,
        Focus::InitiateSequence,
        Focus::Reset,
        Focus::SimulationToggle,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }

    pub fn is_text_field(self) -> bool {
        matches!(
            self,
            Focus::Latitude | Focus::Longitude | Focus::AuthorizationCode
        )
    }
}

/// Characters a coordinate field accepts
pub fn accepts_coordinate_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E')
}

/// Focus and the raw text of the input fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub focus: Focus,
    pub latitude: String,
    pub longitude: String,
    pub authorization_code: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(&TargetCoordinates::default())
    }
}

impl FormState {
    pub fn new(target: &TargetCoordinates) -> Self {
        Self {
            focus: Focus::default(),
            latitude: format_coordinate(target.lat),
            longitude: format_coordinate(target.lng),
            authorization_code: String::new(),
        }
    }

    /// Restores the field contents, keeping the current focus
    pub fn reset_fields(&mut self, target: &TargetCoordinates) {
        let focus = self.focus;
        *self = Self::new(target);
        self.focus = focus;
    }

    /// Form-specific update function
    /// Returns: the console change implied by an edit, if any
    pub fn update(&mut self, msg: FormMsg) -> Option<ConsoleMsg> {
        match msg {
            FormMsg::FocusNext => {
                self.focus = self.focus.next();
                None
            }
            FormMsg::FocusPrev => {
                self.focus = self.focus.prev();
                None
            }
            FormMsg::FocusChanged(focus) => {
                self.focus = focus;
                None
            }
            FormMsg::InsertChar(c) => self.insert_char(c),
            FormMsg::DeleteChar => self.delete_char(),
        }
    }

    fn insert_char(&mut self, c: char) -> Option<ConsoleMsg> {
        match self.focus {
            Focus::Latitude | Focus::Longitude => {
                if !accepts_coordinate_char(c) {
                    return None;
                }
                let buffer = self.coordinate_buffer_mut()?;
                if buffer.chars().count() >= COORDINATE_INPUT_LEN {
                    return None;
                }
                buffer.push(c);
                self.coordinate_changed()
            }
            Focus::AuthorizationCode => {
                if c.is_control() || self.authorization_code.chars().count() >= AUTHORIZATION_CODE_LEN
                {
                    return None;
                }
                self.authorization_code.push(c);
                Some(ConsoleMsg::AuthorizationCodeChanged(
                    self.authorization_code.clone(),
                ))
            }
            _ => None,
        }
    }

    fn delete_char(&mut self) -> Option<ConsoleMsg> {
        match self.focus {
            Focus::Latitude | Focus::Longitude => {
                self.coordinate_buffer_mut()?.pop()?;
                self.coordinate_changed()
            }
            Focus::AuthorizationCode => {
                self.authorization_code.pop()?;
                Some(ConsoleMsg::AuthorizationCodeChanged(
                    self.authorization_code.clone(),
                ))
            }
            _ => None,
        }
    }

    fn coordinate_buffer_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::Latitude => Some(&mut self.latitude),
            Focus::Longitude => Some(&mut self.longitude),
            _ => None,
        }
    }

    fn coordinate_changed(&self) -> Option<ConsoleMsg> {
        match self.focus {
            Focus::Latitude => Some(ConsoleMsg::LatitudeChanged(parse_coordinate(
                &self.latitude,
            ))),
            Focus::Longitude => Some(ConsoleMsg::LongitudeChanged(parse_coordinate(
                &self.longitude,
            ))),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn focused(focus: Focus) -> FormState {
        let mut form = FormState::default();
        form.update(FormMsg::FocusChanged(focus));
        form
    }

    #[test]
    fn test_focus_cycles_in_order() {
        let mut form = FormState::default();
        let mut seen = vec![form.focus];
        for _ in 0..Focus::ORDER.len() {
            form.update(FormMsg::FocusNext);
            seen.push(form.focus);
        }
        assert_eq!(
            seen,
            vec![
                Focus::RunDiagnostics,
                Focus::InitiateSequence,
                Focus::Reset,
                Focus::SimulationToggle,
                Focus::Latitude,
                Focus::Longitude,
                Focus::AuthorizationCode,
                Focus::RunDiagnostics,
            ]
        );
    }

    #[test]
    fn test_focus_prev_wraps() {
        assert_eq!(Focus::Latitude.prev(), Focus::SimulationToggle);
        assert_eq!(Focus::SimulationToggle.next(), Focus::Latitude);
    }

    #[test]
    fn test_text_fields() {
        let text: Vec<Focus> = Focus::ORDER
            .into_iter()
            .filter(|f| f.is_text_field())
            .collect();
        assert_eq!(
            text,
            vec![Focus::Latitude, Focus::Longitude, Focus::AuthorizationCode]
        );
    }

    #[test]
    fn test_default_buffers_show_default_target() {
        let form = FormState::default();
        assert_eq!(form.latitude, "38.897957");
        assert_eq!(form.longitude, "-77.03656");
        assert!(form.authorization_code.is_empty());
    }

    #[test]
    fn test_latitude_edit_reparses() {
        let mut form = focused(Focus::Latitude);

        assert_eq!(
            form.update(FormMsg::InsertChar('1')),
            Some(ConsoleMsg::LatitudeChanged(38.8979571))
        );

        form.latitude.clear();
        assert_eq!(
            form.update(FormMsg::InsertChar('9')),
            Some(ConsoleMsg::LatitudeChanged(9.0))
        );
        assert_eq!(
            form.update(FormMsg::InsertChar('0')),
            Some(ConsoleMsg::LatitudeChanged(90.0))
        );
    }

    #[test]
    fn test_longitude_unparseable_yields_nan() {
        let mut form = focused(Focus::Longitude);
        form.longitude.clear();

        match form.update(FormMsg::InsertChar('-')) {
            Some(ConsoleMsg::LongitudeChanged(lng)) => assert!(lng.is_nan()),
            other => panic!("expected LongitudeChanged, got {other:?}"),
        }
    }

    #[rstest]
    #[case('a')]
    #[case(' ')]
    #[case(',')]
    fn test_coordinate_rejects_chars(#[case] c: char) {
        let mut form = focused(Focus::Latitude);
        assert_eq!(form.update(FormMsg::InsertChar(c)), None);
        assert_eq!(form.latitude, "38.897957");
    }

    #[test]
    fn test_coordinate_length_limit() {
        let mut form = focused(Focus::Latitude);
        form.latitude = "1".repeat(COORDINATE_INPUT_LEN);
        assert_eq!(form.update(FormMsg::InsertChar('2')), None);
    }

    #[test]
    fn test_delete_char_on_coordinate() {
        let mut form = focused(Focus::Latitude);
        assert_eq!(
            form.update(FormMsg::DeleteChar),
            Some(ConsoleMsg::LatitudeChanged(38.89795))
        );

        form.latitude.clear();
        assert_eq!(form.update(FormMsg::DeleteChar), None);
    }

    #[test]
    fn test_authorization_code_limited_to_eight() {
        let mut form = focused(Focus::AuthorizationCode);
        for _ in 0..8 {
            form.update(FormMsg::InsertChar('0'));
        }
        assert_eq!(form.authorization_code, "00000000");
        assert_eq!(form.update(FormMsg::InsertChar('0')), None);

        assert_eq!(
            form.update(FormMsg::DeleteChar),
            Some(ConsoleMsg::AuthorizationCodeChanged("0000000".into()))
        );
    }

    #[test]
    fn test_buttons_ignore_text_input() {
        let mut form = focused(Focus::Reset);
        assert_eq!(form.update(FormMsg::InsertChar('1')), None);
        assert_eq!(form.update(FormMsg::DeleteChar), None);
    }

    #[test]
    fn test_reset_fields_keeps_focus() {
        let mut form = focused(Focus::AuthorizationCode);
        form.update(FormMsg::InsertChar('7'));
        form.latitude = "1".into();

        form.reset_fields(&TargetCoordinates::default());

        assert_eq!(form.focus, Focus::AuthorizationCode);
        assert!(form.authorization_code.is_empty());
        assert_eq!(form.latitude, "38.897957");
    }
}
