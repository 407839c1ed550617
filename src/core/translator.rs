use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    core::{
        msg::{console::ConsoleMsg, form::FormMsg, system::SystemMsg, Msg},
        raw_msg::RawMsg,
        state::{AppState, Focus},
    },
    presentation::config::keybindings::Action,
};

const LOCKED_MESSAGE: &str = "Command locked: launch sequence in progress";

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // The tick refreshes the header clock
        RawMsg::Tick => vec![Msg::System(SystemMsg::Tick)],

        // User input - translate based on focus, screen and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),

        // Countdown service
        RawMsg::CountdownElapsed { sequence_id } => {
            vec![Msg::Console(ConsoleMsg::CountdownElapsed { sequence_id })]
        }

        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Rendering is driven by the runner, not by the state
        RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    if key.kind == KeyEventKind::Release {
        return vec![];
    }

    // Global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    if state.is_disaster() {
        return translate_disaster_keys(key, state);
    }

    if state.form.focus.is_text_field() {
        if let Some(msgs) = translate_text_field_keys(key) {
            return msgs;
        }
    }

    match state.config.config.keybindings.action_for(&key) {
        Some(action) => translate_action_to_msg(action, state),
        None => vec![], // No matching keybinding found
    }
}

/// The disaster screen only offers quit, suspend and the emergency reset
fn translate_disaster_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    match state.config.config.keybindings.action_for(&key) {
        Some(Action::Quit) => vec![Msg::System(SystemMsg::Quit)],
        Some(Action::Suspend) => vec![Msg::System(SystemMsg::Suspend)],
        Some(Action::Reset | Action::Activate) => vec![Msg::Console(ConsoleMsg::Reset)],
        _ => vec![],
    }
}

/// Editing keys for a focused input field.
/// `None` hands the key over to the keybindings.
fn translate_text_field_keys(key: KeyEvent) -> Option<Vec<Msg>> {
    let msg = match key.code {
        KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
            FormMsg::InsertChar(c)
        }
        KeyCode::Backspace => FormMsg::DeleteChar,
        KeyCode::Enter | KeyCode::Tab | KeyCode::Down => FormMsg::FocusNext,
        KeyCode::BackTab | KeyCode::Up => FormMsg::FocusPrev,
        _ => return None,
    };
    Some(vec![Msg::Form(msg)])
}

fn translate_action_to_msg(action: Action, state: &AppState) -> Vec<Msg> {
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        Action::FocusNext => vec![Msg::Form(FormMsg::FocusNext)],
        Action::FocusPrev => vec![Msg::Form(FormMsg::FocusPrev)],
        Action::Activate => translate_activate(state),
        Action::RunDiagnostics => guarded(state, ConsoleMsg::RunDiagnostics),
        Action::InitiateSequence => guarded(state, ConsoleMsg::InitiateSequence),
        Action::Reset => vec![Msg::Console(ConsoleMsg::Reset)],
        Action::ToggleSimulation => vec![Msg::Console(ConsoleMsg::ToggleSimulationMode)],
    }
}

/// Presses whatever element currently has focus
fn translate_activate(state: &AppState) -> Vec<Msg> {
    match state.form.focus {
        Focus::Latitude | Focus::Longitude | Focus::AuthorizationCode => {
            vec![Msg::Form(FormMsg::FocusNext)]
        }
        Focus::RunDiagnostics => guarded(state, ConsoleMsg::RunDiagnostics),
        Focus::InitiateSequence => guarded(state, ConsoleMsg::InitiateSequence),
        Focus::Reset => vec![Msg::Console(ConsoleMsg::Reset)],
        Focus::SimulationToggle => vec![Msg::Console(ConsoleMsg::ToggleSimulationMode)],
    }
}

/// Diagnostics and initiation buttons are disabled while a sequence runs
fn guarded(state: &AppState, msg: ConsoleMsg) -> Vec<Msg> {
    if state.console.can_start() {
        vec![Msg::Console(msg)]
    } else {
        vec![Msg::System(SystemMsg::UpdateStatusMessage(
            LOCKED_MESSAGE.to_string(),
        ))]
    }
}
