use crate::{
    core::{
        cmd::Cmd,
        msg::{console::ConsoleMsg, Msg},
        sensors::Clock,
        state::AppState,
    },
    domain::diagnostics::ThermalProbe,
    infrastructure::sensors::{RandomThermalProbe, SystemClock},
};

/// External readings the update function is allowed to consult
#[derive(Clone, Copy)]
pub struct UpdateContext<'a> {
    pub clock: &'a dyn Clock,
    pub thermal: &'a dyn ThermalProbe,
}

impl UpdateContext<'static> {
    /// Context backed by the real clock and the random thermal probe
    pub fn system() -> Self {
        static CLOCK: SystemClock = SystemClock;
        static THERMAL: RandomThermalProbe = RandomThermalProbe;
        Self {
            clock: &CLOCK,
            thermal: &THERMAL,
        }
    }
}

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, state: AppState) -> (AppState, Vec<Cmd>) {
    update_with_context(msg, state, &UpdateContext::system())
}

/// Update function with injected clock and sensors
pub fn update_with_context(
    msg: Msg,
    mut state: AppState,
    ctx: &UpdateContext<'_>,
) -> (AppState, Vec<Cmd>) {
    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg, ctx);
            (state, commands)
        }

        // Console messages (delegated to ConsoleState)
        Msg::Console(console_msg) => {
            if matches!(console_msg, ConsoleMsg::Reset) {
                let target = state.console.settings.default_target;
                state.form.reset_fields(&target);
            }
            let mut commands = state.console.update(console_msg, ctx);
            commands.push(Cmd::RequestRender);
            (state, commands)
        }

        // Form messages (delegated to FormState, edits forwarded to ConsoleState)
        Msg::Form(form_msg) => {
            let mut commands = match state.form.update(form_msg) {
                Some(console_msg) => state.console.update(console_msg, ctx),
                None => vec![],
            };
            commands.push(Cmd::RequestRender);
            (state, commands)
        }
    }
}
