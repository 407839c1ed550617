use chrono::{DateTime, Utc};

use crate::core::{
    cmd::{Cmd, TuiCommand},
    msg::system::SystemMsg,
    update::UpdateContext,
};

/// System-related state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
    pub status_message: Option<String>,
    /// Date shown in the header, fixed at startup
    pub started_at: DateTime<Utc>,
    /// Wall clock, refreshed every tick
    pub now: DateTime<Utc>,
}

impl Default for SystemState {
    fn default() -> Self {
        Self::started(DateTime::<Utc>::UNIX_EPOCH)
    }
}

impl SystemState {
    pub fn started(at: DateTime<Utc>) -> Self {
        Self {
            should_quit: false,
            should_suspend: false,
            status_message: None,
            started_at: at,
            now: at,
        }
    }

    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg, ctx: &UpdateContext<'_>) -> Vec<Cmd> {
        match msg {
            // System control
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }

            SystemMsg::Suspend => {
                self.should_suspend = true;
                vec![]
            }

            SystemMsg::Resume => {
                self.should_suspend = false;
                vec![Cmd::RequestRender]
            }

            SystemMsg::Resize(width, height) => {
                vec![Cmd::Tui(TuiCommand::Resize { width, height })]
            }

            SystemMsg::Tick => {
                let now = ctx.clock.now();
                if now.timestamp() == self.now.timestamp() {
                    return vec![];
                }
                self.now = now;
                vec![Cmd::RequestRender]
            }

            // Status management
            SystemMsg::UpdateStatusMessage(message) => {
                self.status_message = Some(message);
                vec![Cmd::RequestRender]
            }

            SystemMsg::ClearStatusMessage => {
                self.status_message = None;
                vec![Cmd::RequestRender]
            }

            SystemMsg::ShowError(error) => {
                self.status_message = Some(format!("Error: {error}"));
                vec![Cmd::RequestRender]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::sensors::{Clock, FixedClock},
        domain::diagnostics::FixedThermalProbe,
    };

    static CLOCK: FixedClock = FixedClock::at(1_709_642_096);
    static PROBE: FixedThermalProbe = FixedThermalProbe(42.0);

    fn ctx() -> UpdateContext<'static> {
        UpdateContext {
            clock: &CLOCK,
            thermal: &PROBE,
        }
    }

    #[test]
    fn test_system_state_quit_isolated() {
        let mut system = SystemState::default();
        assert!(!system.should_quit);

        let cmds = system.update(SystemMsg::Quit, &ctx());

        assert!(system.should_quit);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_suspend_and_resume() {
        let mut system = SystemState::default();

        system.update(SystemMsg::Suspend, &ctx());
        assert!(system.should_suspend);

        let cmds = system.update(SystemMsg::Resume, &ctx());
        assert!(!system.should_suspend);
        assert_eq!(cmds, vec![Cmd::RequestRender]);
    }

    #[test]
    fn test_system_state_resize_generates_command() {
        let mut system = SystemState::default();

        let cmds = system.update(SystemMsg::Resize(80, 24), &ctx());

        assert_eq!(
            cmds,
            vec![Cmd::Tui(TuiCommand::Resize {
                width: 80,
                height: 24
            })]
        );
    }

    #[test]
    fn test_tick_refreshes_clock_once_per_second() {
        let mut system = SystemState::default();

        let cmds = system.update(SystemMsg::Tick, &ctx());
        assert_eq!(cmds, vec![Cmd::RequestRender]);
        assert_eq!(system.now, CLOCK.now());
        assert_eq!(system.started_at, DateTime::<Utc>::UNIX_EPOCH);

        assert!(system.update(SystemMsg::Tick, &ctx()).is_empty());
    }

    #[test]
    fn test_status_message_flow_unit() {
        let mut system = SystemState::default();
        assert!(system.status_message.is_none());

        system.update(
            SystemMsg::UpdateStatusMessage("Diagnostics locked".to_string()),
            &ctx(),
        );
        assert_eq!(system.status_message.as_deref(), Some("Diagnostics locked"));

        system.update(SystemMsg::ClearStatusMessage, &ctx());
        assert!(system.status_message.is_none());
    }

    #[test]
    fn test_show_error() {
        let mut system = SystemState::default();
        system.update(SystemMsg::ShowError("boom".into()), &ctx());
        assert_eq!(system.status_message.as_deref(), Some("Error: boom"));
    }
}
