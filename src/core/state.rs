use chrono::{DateTime, Utc};

pub mod console;
pub mod form;
pub mod system;

pub use console::{ConsoleSettings, ConsoleState};
pub use form::{Focus, FormState};
pub use system::SystemState;

use crate::infrastructure::config::Config;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub console: ConsoleState,
    pub form: FormState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    /// Initialize AppState from the loaded config, starting the clock now
    pub fn new_with_config(config: Config) -> Self {
        Self::new_at(config, Utc::now())
    }

    /// Initialize AppState from the loaded config with an explicit start time
    pub fn new_at(config: Config, started_at: DateTime<Utc>) -> Self {
        let settings = config.console_settings();
        Self {
            form: FormState::new(&settings.default_target),
            console: ConsoleState::new(settings),
            system: SystemState::started(started_at),
            config: ConfigState { config },
        }
    }

    /// Whether the disaster screen replaces the normal view
    pub fn is_disaster(&self) -> bool {
        self.console.is_disaster()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::status::{LaunchStatus, SystemMode};

    #[test]
    fn test_app_state_default() {
        let state = AppState::default();

        assert_eq!(state.console.system_mode, SystemMode::Standby);
        assert_eq!(state.console.launch_status, LaunchStatus::Inactive);
        assert!(state.console.log.is_empty());
        assert!(state.console.simulation_mode);
        assert_eq!(state.form.focus, Focus::RunDiagnostics);
        assert!(!state.system.should_quit);
        assert!(!state.is_disaster());
    }

    #[test]
    fn test_new_at_uses_config_defaults() {
        let config = Config::defaults().expect("embedded config parses");
        let started_at = DateTime::from_timestamp(1_709_642_096, 0).expect("valid timestamp");
        let state = AppState::new_at(config, started_at);

        assert_eq!(state.system.started_at, started_at);
        assert_eq!(state.system.now, started_at);
        assert_eq!(state.console.settings.countdown_from, 10);
        assert_eq!(state.form.latitude, "38.897957");
        assert_eq!(state.form.longitude, "-77.03656");
        assert!(!state.config.config.keybindings.is_empty());
    }
}
