use serde::{Deserialize, Serialize};
use strum::Display;

/// Operating state of the whole console. Only standby is ever entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
#[strum(serialize_all = "UPPERCASE")]
pub enum SystemMode {
    #[default]
    Standby,
}

/// Progress of the launch sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LaunchStatus {
    #[default]
    Inactive,
    Preparing,
    /// The countdown completed while in simulation mode
    Disaster,
    /// The countdown completed with simulation mode disabled
    Launched,
}

impl LaunchStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LaunchStatus::Inactive => "INACTIVE",
            LaunchStatus::Preparing => "PREPARING",
            LaunchStatus::Disaster => "CRITICAL FAILURE",
            LaunchStatus::Launched => "LAUNCHED",
        }
    }
}

/// Outcome of the most recent diagnostics run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticsStatus {
    Running,
    Passed,
    Failed,
}

impl DiagnosticsStatus {
    /// Display label, `None` meaning diagnostics have not been run yet
    pub fn label(status: Option<DiagnosticsStatus>) -> &'static str {
        match status {
            None => "NOT RUN",
            Some(DiagnosticsStatus::Running) => "RUNNING...",
            Some(DiagnosticsStatus::Passed) => "PASSED",
            Some(DiagnosticsStatus::Failed) => "FAILED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_mode_display() {
        assert_eq!(SystemMode::Standby.to_string(), "STANDBY");
        assert_eq!(SystemMode::default(), SystemMode::Standby);
    }

    #[test]
    fn test_launch_status_labels() {
        assert_eq!(LaunchStatus::Inactive.label(), "INACTIVE");
        assert_eq!(LaunchStatus::Preparing.label(), "PREPARING");
        assert_eq!(LaunchStatus::Disaster.label(), "CRITICAL FAILURE");
        assert_eq!(LaunchStatus::Launched.label(), "LAUNCHED");
    }

    #[test]
    fn test_diagnostics_labels() {
        assert_eq!(DiagnosticsStatus::label(None), "NOT RUN");
        assert_eq!(
            DiagnosticsStatus::label(Some(DiagnosticsStatus::Running)),
            "RUNNING..."
        );
        assert_eq!(
            DiagnosticsStatus::label(Some(DiagnosticsStatus::Passed)),
            "PASSED"
        );
        assert_eq!(
            DiagnosticsStatus::label(Some(DiagnosticsStatus::Failed)),
            "FAILED"
        );
    }
}
