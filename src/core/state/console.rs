use std::time::Duration;

use crate::{
    core::{cmd::Cmd, msg::console::ConsoleMsg, update::UpdateContext},
    domain::{
        authorization::{self, AUTHORIZATION_CODE_LEN},
        coordinates::TargetCoordinates,
        diagnostics::{run_diagnostics, DiagnosticsInput},
        log::{ConsoleLog, LogEntry},
        status::{DiagnosticsStatus, LaunchStatus, SystemMode},
    },
};

/// Tunables for the console, taken from the `console` config section
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleSettings {
    /// First value shown by the countdown, at least 1
    pub countdown_from: u8,
    pub tick_interval: Duration,
    pub default_target: TargetCoordinates,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            countdown_from: 10,
            tick_interval: Duration::from_secs(1),
            default_target: TargetCoordinates::default(),
        }
    }
}

/// Session state of the launch console
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleState {
    pub system_mode: SystemMode,
    pub launch_status: LaunchStatus,
    pub diagnostics_status: Option<DiagnosticsStatus>,
    /// Only `Some` while the launch status is `Preparing`
    pub countdown: Option<u8>,
    pub simulation_mode: bool,
    pub target: TargetCoordinates,
    pub authorization_code: String,
    pub log: ConsoleLog,
    /// Identifies the running countdown; survives reset so stale ticks stay stale
    pub sequence_id: u64,
    pub settings: ConsoleSettings,
}

impl Default for ConsoleState {
    fn default() -> Self {
        Self::new(ConsoleSettings::default())
    }
}

impl ConsoleState {
    pub fn new(settings: ConsoleSettings) -> Self {
        Self {
            system_mode: SystemMode::Standby,
            launch_status: LaunchStatus::Inactive,
            diagnostics_status: None,
            countdown: None,
            simulation_mode: true,
            target: settings.default_target,
            authorization_code: String::new(),
            log: ConsoleLog::new(),
            sequence_id: 0,
            settings,
        }
    }

    pub fn is_preparing(&self) -> bool {
        self.launch_status == LaunchStatus::Preparing
    }

    pub fn is_disaster(&self) -> bool {
        self.launch_status == LaunchStatus::Disaster
    }

    /// Diagnostics and initiation are locked while a sequence is running or after a disaster
    pub fn can_start(&self) -> bool {
        !matches!(
            self.launch_status,
            LaunchStatus::Preparing | LaunchStatus::Disaster
        )
    }

    /// `SIMULATION` or `ACTUAL`
    pub fn mode_label(&self) -> &'static str {
        if self.simulation_mode {
            "SIMULATION"
        } else {
            "ACTUAL"
        }
    }

    /// Console-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: ConsoleMsg, ctx: &UpdateContext<'_>) -> Vec<Cmd> {
        match msg {
            ConsoleMsg::RunDiagnostics => {
                if self.can_start() {
                    self.diagnose(ctx);
                } else {
                    log::debug!("diagnostics ignored while {:?}", self.launch_status);
                }
                vec![]
            }

            ConsoleMsg::InitiateSequence => {
                if self.can_start() {
                    self.initiate(ctx)
                } else {
                    log::debug!("initiation ignored while {:?}", self.launch_status);
                    vec![]
                }
            }

            ConsoleMsg::CountdownElapsed { sequence_id } => self.tick(sequence_id, ctx),

            ConsoleMsg::ToggleSimulationMode => {
                self.simulation_mode = !self.simulation_mode;
                vec![]
            }

            ConsoleMsg::SetSimulationMode(enabled) => {
                self.simulation_mode = enabled;
                vec![]
            }

            ConsoleMsg::LatitudeChanged(lat) => {
                self.target.lat = lat;
                vec![]
            }

            ConsoleMsg::LongitudeChanged(lng) => {
                self.target.lng = lng;
                vec![]
            }

            ConsoleMsg::AuthorizationCodeChanged(code) => {
                self.authorization_code = code.chars().take(AUTHORIZATION_CODE_LEN).collect();
                vec![]
            }

            ConsoleMsg::Reset => {
                let sequence_id = self.sequence_id;
                *self = Self::new(self.settings.clone());
                self.sequence_id = sequence_id;
                self.log.info(ctx.clock.now(), "SYSTEM RESET COMPLETE");
                log::info!("console reset");
                vec![Cmd::cancel_countdown()]
            }
        }
    }

    /// Clears the log, runs every check and records the verdict.
    fn diagnose(&mut self, ctx: &UpdateContext<'_>) -> bool {
        self.log.clear();
        self.diagnostics_status = Some(DiagnosticsStatus::Running);

        let input = DiagnosticsInput {
            simulation_mode: self.simulation_mode,
            target: self.target,
        };
        let report = run_diagnostics(&input, ctx.thermal);

        let now = ctx.clock.now();
        for step in report.steps {
            self.log.push(LogEntry::new(now, step.message, step.severity));
        }

        self.diagnostics_status = Some(if report.passed {
            DiagnosticsStatus::Passed
        } else {
            DiagnosticsStatus::Failed
        });
        log::info!("diagnostics finished, passed={}", report.passed);
        report.passed
    }

    fn initiate(&mut self, ctx: &UpdateContext<'_>) -> Vec<Cmd> {
        if !self.diagnose(ctx) {
            self.log
                .error(ctx.clock.now(), "SEQUENCE ABORTED - DIAGNOSTICS FAILURE");
            return vec![];
        }

        self.launch_status = LaunchStatus::Preparing;
        self.log.info(ctx.clock.now(), "VERIFYING AUTHORIZATION CODE");

        if !authorization::verify(&self.authorization_code) {
            self.log.error(
                ctx.clock.now(),
                "INVALID AUTHORIZATION CODE - SEQUENCE ABORTED",
            );
            self.launch_status = LaunchStatus::Inactive;
            return vec![];
        }

        self.log.info(ctx.clock.now(), "AUTHORIZATION CODE VERIFIED");
        self.countdown = Some(self.settings.countdown_from.max(1));
        self.sequence_id += 1;

        // Diagnostics already demand simulation mode, so this never fires in practice.
        if !self.simulation_mode {
            self.log
                .warning(ctx.clock.now(), "FAILSAFE ENGAGED - OPERATION ABORTED");
            self.launch_status = LaunchStatus::Inactive;
            self.countdown = None;
            return vec![Cmd::cancel_countdown()];
        }

        self.log.info(
            ctx.clock.now(),
            format!("INITIATING {} LAUNCH SEQUENCE", self.sequence_label()),
        );
        log::info!("countdown sequence {} armed", self.sequence_id);
        vec![Cmd::schedule_tick(
            self.sequence_id,
            self.settings.tick_interval,
        )]
    }

    /// `SIMULATED` or `ACTUAL`
    pub fn sequence_label(&self) -> &'static str {
        if self.simulation_mode {
            "SIMULATED"
        } else {
            "ACTUAL"
        }
    }

    fn tick(&mut self, sequence_id: u64, ctx: &UpdateContext<'_>) -> Vec<Cmd> {
        if sequence_id != self.sequence_id || !self.is_preparing() {
            log::debug!(
                "dropping stale countdown tick {sequence_id} (current {})",
                self.sequence_id
            );
            return vec![];
        }

        let Some(remaining) = self.countdown else {
            return vec![];
        };

        if remaining > 0 {
            self.log.info(ctx.clock.now(), format!("T-MINUS {remaining}"));
            self.countdown = Some(remaining - 1);
        }

        if self.countdown == Some(0) {
            self.resolve(ctx);
            vec![]
        } else {
            vec![Cmd::schedule_tick(
                self.sequence_id,
                self.settings.tick_interval,
            )]
        }
    }

    fn resolve(&mut self, ctx: &UpdateContext<'_>) {
        let now = ctx.clock.now();
        self.countdown = None;
        if self.simulation_mode {
            self.launch_status = LaunchStatus::Disaster;
            self.log.error(now, "⚠️ MISSILE LAUNCH DETECTED ⚠️");
            self.log
                .error(now, "⚠️ SIMULATION MODE FAILURE - ACTUAL LAUNCH EXECUTED ⚠️");
        } else {
            self.launch_status = LaunchStatus::Launched;
            self.log.error(now, "MISSILE LAUNCHED");
        }
        log::warn!("countdown resolved as {:?}", self.launch_status);
    }
}
