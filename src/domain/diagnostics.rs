//! Pre-launch diagnostics
//!
//! The routine is a fixed list of checks, each of which logs what it is doing
//! and either passes or stops the run.

use super::coordinates::TargetCoordinates;
use super::log::Severity;

/// Source of the raw thermal reading in `[0, 100)`
pub trait ThermalProbe: Send + Sync {
    fn read(&self) -> f64;
}

/// Probe returning the same reading every time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedThermalProbe(pub f64);

impl ThermalProbe for FixedThermalProbe {
    fn read(&self) -> f64 {
        self.0
    }
}

/// Converts a raw reading to the regulation figure that must stay positive.
pub fn calibrate(reading: f64) -> f64 {
    round_half_up((reading * 1.8 + 32.0) / 3.7 * 1.1 - 7.4)
}

/// Rounds to the nearest integer, halves toward positive infinity (`-2.5` becomes `-2`)
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// What the routine needs to know about the console
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagnosticsInput {
    pub simulation_mode: bool,
    pub target: TargetCoordinates,
}

/// One log line produced by the routine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticsStep {
    pub message: &'static str,
    pub severity: Severity,
}

impl DiagnosticsStep {
    const fn info(message: &'static str) -> Self {
        Self {
            message,
            severity: Severity::Info,
        }
    }

    const fn error(message: &'static str) -> Self {
        Self {
            message,
            severity: Severity::Error,
        }
    }
}

/// Result of a run: the lines to log and the verdict
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticsReport {
    pub steps: Vec<DiagnosticsStep>,
    pub passed: bool,
}

impl DiagnosticsReport {
    fn fail(mut self, step: DiagnosticsStep) -> Self {
        self.steps.push(step);
        self.passed = false;
        self
    }
}

/// Runs every check in order, stopping at the first failure.
pub fn run_diagnostics(input: &DiagnosticsInput, probe: &dyn ThermalProbe) -> DiagnosticsReport {
    let mut report = DiagnosticsReport {
        steps: vec![
            DiagnosticsStep::info("INIT SYSTEM DIAGNOSTICS"),
            DiagnosticsStep::info("CHECKING POWER SYSTEMS"),
            DiagnosticsStep::info("POWER SYSTEMS NOMINAL"),
            DiagnosticsStep::info("CHECKING THERMAL REGULATION"),
        ],
        passed: true,
    };

    let reading = probe.read();
    let regulated = calibrate(reading);
    log::debug!("thermal reading {reading:.3} calibrated to {regulated}");
    if regulated <= 0.0 {
        return report.fail(DiagnosticsStep::error("THERMAL REGULATION FAILURE"));
    }
    report
        .steps
        .push(DiagnosticsStep::info("THERMAL SYSTEMS NOMINAL"));

    report
        .steps
        .push(DiagnosticsStep::info("VERIFYING SIMULATION STATUS"));
    if !input.simulation_mode {
        return report.fail(DiagnosticsStep::error(
            "SIMULATION VERIFICATION FAILED - STAGE 1",
        ));
    }
    report
        .steps
        .push(DiagnosticsStep::info("SIMULATION MODE CONFIRMED"));

    report
        .steps
        .push(DiagnosticsStep::info("VALIDATING TARGET COORDINATES"));
    if !input.target.is_valid() {
        return report.fail(DiagnosticsStep::error("INVALID TARGET COORDINATES"));
    }
    report
        .steps
        .push(DiagnosticsStep::info("TARGET COORDINATES VALIDATED"));

    report.steps.push(DiagnosticsStep::info(
        "DIAGNOSTICS COMPLETE - ALL SYSTEMS NOMINAL",
    ));
    report
}
