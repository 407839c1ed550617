use std::time::Duration;

use serde::{Deserialize, Serialize};

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    // Render is orchestrated by AppRunner through the render request channel.
    Resize { width: u16, height: u16 },
}

/// Countdown timer sub-commands, carried out by the countdown service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CountdownCmd {
    /// Deliver `RawMsg::CountdownElapsed { sequence_id }` after `delay`,
    /// replacing any tick still pending
    Schedule { sequence_id: u64, delay: Duration },
    /// Drop the pending tick, if any
    Cancel,
}

/// Elm-like command definitions
/// Represents side effects the update function asks the host to perform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    Countdown(CountdownCmd),

    // UI-related commands
    Tui(TuiCommand),
    /// Request a render; coalesced by AppRunner
    RequestRender,
}

impl Cmd {
    pub fn schedule_tick(sequence_id: u64, delay: Duration) -> Cmd {
        Cmd::Countdown(CountdownCmd::Schedule { sequence_id, delay })
    }

    pub fn cancel_countdown() -> Cmd {
        Cmd::Countdown(CountdownCmd::Cancel)
    }

    /// Human-readable name for execution logs
    pub fn name(&self) -> String {
        match self {
            Cmd::Countdown(CountdownCmd::Schedule { .. }) => "Countdown(Schedule)".to_string(),
            Cmd::Countdown(CountdownCmd::Cancel) => "Countdown(Cancel)".to_string(),
            Cmd::Tui(TuiCommand::Resize { .. }) => "Tui(Resize)".to_string(),
            Cmd::RequestRender => "RequestRender".to_string(),
        }
    }
}
