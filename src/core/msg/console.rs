use serde::{Deserialize, Serialize};

/// Operator intents against the launch console
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConsoleMsg {
    RunDiagnostics,
    InitiateSequence,
    /// One countdown second has passed for the given sequence
    CountdownElapsed {
        sequence_id: u64,
    },

    ToggleSimulationMode,
    SetSimulationMode(bool),

    LatitudeChanged(f64),
    LongitudeChanged(f64),
    AuthorizationCodeChanged(String),

    Reset,
}
