use serde::{Deserialize, Serialize};

/// System-level messages: lifecycle, terminal and status line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SystemMsg {
    // Application control
    Quit,
    Suspend,
    Resume,
    Resize(u16, u16),

    /// Refresh the wall clock shown in the header
    Tick,

    // Status line
    UpdateStatusMessage(String),
    ClearStatusMessage,
    ShowError(String),
}
