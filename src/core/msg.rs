use serde::{Deserialize, Serialize};

pub mod console;
pub mod form;
pub mod system;

use console::ConsoleMsg;
use form::FormMsg;
use system::SystemMsg;

/// Domain messages representing application intent
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Launch console operations (delegated to ConsoleState)
    Console(ConsoleMsg),

    // Focus and text input (delegated to FormState)
    Form(FormMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, Msg::System(SystemMsg::Tick))
    }
}
