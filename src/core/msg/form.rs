use serde::{Deserialize, Serialize};

use crate::core::state::form::Focus;

/// Focus movement and text entry on the console form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormMsg {
    FocusNext,
    FocusPrev,
    FocusChanged(Focus),
    InsertChar(char),
    DeleteChar,
}
