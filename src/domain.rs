//! Domain logic
//!
//! This module contains the rules of the launch console:
//! - Console status enums
//! - The operator log
//! - Target coordinates and their validation
//! - Authorization code verification
//! - The pre-launch diagnostics routine

pub mod authorization;
pub mod coordinates;
pub mod diagnostics;
pub mod log;
pub mod status;
