//! # ICBM-3000 - Mock missile launch console
//!
//! A terminal user interface mimicking a missile launch console, built with
//! Rust and Ratatui. All logic is state manipulation driving conditional
//! rendering; the checks it runs are decorative.
//!
//! ## Architecture Overview
//!
//! This crate is organized around the Elm architecture pattern:
//!
//! - **Model** (`state`): The console, form and system state
//! - **Message** (`msg`): Events that can change the state
//! - **Update** (`update`): Pure functions that transform state
//! - **Command** (`cmd`): Side effects (countdown timer, resize, render)
//! - **View** (`components`): UI rendering based on current state
//!
//! ## Example Usage
//!
//! ```rust
//! use icbm3000::core::{
//!     msg::{console::ConsoleMsg, Msg},
//!     state::AppState,
//!     update::update,
//! };
//!
//! let state = AppState::default();
//! let (state, _commands) = update(Msg::Console(ConsoleMsg::RunDiagnostics), state);
//!
//! assert!(state.console.log.contains_message("INIT SYSTEM DIAGNOSTICS"));
//! ```
//!
//! ## Modules
//!
//! - [`domain`] - Statuses, log, coordinates, authorization and diagnostics
//! - [`core`] - State, messages, update, commands and translation
//! - [`infrastructure`] - Terminal, CLI, configuration and the countdown service
//! - [`integration`] - Runtime and main loop
//! - [`presentation`] - Components, widgets, keybindings and styles
//! - [`utils`] - Logging, panic handling and paths

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use crate::core::{
    cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, translator::translate_raw_to_domain,
    update::update,
};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
