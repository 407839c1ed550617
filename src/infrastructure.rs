//! Infrastructure layer
//!
//! External integrations and background services:
//! - Terminal foundation (real and test backends)
//! - CLI argument processing and configuration loading
//! - Countdown timer service
//! - Wall clock and thermal probe sources

pub mod cli;
pub mod config;
pub mod countdown_service;
pub mod sensors;
pub mod tui;
