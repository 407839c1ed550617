//! Integration layer
//!
//! Wires the Elm core to the terminal and the background services:
//! - Runtime (message and command queues)
//! - AppRunner (main loop)
//! - Renderer and render/resize coalescing

pub mod app_runner;
pub mod coalescer;
pub mod renderer;
pub mod runtime;
