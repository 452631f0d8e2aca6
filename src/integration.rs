//! Integration layer
//!
//! Wires the pure core to the terminal and the timers:
//! - Runtime (translate, update, execute)
//! - AppRunner main loop
//! - Render and resize coalescing

pub mod app_runner;
pub mod coalescer;
pub mod renderer;
pub mod runtime;
pub mod update_executor;
