//! Reusable UI widgets
//!
//! This module contains reusable widgets that can be used
//! across different components.

pub mod glitch;
pub mod stats_bar;
pub mod typewriter;

pub use glitch::Glitch;
pub use stats_bar::StatsBar;
pub use typewriter::Typewriter;
