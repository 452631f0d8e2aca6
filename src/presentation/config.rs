//! UI configuration
//!
//! This module contains configuration for input handling.

pub mod keybindings;

// Re-export for convenience
pub use keybindings::{Action, KeyBindings};
