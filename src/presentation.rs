//! Presentation layer
//!
//! This module contains UI components and widgets:
//! - Page components
//! - Reusable widgets
//! - Page layout shared with mouse hit-testing
//! - Configuration (keybindings)

pub mod components;
pub mod config;
pub mod layout;
pub mod widgets;
