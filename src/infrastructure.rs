//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - TUI foundation
//! - CLI argument processing
//! - Configuration loading
//! - Typewriter and star ticker timers

pub mod cli;
pub mod config;
pub mod reveal_handle;
pub mod reveal_service;
pub mod stats_service;
pub mod tui;
