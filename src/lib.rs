//! # clonkbot - a terminal repository page with typewriter text
//!
//! A mock repository landing page rendered with Ratatui. Its status line and
//! description type themselves out one character at a time.
//!
//! ## Architecture Overview
//!
//! This crate is organized around the Elm architecture pattern:
//!
//! - **Model** (`core::state`): Application state
//! - **Message** (`core::msg`): Events that can change the state
//! - **Update** (`core::update`): Pure functions that transform state
//! - **Command** (`core::cmd`): Side effects (timers, terminal, logging)
//! - **View** (`presentation::components`): UI rendering based on current state
//!
//! The typewriter itself lives in [`domain::reveal`] (the pure state machine) and
//! [`infrastructure::reveal_handle`] (the timer task that drives it).
//!
//! ## Example Usage
//!
//! ```rust
//! use clonkbot::core::{
//!     msg::{explorer::ExplorerMsg, Msg},
//!     state::AppState,
//!     update::update,
//! };
//!
//! let state = AppState::default();
//! let (state, commands) = update(Msg::Explorer(ExplorerMsg::CursorDown), state);
//!
//! assert_eq!(state.explorer.cursor, 1);
//! assert!(!commands.is_empty());
//! ```
//!
//! ## Modules
//!
//! - [`core`] - Elm architecture: messages, state, update, commands
//! - [`domain`] - Reveal state machine and static page content
//! - [`infrastructure`] - Terminal, timers, configuration, CLI
//! - [`integration`] - Runtime and main loop
//! - [`presentation`] - Components, widgets and layout
//! - [`utils`] - Logging, panic handling and paths

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

pub use domain::reveal::{RevealDelay, RevealError, RevealSnapshot, RevealState, RunId};
pub use infrastructure::reveal_handle::RevealHandle;
