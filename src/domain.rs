//! Domain logic
//!
//! This module contains the domain model of the page:
//! - Incremental text reveal state machine
//! - Static repository content
//! - UI identifiers shared between layers

pub mod repo;
pub mod reveal;
pub mod ui;
