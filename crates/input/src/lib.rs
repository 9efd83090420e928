//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] commands. Each
//! key press is one command; there is no auto-repeat of its own.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
