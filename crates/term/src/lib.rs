//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders engine snapshots into a simple framebuffer that is flushed to
//! a crossterm backend, and provides the gravity clock the shell uses to
//! drive the engine.
//!
//! - [`fb`]: styled character framebuffer
//! - [`game_view`]: snapshot → framebuffer (pure, testable)
//! - [`renderer`]: framebuffer → terminal, with changed-run diffing
//! - [`gravity_clock`]: fixed-interval tick source

pub mod fb;
pub mod game_view;
pub mod gravity_clock;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use gravity_clock::GravityClock;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
