//! Game engine - orchestrates the falling piece over the board
//!
//! The engine is a plain state object driven from outside:
//!
//! - **Input** calls [`Engine::apply_action`] (or the individual move, rotate
//!   and drop methods).
//! - **A clock** calls [`Engine::on_gravity_tick`] at a fixed interval. The
//!   engine holds no timer or thread of its own.
//! - **Renderers** read [`Engine::snapshot`] between commands.
//!
//! Rejected moves are ordinary `false` results. The only terminal condition
//! is a spawn that does not fit, which moves the engine to
//! [`EngineState::GameOver`] and queues [`EngineEvent::GameOver`].
//!
//! # Example
//!
//! ```
//! use blockfall_engine::{Engine, EngineEvent};
//! use blockfall_engine::core::SequenceSource;
//! use blockfall_engine::types::PieceKind;
//!
//! let mut engine = Engine::new(SequenceSource::repeat(PieceKind::O));
//! assert!(engine.move_left());
//! assert!(engine.on_gravity_tick());
//!
//! let rows = engine.hard_drop();
//! assert_eq!(rows, 17);
//! assert_eq!(engine.score(), 0);
//! assert_eq!(engine.drain_events().count(), 0);
//!
//! // Keep dropping in place until the stack reaches the spawn row.
//! while engine.is_running() {
//!     engine.hard_drop();
//! }
//! assert_eq!(engine.drain_events().last(), Some(EngineEvent::GameOver));
//! ```

pub mod engine;
pub mod event;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use engine::{ActivePiece, Engine};
pub use event::{EngineEvent, EngineState};
