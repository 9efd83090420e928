//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the playfield rules. It performs no UI or I/O work
//! (its only dependencies are `arrayvec`, `log` and `rand`), making it:
//!
//! - **Deterministic**: seeded piece sources replay identical games
//! - **Testable**: every rule is a plain method on a value type
//! - **Portable**: runs in any host (terminal, GUI, headless)
//! - **Fast**: no allocation on move, lock, or line clear
//!
//! # Module Structure
//!
//! - [`piece`]: 4x4 shape masks with pure clockwise/counter-clockwise rotation
//! - [`board`]: 10x20 grid with placement checks, locking and line clearing
//! - [`rng`]: the [`PieceSource`] capability and its uniform/scripted sources
//! - [`snapshot`]: read-only copies of board and active piece for renderers
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Board, Piece};
//! use blockfall_core::types::PieceKind;
//!
//! let mut board = Board::new();
//! let piece = Piece::new(PieceKind::I);
//!
//! assert!(board.can_place(&piece, 0, 19));
//! board.lock(&piece, 0, 19);
//! assert!(!board.can_place(&piece, 0, 19));
//!
//! // Four cells are not enough to clear a row.
//! assert_eq!(board.clear_and_compact(), 0);
//! ```

pub mod board;
pub mod piece;
pub mod rng;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use piece::{canonical_mask, CellOffset, CellOffsets, Mask, Piece};
pub use rng::{PieceSource, SequenceSource, UniformSource};
pub use snapshot::{ActiveSnapshot, BoardSnapshot, GameSnapshot, EMPTY_BOARD};
