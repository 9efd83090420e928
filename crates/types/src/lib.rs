//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, engine, terminal rendering).
//!
//! # Board Dimensions
//!
//! The playfield is fixed:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn anchor**: (3, 0), horizontally centered for a 4x4 mask
//!
//! # Timing and scoring
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRAVITY_INTERVAL_MS` | 500 | Default period of the gravity clock |
//! | `POINTS_PER_LINE` | 100 | Score per row cleared in one landing |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let kind = PieceKind::from_index(5).unwrap();
//! assert_eq!(kind, PieceKind::T);
//! assert_eq!(kind.color().rgb(), 0x00FFFF);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Side length of a piece mask.
pub const MASK_SIZE: usize = 4;

/// Spawn anchor column: the 4-wide mask centered on the board.
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2) as i8 - 2;

/// Spawn anchor row.
pub const SPAWN_Y: i8 = 0;

/// Default gravity interval in milliseconds.
pub const GRAVITY_INTERVAL_MS: u32 = 500;

/// Points awarded per row cleared by a single landing.
pub const POINTS_PER_LINE: u32 = 100;

/// Opaque color handle carried by pieces and board cells.
///
/// The engine never interprets it; renderers treat it as `0xRRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    pub const fn from_rgb(rgb: u32) -> Self {
        Self(rgb & 0x00FF_FFFF)
    }

    pub const fn rgb(self) -> u32 {
        self.0
    }

    /// Split into (r, g, b) channels.
    pub const fn channels(self) -> (u8, u8, u8) {
        ((self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8)
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Color)`: Cell filled by a locked piece of that color
pub type Cell = Option<Color>;

/// The seven canonical piece layouts.
///
/// Declaration order matches the color palette index used by `color()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    L,
    J,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds, in palette order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::L,
        PieceKind::J,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Kind at a palette index (0..7).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Color handle assigned to this kind.
    pub fn color(self) -> Color {
        const PALETTE: [u32; 7] = [
            0x0000FF, 0xFF0000, 0x00FF00, 0xFF00FF, 0xFFFF00, 0x00FFFF, 0xFFA500,
        ];
        Color::from_rgb(PALETTE[self.index()])
    }
}

/// Commands the input layer can send to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece 90° clockwise in place
    RotateCw,
    /// Rotate piece 90° counter-clockwise in place
    RotateCcw,
    /// Drop piece one row; lands it when blocked
    SoftDrop,
    /// Drop piece until it lands
    HardDrop,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_anchor_is_centered() {
        assert_eq!(SPAWN_X, 3);
        assert_eq!(SPAWN_Y, 0);
        // 4-wide mask centered: equal margin on both sides.
        assert_eq!(SPAWN_X as u8, BOARD_WIDTH - SPAWN_X as u8 - MASK_SIZE as u8);
    }

    #[test]
    fn palette_matches_kinds() {
        assert_eq!(PieceKind::I.color().rgb(), 0x0000FF);
        assert_eq!(PieceKind::O.color().rgb(), 0xFF00FF);
        assert_eq!(PieceKind::Z.color().rgb(), 0xFFA500);
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(PieceKind::from_index(i), Some(*kind));
        }
        assert_eq!(PieceKind::from_index(7), None);
    }

    #[test]
    fn color_channels_split_rgb() {
        assert_eq!(Color::from_rgb(0xFFA500).channels(), (0xFF, 0xA5, 0x00));
        assert_eq!(Color::from_rgb(0xAB_123456).rgb(), 0x123456);
    }
}
