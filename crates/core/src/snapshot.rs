//! Read-only views handed to renderers between engine commands.

use crate::piece::{Mask, Piece};
use crate::types::{Cell, Color, BOARD_HEIGHT, BOARD_WIDTH};

/// Grid of color handles, `board[y][x]`.
pub type BoardSnapshot = [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

pub const EMPTY_BOARD: BoardSnapshot = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub mask: Mask,
    pub color: Color,
    pub x: i8,
    pub y: i8,
}

impl ActiveSnapshot {
    pub fn new(piece: &Piece, x: i8, y: i8) -> Self {
        Self {
            mask: *piece.mask(),
            color: piece.color(),
            x,
            y,
        }
    }

    pub fn piece(&self) -> Piece {
        Piece::from_mask(self.mask, self.color)
    }

    /// Absolute board coordinates of the occupied cells, including any above row 0.
    pub fn board_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.mask.iter().enumerate().flat_map(move |(row, line)| {
            line.iter()
                .enumerate()
                .filter(|(_, filled)| **filled)
                .map(move |(col, _)| (self.x + col as i8, self.y + row as i8))
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: BoardSnapshot,
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub lines: u32,
    pub game_over: bool,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: EMPTY_BOARD,
            active: None,
            score: 0,
            lines: 0,
            game_over: false,
        }
    }
}
