//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or holds a color handle.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//! Piece anchors may sit above the board (y < 0) while a piece enters play.

use log::debug;

use crate::piece::{CellOffset, Piece};
use crate::snapshot::BoardSnapshot;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Cells of one row, left to right.
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= HEIGHT {
            return None;
        }
        let start = y * WIDTH;
        Some(&self.cells[start..start + WIDTH])
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// Check whether `piece` fits with its mask anchored at `(x, y)`.
    ///
    /// Every occupied cell must land inside the side walls and above the
    /// floor. Cells above the top edge (y < 0) skip the occupancy check.
    pub fn can_place(&self, piece: &Piece, x: i8, y: i8) -> bool {
        piece.cells().iter().all(|&offset| {
            let (bx, by) = board_pos(x, y, offset);
            if bx < 0 || bx >= BOARD_WIDTH as i16 || by >= BOARD_HEIGHT as i16 {
                return false;
            }
            // In bounds, so both fit back into i8.
            by < 0 || !self.is_occupied(bx as i8, by as i8)
        })
    }

    /// Write `piece`'s color into every occupied cell at or below row 0.
    ///
    /// Cells that would land above the board are dropped.
    pub fn lock(&mut self, piece: &Piece, x: i8, y: i8) {
        let color = piece.color();
        for &offset in piece.cells().iter() {
            let (bx, by) = board_pos(x, y, offset);
            if (0..BOARD_WIDTH as i16).contains(&bx) && (0..BOARD_HEIGHT as i16).contains(&by) {
                self.set(bx as i8, by as i8, Some(color));
            }
        }
        debug!("locked piece at ({}, {})", x, y);
    }

    /// Remove every full row, shifting the rows above down.
    ///
    /// Scans bottom to top. After a shift the same row index holds the row
    /// that was above it, so the index is checked again before moving up;
    /// stacked full rows are all removed in one call. Returns rows cleared.
    pub fn clear_and_compact(&mut self) -> u32 {
        let mut cleared = 0u32;
        let mut y = HEIGHT;

        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                cleared += 1;
                self.shift_down_into(row);
            } else {
                y -= 1;
            }
        }

        if cleared > 0 {
            debug!("cleared {} row(s)", cleared);
        }
        cleared
    }

    /// Row `r` takes row `r - 1` for every `r` in `1..=target`; row 0 is emptied.
    fn shift_down_into(&mut self, target: usize) {
        // copy_within handles the overlapping ranges.
        for row in (1..=target).rev() {
            let src = (row - 1) * WIDTH;
            self.cells.copy_within(src..src + WIDTH, row * WIDTH);
        }
        self.cells[..WIDTH].fill(None);
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the grid into a caller-owned snapshot.
    pub fn write_grid(&self, out: &mut BoardSnapshot) {
        for (y, line) in out.iter_mut().enumerate() {
            line.copy_from_slice(&self.cells[y * WIDTH..(y + 1) * WIDTH]);
        }
    }

    /// Number of occupied cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Build a board from rows, top first. Short input leaves the rest empty.
    pub fn from_rows(rows: &[[Cell; WIDTH]]) -> Self {
        let mut board = Self::new();
        for (y, line) in rows.iter().take(HEIGHT).enumerate() {
            board.cells[y * WIDTH..(y + 1) * WIDTH].copy_from_slice(line);
        }
        board
    }

    /// Convert to 2D vector for testing/display
    #[cfg(test)]
    pub fn to_cells(&self) -> Vec<Vec<Cell>> {
        self.cells.chunks(WIDTH).map(|row| row.to_vec()).collect()
    }
}

/// Board position of a mask offset, widened so far-off anchors cannot overflow.
fn board_pos(x: i8, y: i8, (dx, dy): CellOffset) -> (i16, i16) {
    (x as i16 + dx as i16, y as i16 + dy as i16)
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
