//! Piece module - 4x4 occupancy masks and pure rotations
//!
//! A piece is a value: rotating returns a new piece and never validates the
//! result. Whether a rotated piece fits is decided by [`Board::can_place`].
//!
//! [`Board::can_place`]: crate::board::Board::can_place

use arrayvec::ArrayVec;

use crate::types::{Color, PieceKind, MASK_SIZE};

/// Row-major 4x4 occupancy grid: `mask[row][col]`.
pub type Mask = [[bool; MASK_SIZE]; MASK_SIZE];

/// Offset of a single occupied mask cell as `(col, row)`.
pub type CellOffset = (i8, i8);

/// Occupied offsets of a mask. A 4x4 mask has at most 16.
pub type CellOffsets = ArrayVec<CellOffset, { MASK_SIZE * MASK_SIZE }>;

const fn layout(rows: [[u8; MASK_SIZE]; 2]) -> Mask {
    let mut mask = [[false; MASK_SIZE]; MASK_SIZE];
    let mut r = 0;
    while r < 2 {
        let mut c = 0;
        while c < MASK_SIZE {
            mask[r][c] = rows[r][c] != 0;
            c += 1;
        }
        r += 1;
    }
    mask
}

/// Canonical layouts, indexed by [`PieceKind::index`].
const LAYOUTS: [Mask; 7] = [
    layout([[1, 1, 1, 1], [0, 0, 0, 0]]), // I
    layout([[1, 1, 1, 0], [1, 0, 0, 0]]), // L
    layout([[1, 1, 1, 0], [0, 0, 1, 0]]), // J
    layout([[1, 1, 0, 0], [1, 1, 0, 0]]), // O
    layout([[0, 1, 1, 0], [1, 1, 0, 0]]), // S
    layout([[1, 1, 1, 0], [0, 1, 0, 0]]), // T
    layout([[1, 1, 0, 0], [0, 1, 1, 0]]), // Z
];

/// Canonical spawn mask for a kind.
pub fn canonical_mask(kind: PieceKind) -> Mask {
    LAYOUTS[kind.index()]
}

/// A shape mask plus the color it paints when locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    mask: Mask,
    color: Color,
}

impl Piece {
    /// Canonical piece of the given kind.
    pub fn new(kind: PieceKind) -> Self {
        Self {
            mask: canonical_mask(kind),
            color: kind.color(),
        }
    }

    pub fn from_mask(mask: Mask, color: Color) -> Self {
        Self { mask, color }
    }

    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns false for out-of-range coordinates.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < MASK_SIZE && col < MASK_SIZE && self.mask[row][col]
    }

    /// Occupied cells as `(col, row)` offsets, in row-major order.
    pub fn cells(&self) -> CellOffsets {
        let mut out = CellOffsets::new();
        for (row, line) in self.mask.iter().enumerate() {
            for (col, &filled) in line.iter().enumerate() {
                if filled {
                    out.push((col as i8, row as i8));
                }
            }
        }
        out
    }

    /// Rotate 90° clockwise: `new[i][j] = old[3 - j][i]`.
    pub fn rotate_cw(&self) -> Self {
        let mut mask = [[false; MASK_SIZE]; MASK_SIZE];
        for (i, line) in mask.iter_mut().enumerate() {
            for (j, cell) in line.iter_mut().enumerate() {
                *cell = self.mask[MASK_SIZE - 1 - j][i];
            }
        }
        Self {
            mask,
            color: self.color,
        }
    }

    /// Rotate 90° counter-clockwise: `new[i][j] = old[j][3 - i]`.
    pub fn rotate_ccw(&self) -> Self {
        let mut mask = [[false; MASK_SIZE]; MASK_SIZE];
        for (i, line) in mask.iter_mut().enumerate() {
            for (j, cell) in line.iter_mut().enumerate() {
                *cell = self.mask[j][MASK_SIZE - 1 - i];
            }
        }
        Self {
            mask,
            color: self.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_layouts_have_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(Piece::new(kind).cells().len(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn i_piece_rotates_into_column() {
        let vertical = Piece::new(PieceKind::I).rotate_cw();
        // new[i][j] = old[3-j][i]; only old row 0 is filled, so j == 3.
        let cells: Vec<_> = vertical.cells().into_iter().collect();
        assert_eq!(cells, vec![(3, 0), (3, 1), (3, 2), (3, 3)]);
    }

    #[test]
    fn i_piece_ccw_rotates_into_left_column() {
        let vertical = Piece::new(PieceKind::I).rotate_ccw();
        // new[i][j] = old[j][3-i]; only old row 0 is filled, so j == 0.
        let cells: Vec<_> = vertical.cells().into_iter().collect();
        assert_eq!(cells, vec![(0, 0), (0, 1), (0, 2), (0, 3)]);
    }

    #[test]
    fn rotation_keeps_color() {
        let t = Piece::new(PieceKind::T);
        assert_eq!(t.rotate_cw().color(), t.color());
        assert_eq!(t.rotate_ccw().color(), t.color());
    }

    #[test]
    fn is_filled_rejects_out_of_range() {
        let o = Piece::new(PieceKind::O);
        assert!(o.is_filled(0, 0));
        assert!(!o.is_filled(0, 2));
        assert!(!o.is_filled(4, 0));
        assert!(!o.is_filled(0, 4));
    }
}
