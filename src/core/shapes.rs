//! Shapes module - polyomino occupancy masks and rotation
//!
//! Each piece is a small 2D grid of filled/empty cells with its own top-left
//! origin. The seven canonical layouts are immutable templates; the active
//! piece carries a working copy that rotation replaces wholesale.

use arrayvec::ArrayVec;

use crate::types::PieceKind;

/// Maximum side length of a shape grid (the I piece is 1x4 / 4x1)
pub const SHAPE_MAX: usize = 4;

/// A piece's local occupancy mask with explicit dimensions.
///
/// `grid[y][x]` is addressed within `rows` x `cols`; cells outside the active
/// dimensions are always false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub kind: PieceKind,
    rows: u8,
    cols: u8,
    grid: [[bool; SHAPE_MAX]; SHAPE_MAX],
}

impl Shape {
    /// The canonical spawn-orientation template for a piece kind
    pub fn template(kind: PieceKind) -> Self {
        let rows: &[&[u8]] = match kind {
            PieceKind::I => &[&[1, 1, 1, 1]],
            PieceKind::O => &[&[1, 1], &[1, 1]],
            PieceKind::T => &[&[0, 1, 0], &[1, 1, 1]],
            PieceKind::S => &[&[0, 1, 1], &[1, 1, 0]],
            PieceKind::Z => &[&[1, 1, 0], &[0, 1, 1]],
            PieceKind::J => &[&[1, 0, 0], &[1, 1, 1]],
            PieceKind::L => &[&[0, 0, 1], &[1, 1, 1]],
        };

        let mut grid = [[false; SHAPE_MAX]; SHAPE_MAX];
        for (y, row) in rows.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                grid[y][x] = v != 0;
            }
        }

        Self {
            kind,
            rows: rows.len() as u8,
            cols: rows[0].len() as u8,
            grid,
        }
    }

    /// Number of rows in the local grid
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Number of columns in the local grid
    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether the local cell (x, y) is filled
    pub fn filled(&self, x: u8, y: u8) -> bool {
        if x >= self.cols || y >= self.rows {
            return false;
        }
        self.grid[y as usize][x as usize]
    }

    /// Local (x, y) offsets of the filled cells, row-major order
    pub fn offsets(&self) -> ArrayVec<(i8, i8), 4> {
        let mut out = ArrayVec::new();
        for y in 0..self.rows {
            for x in 0..self.cols {
                if self.grid[y as usize][x as usize] && !out.is_full() {
                    out.push((x as i8, y as i8));
                }
            }
        }
        out
    }

    /// The 90-degree clockwise rotation of this shape.
    ///
    /// Transpose-then-reverse-rows about the shape's own top-left origin;
    /// dimensions swap for non-square shapes. Returns a whole new shape, the
    /// original is untouched.
    pub fn rotated(&self) -> Self {
        let mut grid = [[false; SHAPE_MAX]; SHAPE_MAX];
        for y in 0..self.cols {
            for x in 0..self.rows {
                // new[y][x] = old[rows-1-x][y]
                grid[y as usize][x as usize] = self.grid[(self.rows - 1 - x) as usize][y as usize];
            }
        }

        Self {
            kind: self.kind,
            rows: self.cols,
            cols: self.rows,
            grid,
        }
    }
}
