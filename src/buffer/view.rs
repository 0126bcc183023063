//! Capability traits over the grid: a read-only view and a writable
//! superset, both backed by the one concrete storage type, [`Buffer`].
//!
//! The split lets APIs ask for exactly the capability they need: the
//! renderer consumes `&impl GridRead` and cannot mutate, while drawing
//! helpers take `&mut impl GridWrite`. No hierarchy deeper than this one
//! level exists or is needed.

use super::{Buffer, Cell, Rgb};
use crate::error::Result;
use crate::layout::Rect;

/// Read-only access to a cell grid.
pub trait GridRead {
    /// Grid width in columns.
    fn width(&self) -> u16;

    /// Grid height in rows.
    fn height(&self) -> u16;

    /// Whether (x, y) addresses a cell in this grid.
    fn in_bounds(&self, x: u16, y: u16) -> bool;

    /// The cell at (x, y); `OutOfRange` outside the grid.
    fn get(&self, x: u16, y: u16) -> Result<Cell>;

    /// Independent copy of the row-major cell sequence.
    fn to_flat(&self) -> Vec<Cell>;

    /// Independent copy organized as rows.
    fn to_rows(&self) -> Vec<Vec<Cell>>;

    /// Plain-text rendering of the character channel, one `\n`-terminated
    /// line per row.
    fn to_debug_string(&self) -> String;
}

/// Mutable access to a cell grid: everything [`GridRead`] offers plus the
/// mutation operations.
pub trait GridWrite: GridRead {
    /// Replace the cell at (x, y); `OutOfRange` outside the grid.
    fn set(&mut self, x: u16, y: u16, cell: Cell) -> Result<()>;

    /// Resize preserving overlapping content; new cells get `fill`.
    fn resize_with(&mut self, new_width: u16, new_height: u16, fill: Cell) -> Result<()>;

    /// Paint a clipped rectangle (see [`Buffer::fill`]).
    fn fill(&mut self, area: Rect, ch: Option<char>, fg: Option<Rgb>, bg: Option<Rgb>);

    /// Copy a rectangle from another buffer (see [`Buffer::blit_rect`]).
    fn blit_rect(&mut self, src: &Buffer, src_area: Rect, dest_x: u16, dest_y: u16) -> Result<()>;

    /// Set every cell to the given cell.
    fn clear_with(&mut self, cell: Cell);

    /// Place text with silent clipping (see [`Buffer::print_text`]).
    fn print_text(&mut self, text: &str, x: i32, y: i32, fg: Option<Rgb>, bg: Option<Rgb>);
}

impl GridRead for Buffer {
    #[inline]
    fn width(&self) -> u16 {
        Self::width(self)
    }

    #[inline]
    fn height(&self) -> u16 {
        Self::height(self)
    }

    #[inline]
    fn in_bounds(&self, x: u16, y: u16) -> bool {
        Self::in_bounds(self, x, y)
    }

    #[inline]
    fn get(&self, x: u16, y: u16) -> Result<Cell> {
        Self::get(self, x, y)
    }

    fn to_flat(&self) -> Vec<Cell> {
        Self::to_flat(self)
    }

    fn to_rows(&self) -> Vec<Vec<Cell>> {
        Self::to_rows(self)
    }

    fn to_debug_string(&self) -> String {
        Self::to_debug_string(self)
    }
}

impl GridWrite for Buffer {
    #[inline]
    fn set(&mut self, x: u16, y: u16, cell: Cell) -> Result<()> {
        Self::set(self, x, y, cell)
    }

    fn resize_with(&mut self, new_width: u16, new_height: u16, fill: Cell) -> Result<()> {
        Self::resize_with(self, new_width, new_height, fill)
    }

    fn fill(&mut self, area: Rect, ch: Option<char>, fg: Option<Rgb>, bg: Option<Rgb>) {
        Self::fill(self, area, ch, fg, bg);
    }

    fn blit_rect(&mut self, src: &Buffer, src_area: Rect, dest_x: u16, dest_y: u16) -> Result<()> {
        Self::blit_rect(self, src, src_area, dest_x, dest_y)
    }

    fn clear_with(&mut self, cell: Cell) {
        Self::clear_with(self, cell);
    }

    fn print_text(&mut self, text: &str, x: i32, y: i32, fg: Option<Rgb>, bg: Option<Rgb>) {
        Self::print_text(self, text, x, y, fg, bg);
    }
}
