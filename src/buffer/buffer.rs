//! Buffer: a grid of cells backing a terminal-like surface.
//!
//! The buffer uses contiguous memory allocation for cache efficiency.
//! Cells are stored in row-major order: `index = y * width + x`, x varying
//! fastest. That ordering is a correctness invariant of the whole crate;
//! the copy-out views, the linear-index accessors, and the renderer's walk
//! all assume it.

use super::cell::{Cell, Rgb};
use crate::error::{Error, Result};
use crate::layout::Rect;

/// A rectangular grid of [`Cell`]s with row-major linear storage.
///
/// The buffer exclusively owns its storage: no slice of it is exposed, and
/// the copy-out accessors ([`to_flat`](Buffer::to_flat),
/// [`to_rows`](Buffer::to_rows)) return independent copies.
///
/// A `Buffer` provides no internal synchronization. Callers must serialize
/// reads, writes, and resizes on a given instance; rendering a buffer while
/// another thread mutates it is a caller bug, not something the crate
/// guards against.
#[derive(Clone)]
pub struct Buffer {
    /// Contiguous cell storage (row-major order).
    cells: Vec<Cell>,
    /// Grid width in columns. Always >= 1.
    width: u16,
    /// Grid height in rows. Always >= 1.
    height: u16,
}

impl Buffer {
    /// Create a new buffer with every cell set to [`Cell::BLANK`].
    ///
    /// Fails with [`Error::InvalidArgument`] if either dimension is 0.
    pub fn new(width: u16, height: u16) -> Result<Self> {
        Self::filled(width, height, Cell::BLANK)
    }

    /// Create a new buffer with every cell set to `initial`.
    ///
    /// Fails with [`Error::InvalidArgument`] if either dimension is 0.
    pub fn filled(width: u16, height: u16, initial: Cell) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidArgument(format!(
                "buffer dimensions must be >= 1, got {width}x{height}"
            )));
        }
        let size = (width as usize) * (height as usize);
        Ok(Self {
            cells: vec![initial; size],
            width,
            height,
        })
    }

    /// Build a buffer from a row-major cell sequence.
    ///
    /// The height is derived as `cells.len() / width`. Fails with
    /// [`Error::InvalidArgument`] if `cells` is empty, `width` is 0, or the
    /// length is not evenly divisible by `width`. The input is copied.
    pub fn from_flat(cells: &[Cell], width: u16) -> Result<Self> {
        if cells.is_empty() {
            return Err(Error::InvalidArgument(
                "cell sequence must not be empty".into(),
            ));
        }
        if width == 0 {
            return Err(Error::InvalidArgument("width must be >= 1".into()));
        }
        if cells.len() % (width as usize) != 0 {
            return Err(Error::InvalidArgument(format!(
                "{} cells do not divide evenly into rows of {width}",
                cells.len()
            )));
        }
        let height = (cells.len() / (width as usize)) as u16;
        Ok(Self {
            cells: cells.to_vec(),
            width,
            height,
        })
    }

    /// Build a buffer from rows of cells.
    ///
    /// The width is the first row's length, the height is the row count.
    /// Fails with [`Error::InvalidArgument`] if `rows` is empty, the first
    /// row is empty, or any row's length differs from the first. The input
    /// is copied.
    pub fn from_rows(rows: &[Vec<Cell>]) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(Error::InvalidArgument("rows must not be empty".into()));
        };
        if first.is_empty() {
            return Err(Error::InvalidArgument("rows must not be zero-width".into()));
        }
        let width = first.len();
        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(Error::InvalidArgument(format!(
                    "row {y} has length {}, expected {width}",
                    row.len()
                )));
            }
            cells.extend_from_slice(row);
        }
        Ok(Self {
            cells,
            width: width as u16,
            height: rows.len() as u16,
        })
    }

    /// Get the buffer width in columns.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the buffer height in rows.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Get the total number of cells (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a constructed buffer has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// A rectangle covering the entire buffer.
    #[inline]
    pub const fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Check whether (x, y) addresses a cell in this buffer.
    #[inline]
    pub const fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    /// Convert (x, y) coordinates to a linear index.
    #[inline]
    fn index_of(&self, x: u16, y: u16) -> Option<usize> {
        if self.in_bounds(x, y) {
            Some((y as usize) * (self.width as usize) + (x as usize))
        } else {
            None
        }
    }

    fn cell_out_of_range(&self, x: u16, y: u16) -> Error {
        Error::OutOfRange(format!(
            "cell ({x}, {y}) outside {}x{} buffer",
            self.width, self.height
        ))
    }

    /// Get the cell at (x, y).
    ///
    /// Fails with [`Error::OutOfRange`] outside `[0, width) x [0, height)`.
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Result<Cell> {
        self.index_of(x, y)
            .map(|i| self.cells[i])
            .ok_or_else(|| self.cell_out_of_range(x, y))
    }

    /// Replace the cell at (x, y).
    ///
    /// Fails with [`Error::OutOfRange`] outside `[0, width) x [0, height)`;
    /// on failure no cell is written.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) -> Result<()> {
        match self.index_of(x, y) {
            Some(i) => {
                self.cells[i] = cell;
                Ok(())
            }
            None => Err(self.cell_out_of_range(x, y)),
        }
    }

    /// Get the cell at a row-major linear index.
    ///
    /// Fails with [`Error::OutOfRange`] outside `[0, width * height)`.
    #[inline]
    pub fn at(&self, index: usize) -> Result<Cell> {
        self.cells.get(index).copied().ok_or_else(|| {
            Error::OutOfRange(format!(
                "index {index} outside buffer of {} cells",
                self.cells.len()
            ))
        })
    }

    /// Replace the cell at a row-major linear index.
    ///
    /// Fails with [`Error::OutOfRange`] outside `[0, width * height)`.
    #[inline]
    pub fn set_at(&mut self, index: usize, cell: Cell) -> Result<()> {
        let len = self.cells.len();
        match self.cells.get_mut(index) {
            Some(slot) => {
                *slot = cell;
                Ok(())
            }
            None => Err(Error::OutOfRange(format!(
                "index {index} outside buffer of {len} cells"
            ))),
        }
    }

    /// Resize the buffer, filling newly exposed cells with [`Cell::BLANK`].
    ///
    /// See [`resize_with`](Buffer::resize_with).
    pub fn resize(&mut self, new_width: u16, new_height: u16) -> Result<()> {
        self.resize_with(new_width, new_height, Cell::BLANK)
    }

    /// Resize the buffer, preserving the overlapping content.
    ///
    /// Cells at `(x, y)` with `x < min(old, new)` widths and heights keep
    /// their values; cells outside the overlap are dropped (shrink) or set
    /// to `fill` (grow). Resizing to the current dimensions returns
    /// immediately without allocating. Fails with
    /// [`Error::InvalidArgument`], before any allocation, if either
    /// dimension is 0.
    ///
    /// Storage and dimensions are replaced together; there is no observable
    /// half-resized state from this thread's point of view. Not safe to call
    /// concurrently with any other access to the same buffer.
    pub fn resize_with(&mut self, new_width: u16, new_height: u16, fill: Cell) -> Result<()> {
        if new_width == 0 || new_height == 0 {
            return Err(Error::InvalidArgument(format!(
                "buffer dimensions must be >= 1, got {new_width}x{new_height}"
            )));
        }
        if new_width == self.width && new_height == self.height {
            return Ok(());
        }

        let new_size = (new_width as usize) * (new_height as usize);
        let mut new_cells = vec![fill; new_size];

        let copy_width = self.width.min(new_width) as usize;
        let copy_height = self.height.min(new_height) as usize;

        for y in 0..copy_height {
            let old_start = y * (self.width as usize);
            let new_start = y * (new_width as usize);
            new_cells[new_start..new_start + copy_width]
                .copy_from_slice(&self.cells[old_start..old_start + copy_width]);
        }

        self.cells = new_cells;
        self.width = new_width;
        self.height = new_height;
        Ok(())
    }

    /// Paint a rectangular region, clipped to the buffer.
    ///
    /// Positions of `area` outside the buffer are silently skipped; the
    /// rectangle is clipped, never rejected. For each in-bounds cell the
    /// character is replaced only when `ch` is `Some`, and the colors are
    /// applied under the keep-current rule of [`Cell::with_colors`].
    ///
    /// Contrast with [`blit_rect`](Buffer::blit_rect), whose destination
    /// overflow is an error.
    pub fn fill(&mut self, area: Rect, ch: Option<char>, fg: Option<Rgb>, bg: Option<Rgb>) {
        let clip = area.intersection(&self.bounds());
        for y in clip.y..clip.bottom() {
            let row_start = (y as usize) * (self.width as usize);
            for x in clip.x..clip.right() {
                let idx = row_start + (x as usize);
                let mut cell = self.cells[idx];
                if let Some(c) = ch {
                    cell = cell.with_ch(c);
                }
                self.cells[idx] = cell.with_colors(fg, bg);
            }
        }
    }

    /// Copy the whole of `src` into this buffer at (`dest_x`, `dest_y`).
    ///
    /// See [`blit_rect`](Buffer::blit_rect).
    pub fn blit(&mut self, src: &Self, dest_x: u16, dest_y: u16) -> Result<()> {
        self.blit_rect(src, src.bounds(), dest_x, dest_y)
    }

    /// Copy a rectangle of `src` into this buffer at (`dest_x`, `dest_y`).
    ///
    /// The source cell at `(i, j)` within `src_area` lands at
    /// `(dest_x + i - src_area.x, dest_y + j - src_area.y)`.
    ///
    /// Fails with [`Error::OutOfRange`] if `src_area` exceeds the source
    /// bounds or the destination rectangle exceeds this buffer's bounds.
    /// Unlike [`fill`](Buffer::fill), destination overflow is NOT clipped;
    /// that asymmetry is deliberate and part of the contract. Bounds are
    /// checked up front, so a failing blit writes nothing.
    pub fn blit_rect(&mut self, src: &Self, src_area: Rect, dest_x: u16, dest_y: u16) -> Result<()> {
        if src_area.is_empty() {
            return Ok(());
        }

        let (sx, sy) = (src_area.x as usize, src_area.y as usize);
        let (w, h) = (src_area.width as usize, src_area.height as usize);
        let (dx, dy) = (dest_x as usize, dest_y as usize);

        if sx + w > src.width as usize || sy + h > src.height as usize {
            return Err(Error::OutOfRange(format!(
                "source rectangle {src_area:?} outside {}x{} buffer",
                src.width, src.height
            )));
        }
        if dx + w > self.width as usize || dy + h > self.height as usize {
            return Err(Error::OutOfRange(format!(
                "destination rectangle ({dest_x}, {dest_y}, {w}x{h}) outside {}x{} buffer",
                self.width, self.height
            )));
        }

        for j in 0..h {
            let src_start = (sy + j) * (src.width as usize) + sx;
            let dest_start = (dy + j) * (self.width as usize) + dx;
            self.cells[dest_start..dest_start + w]
                .copy_from_slice(&src.cells[src_start..src_start + w]);
        }
        Ok(())
    }

    /// Set every cell to [`Cell::BLANK`]. Dimensions are unchanged.
    pub fn clear(&mut self) {
        self.clear_with(Cell::BLANK);
    }

    /// Set every cell to the given cell. Dimensions are unchanged.
    pub fn clear_with(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Place text starting at (x, y), one cell per character.
    ///
    /// The text is split on line breaks; character `n` of line `i` targets
    /// `(x + n, y + i)`. Targets outside the buffer on either axis
    /// (including negative coordinates, which is why the parameters are
    /// signed) are silently skipped; printing never fails from overflow.
    /// Empty text is a no-op. Placed cells have the character replaced and
    /// colors applied under the keep-current rule.
    pub fn print_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        fg: Option<Rgb>,
        bg: Option<Rgb>,
    ) {
        for (row, line) in text.lines().enumerate() {
            let ty = i64::from(y) + row as i64;
            if ty < 0 || ty >= i64::from(self.height) {
                continue;
            }
            let row_start = (ty as usize) * (self.width as usize);
            for (col, ch) in line.chars().enumerate() {
                let tx = i64::from(x) + col as i64;
                if tx < 0 || tx >= i64::from(self.width) {
                    continue;
                }
                let idx = row_start + (tx as usize);
                self.cells[idx] = self.cells[idx].with_ch(ch).with_colors(fg, bg);
            }
        }
    }

    /// An independent copy of the row-major cell storage.
    pub fn to_flat(&self) -> Vec<Cell> {
        self.cells.clone()
    }

    /// An independent copy organized as `height` rows of `width` cells.
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.cells
            .chunks(self.width as usize)
            .map(<[Cell]>::to_vec)
            .collect()
    }

    /// A plain-text rendering of the character channel, one line per row,
    /// each terminated by a line break. Colors are ignored. Intended for
    /// human-readable assertions.
    pub fn to_debug_string(&self) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * (self.height as usize));
        for row in self.cells.chunks(self.width as usize) {
            for cell in row {
                out.push(cell.ch());
            }
            out.push('\n');
        }
        out
    }
}

impl std::fmt::Debug for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Buffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells_of(s: &str) -> Vec<Cell> {
        s.chars().map(Cell::new).collect()
    }

    #[test]
    fn test_new() {
        let buffer = Buffer::new(80, 24).unwrap();
        assert_eq!(buffer.width(), 80);
        assert_eq!(buffer.height(), 24);
        assert_eq!(buffer.len(), 80 * 24);
        assert_eq!(buffer.at(0).unwrap(), Cell::BLANK);
    }

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert!(matches!(
            Buffer::new(0, 24),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            Buffer::new(80, 0),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_filled() {
        let x = Cell::new('x');
        let buffer = Buffer::filled(3, 2, x).unwrap();
        assert!(buffer.to_flat().iter().all(|&c| c == x));
    }

    #[test]
    fn test_get_set() {
        let mut buffer = Buffer::new(80, 24).unwrap();
        buffer.set(5, 10, Cell::new('X')).unwrap();
        assert_eq!(buffer.get(5, 10).unwrap().ch(), 'X');
    }

    #[test]
    fn test_bounds_errors() {
        let mut buffer = Buffer::new(80, 24).unwrap();
        assert!(buffer.get(79, 23).is_ok());
        assert!(matches!(buffer.get(80, 23), Err(Error::OutOfRange(_))));
        assert!(matches!(buffer.get(79, 24), Err(Error::OutOfRange(_))));
        assert!(matches!(
            buffer.set(80, 0, Cell::BLANK),
            Err(Error::OutOfRange(_))
        ));
    }

    #[test]
    fn test_in_bounds() {
        let buffer = Buffer::new(4, 3).unwrap();
        assert!(buffer.in_bounds(3, 2));
        assert!(!buffer.in_bounds(4, 2));
        assert!(!buffer.in_bounds(3, 3));
    }

    #[test]
    fn test_linear_index_access() {
        let mut buffer = Buffer::new(5, 3).unwrap();
        buffer.set_at(7, Cell::new('Q')).unwrap();
        // index 7 = y*5 + x -> (2, 1)
        assert_eq!(buffer.get(2, 1).unwrap().ch(), 'Q');
        assert_eq!(buffer.at(7).unwrap().ch(), 'Q');
        assert!(matches!(buffer.at(15), Err(Error::OutOfRange(_))));
        assert!(matches!(
            buffer.set_at(15, Cell::BLANK),
            Err(Error::OutOfRange(_))
        ));
    }

    #[test]
    fn test_row_major_addressing() {
        let mut buffer = Buffer::new(7, 4).unwrap();
        for y in 0..4u16 {
            for x in 0..7u16 {
                let code = u32::from('a') + u32::from(y * 7 + x);
                buffer.set(x, y, Cell::from_u32(code).unwrap()).unwrap();
            }
        }
        let flat = buffer.to_flat();
        for y in 0..4u16 {
            for x in 0..7u16 {
                assert_eq!(
                    buffer.get(x, y).unwrap(),
                    flat[(y as usize) * 7 + (x as usize)]
                );
            }
        }
    }

    #[test]
    fn test_from_flat_round_trip() {
        let cells = cells_of("ABCD");
        let buffer = Buffer::from_flat(&cells, 2).unwrap();
        assert_eq!(buffer.width(), 2);
        assert_eq!(buffer.height(), 2);
        assert_eq!(buffer.to_flat(), cells);
    }

    #[test]
    fn test_from_flat_rejects_bad_input() {
        assert!(matches!(
            Buffer::from_flat(&[], 2),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            Buffer::from_flat(&cells_of("ABC"), 0),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            Buffer::from_flat(&cells_of("ABC"), 2),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_from_rows_round_trip() {
        let a = Cell::new('A');
        let b = Cell::new('B');
        let c = Cell::new('C');
        let d = Cell::new('D');
        let buffer = Buffer::from_rows(&[vec![a, b], vec![c, d]]).unwrap();
        assert_eq!(buffer.to_flat(), vec![a, b, c, d]);

        let rebuilt = Buffer::from_flat(&[a, b, c, d], 2).unwrap();
        assert_eq!(rebuilt.to_rows(), buffer.to_rows());
    }

    #[test]
    fn test_from_rows_rejects_bad_input() {
        assert!(matches!(
            Buffer::from_rows(&[]),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            Buffer::from_rows(&[vec![]]),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            Buffer::from_rows(&[cells_of("AB"), cells_of("C")]),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_resize_preserves_overlap() {
        let mut buffer = Buffer::new(80, 24).unwrap();
        buffer.set(5, 5, Cell::new('X')).unwrap();

        buffer.resize(100, 30).unwrap();
        assert_eq!(buffer.width(), 100);
        assert_eq!(buffer.height(), 30);
        assert_eq!(buffer.get(5, 5).unwrap().ch(), 'X');
        // Newly exposed cells are blank
        assert_eq!(buffer.get(99, 29).unwrap(), Cell::BLANK);

        buffer.resize(10, 10).unwrap();
        assert_eq!(buffer.get(5, 5).unwrap().ch(), 'X');
        assert!(matches!(buffer.get(15, 15), Err(Error::OutOfRange(_))));
    }

    #[test]
    fn test_resize_with_fill() {
        let mut buffer = Buffer::new(2, 2).unwrap();
        buffer.resize_with(3, 2, Cell::new('#')).unwrap();
        assert_eq!(buffer.to_debug_string(), "  #\n  #\n");
    }

    #[test]
    fn test_resize_same_dims_is_noop() {
        let mut buffer = Buffer::new(5, 3).unwrap();
        buffer.set(1, 1, Cell::new('X')).unwrap();
        let before = buffer.to_flat();
        buffer.resize(5, 3).unwrap();
        assert_eq!(buffer.to_flat(), before);
    }

    #[test]
    fn test_resize_rejects_zero_and_leaves_buffer_intact() {
        let mut buffer = Buffer::new(5, 3).unwrap();
        buffer.set(1, 1, Cell::new('X')).unwrap();
        assert!(matches!(
            buffer.resize(0, 3),
            Err(Error::InvalidArgument(_))
        ));
        assert_eq!(buffer.width(), 5);
        assert_eq!(buffer.get(1, 1).unwrap().ch(), 'X');
    }

    #[test]
    fn test_resize_shrink_scenario() {
        let mut buffer = Buffer::filled(3, 3, Cell::new('X')).unwrap();
        buffer.resize(2, 3).unwrap();
        assert_eq!(buffer.to_debug_string(), "XX\nXX\nXX\n");
    }

    #[test]
    fn test_fill_clips_to_buffer() {
        let mut buffer = Buffer::new(5, 3).unwrap();
        // Rectangle hangs off the right/bottom edges; no error
        buffer.fill(Rect::new(3, 1, 10, 10), Some('#'), None, None);
        assert_eq!(buffer.to_debug_string(), "     \n   ##\n   ##\n");
    }

    #[test]
    fn test_fill_keep_current_channels() {
        let red = Rgb::new(255, 0, 0);
        let blue = Rgb::new(0, 0, 255);
        let mut buffer = Buffer::filled(2, 1, Cell::new('A').with_fg(red)).unwrap();

        // Only the background is supplied: character and fg survive
        buffer.fill(Rect::new(0, 0, 2, 1), None, None, Some(blue));
        let cell = buffer.get(0, 0).unwrap();
        assert_eq!(cell.ch(), 'A');
        assert_eq!(cell.fg(), Some(red));
        assert_eq!(cell.bg(), Some(blue));
    }

    #[test]
    fn test_blit_copies_rectangle() {
        let mut src = Buffer::new(2, 2).unwrap();
        src.set(0, 0, Cell::new('A')).unwrap();
        src.set(1, 0, Cell::new('B')).unwrap();
        src.set(0, 1, Cell::new('C')).unwrap();
        src.set(1, 1, Cell::new('D')).unwrap();

        let mut dest = Buffer::new(5, 3).unwrap();
        dest.blit(&src, 2, 1).unwrap();
        assert_eq!(dest.to_debug_string(), "     \n  AB \n  CD \n");
    }

    #[test]
    fn test_blit_sub_rectangle() {
        let mut src = Buffer::new(3, 3).unwrap();
        src.set(1, 1, Cell::new('Z')).unwrap();

        let mut dest = Buffer::new(3, 3).unwrap();
        dest.blit_rect(&src, Rect::new(1, 1, 1, 1), 0, 0).unwrap();
        assert_eq!(dest.get(0, 0).unwrap().ch(), 'Z');
    }

    #[test]
    fn test_blit_destination_overflow_fails() {
        let src = Buffer::filled(3, 3, Cell::new('S')).unwrap();
        let mut dest = Buffer::new(4, 4).unwrap();
        assert!(matches!(
            dest.blit(&src, 2, 2),
            Err(Error::OutOfRange(_))
        ));
    }

    #[test]
    fn test_blit_fill_asymmetry() {
        // The same out-of-bounds rectangle: blit fails, fill clips.
        let src = Buffer::filled(3, 3, Cell::new('S')).unwrap();
        let mut dest = Buffer::new(4, 4).unwrap();

        assert!(dest.blit(&src, 2, 2).is_err());

        let mut filled = Buffer::new(4, 4).unwrap();
        filled.fill(Rect::new(2, 2, 3, 3), Some('S'), None, None);
        assert_eq!(filled.get(3, 3).unwrap().ch(), 'S');
    }

    #[test]
    fn test_failed_blit_writes_nothing() {
        let src = Buffer::filled(3, 3, Cell::new('S')).unwrap();
        let mut dest = Buffer::new(4, 4).unwrap();
        let before = dest.to_flat();
        let _ = dest.blit(&src, 2, 2);
        assert_eq!(dest.to_flat(), before);
    }

    #[test]
    fn test_blit_source_overflow_fails() {
        let src = Buffer::new(2, 2).unwrap();
        let mut dest = Buffer::new(10, 10).unwrap();
        assert!(matches!(
            dest.blit_rect(&src, Rect::new(1, 1, 2, 2), 0, 0),
            Err(Error::OutOfRange(_))
        ));
    }

    #[test]
    fn test_clear() {
        let mut buffer = Buffer::filled(3, 2, Cell::new('x')).unwrap();
        buffer.clear();
        assert!(buffer.to_flat().iter().all(|&c| c == Cell::BLANK));
        assert_eq!(buffer.width(), 3);
    }

    #[test]
    fn test_print_text_basic() {
        let mut buffer = Buffer::new(5, 3).unwrap();
        buffer.print_text("HELLO", 0, 1, None, None);
        assert_eq!(buffer.to_debug_string(), "     \nHELLO\n     \n");
    }

    #[test]
    fn test_print_text_multiline() {
        let mut buffer = Buffer::new(3, 3).unwrap();
        buffer.print_text("ab\ncd", 1, 0, None, None);
        assert_eq!(buffer.to_debug_string(), " ab\n cd\n   \n");
    }

    #[test]
    fn test_print_text_clips_silently() {
        let mut buffer = Buffer::new(3, 2).unwrap();
        // Overflows the right edge and the bottom edge
        buffer.print_text("ABCDE\nFG\nHI", 1, 1, None, None);
        assert_eq!(buffer.to_debug_string(), "   \n AB\n");
    }

    #[test]
    fn test_print_text_negative_origin() {
        let mut buffer = Buffer::new(3, 2).unwrap();
        buffer.print_text("ABCD\nEFGH", -2, -1, None, None);
        // Line 0 lands above the buffer; line 1 loses its first two chars
        assert_eq!(buffer.to_debug_string(), "GH \n   \n");
    }

    #[test]
    fn test_print_text_empty_is_noop() {
        let mut buffer = Buffer::filled(2, 2, Cell::new('x')).unwrap();
        let before = buffer.to_flat();
        buffer.print_text("", 0, 0, None, None);
        assert_eq!(buffer.to_flat(), before);
    }

    #[test]
    fn test_print_text_color_rule() {
        let red = Rgb::new(255, 0, 0);
        let blue = Rgb::new(0, 0, 255);
        let mut buffer = Buffer::filled(2, 1, Cell::BLANK.with_bg(blue)).unwrap();
        buffer.print_text("AB", 0, 0, Some(red), None);
        let cell = buffer.get(1, 0).unwrap();
        assert_eq!(cell.ch(), 'B');
        assert_eq!(cell.fg(), Some(red));
        assert_eq!(cell.bg(), Some(blue)); // kept, not cleared
    }

    #[test]
    fn test_to_rows_shape() {
        let buffer = Buffer::new(4, 3).unwrap();
        let rows = buffer.to_rows();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.len() == 4));
    }

    #[test]
    fn test_copy_out_views_are_independent() {
        let mut buffer = Buffer::new(2, 2).unwrap();
        let mut flat = buffer.to_flat();
        flat[0] = Cell::new('Z');
        assert_eq!(buffer.get(0, 0).unwrap(), Cell::BLANK);

        let mut rows = buffer.to_rows();
        rows[0][0] = Cell::new('Z');
        assert_eq!(buffer.get(0, 0).unwrap(), Cell::BLANK);

        buffer.set(0, 0, Cell::new('Q')).unwrap();
        assert_eq!(flat[0].ch(), 'Z'); // copy unaffected by later writes
    }
}
