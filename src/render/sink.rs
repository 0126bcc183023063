//! Sink: the output boundary the renderer writes through.

use std::io;

use crate::buffer::Rgb;

/// An output surface that materializes emitted commands: an ANSI terminal,
/// a plain-text buffer, or a test harness.
///
/// Every fallible operation returns [`std::io::Result`]; failures are opaque
/// to the renderer and propagate to the caller unchanged. Implementations
/// are free to buffer internally and defer real I/O to [`flush`](Sink::flush),
/// which the renderer calls exactly once per pass, after the last cell.
pub trait Sink {
    /// Clear all prior visual content, leaving a blank surface with no
    /// active style.
    fn clear_screen(&mut self) -> io::Result<()>;

    /// Make `color` the active foreground for subsequent characters.
    fn set_foreground(&mut self, color: Rgb) -> io::Result<()>;

    /// Make `color` the active background for subsequent characters.
    fn set_background(&mut self, color: Rgb) -> io::Result<()>;

    /// Drop any active foreground/background back to the surface default.
    fn reset_styles(&mut self) -> io::Result<()>;

    /// Append one character to the output stream.
    fn write_char(&mut self, ch: char) -> io::Result<()>;

    /// Move to the start of the next row.
    ///
    /// Defaults to writing a plain `\n`; sinks with their own line
    /// discipline (a raw-mode terminal wanting `\r\n`) override this.
    fn newline(&mut self) -> io::Result<()> {
        self.write_char('\n')
    }

    /// Force any buffered output to the real destination.
    fn flush(&mut self) -> io::Result<()>;

    /// Current destination dimensions as `(width, height)` in cells.
    ///
    /// This is live state: a terminal can be resized between renders, so
    /// callers re-query every frame instead of caching the answer.
    fn size(&self) -> io::Result<(u16, u16)>;
}
