//! `AnsiSink`: single-syscall ANSI escape-sequence sink.

use std::io::{self, Stdout, Write};

use crate::buffer::Rgb;
use crate::render::Sink;

/// A [`Sink`] that speaks ANSI escape sequences over any [`io::Write`].
///
/// All output is accumulated in a pre-allocated byte buffer and written to
/// the destination in a single `write` on [`flush`](Sink::flush) to prevent
/// terminal flickering. Colors use 24-bit SGR sequences; rows are separated
/// with `\r\n` so output stays aligned under raw mode.
pub struct AnsiSink<W: Write> {
    out: W,
    buf: Vec<u8>,
}

impl AnsiSink<Stdout> {
    /// An ANSI sink writing to stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> AnsiSink<W> {
    /// Create an ANSI sink over the given writer, with a buffer sized for a
    /// typical terminal frame (4KB).
    pub fn new(out: W) -> Self {
        Self::with_capacity(out, 4096)
    }

    /// Create an ANSI sink with the given escape-buffer capacity.
    pub fn with_capacity(out: W, capacity: usize) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Queue a hide-cursor sequence.
    pub fn cursor_hide(&mut self) {
        self.buf.extend_from_slice(b"\x1b[?25l");
    }

    /// Queue a show-cursor sequence.
    pub fn cursor_show(&mut self) {
        self.buf.extend_from_slice(b"\x1b[?25h");
    }

    /// Consume the sink, returning the underlying writer.
    ///
    /// Queued but unflushed bytes are dropped.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Sink for AnsiSink<W> {
    fn clear_screen(&mut self) -> io::Result<()> {
        // Drop any leftover SGR state, erase the display, home the cursor
        self.buf.extend_from_slice(b"\x1b[0m\x1b[2J\x1b[H");
        Ok(())
    }

    fn set_foreground(&mut self, color: Rgb) -> io::Result<()> {
        write!(self.buf, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b)
    }

    fn set_background(&mut self, color: Rgb) -> io::Result<()> {
        write!(self.buf, "\x1b[48;2;{};{};{}m", color.r, color.g, color.b)
    }

    fn reset_styles(&mut self) -> io::Result<()> {
        self.buf.extend_from_slice(b"\x1b[0m");
        Ok(())
    }

    fn write_char(&mut self, ch: char) -> io::Result<()> {
        let mut utf8 = [0u8; 4];
        self.buf
            .extend_from_slice(ch.encode_utf8(&mut utf8).as_bytes());
        Ok(())
    }

    fn newline(&mut self) -> io::Result<()> {
        self.buf.extend_from_slice(b"\r\n");
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        self.buf.clear();
        Ok(())
    }

    fn size(&self) -> io::Result<(u16, u16)> {
        // Live query: the terminal can be resized between renders
        crossterm::terminal::size()
    }
}
