//! `RecordingSink`: a test-harness sink that logs every command.

use std::io;

use crate::buffer::Rgb;
use crate::render::Sink;

/// One recorded sink command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkOp {
    /// The surface was cleared.
    ClearScreen,
    /// A foreground color became active.
    SetForeground(Rgb),
    /// A background color became active.
    SetBackground(Rgb),
    /// Active styles were dropped back to the default.
    ResetStyles,
    /// One character was appended.
    WriteChar(char),
    /// The cursor moved to the start of the next row.
    Newline,
    /// Buffered output was forced out.
    Flush,
}

/// A [`Sink`] that records every command it receives as a [`SinkOp`].
///
/// The op log is what test assertions run against: command counts prove the
/// diff emitter's minimality, and replaying the log reconstructs the visual
/// state. An injected failure point ([`fail_after`](RecordingSink::fail_after))
/// exercises the fail-fast contract of the render path.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    ops: Vec<SinkOp>,
    width: u16,
    height: u16,
    fail_after: Option<usize>,
}

impl RecordingSink {
    /// Create a recording sink reporting the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            ops: Vec::new(),
            width,
            height,
            fail_after: None,
        }
    }

    /// The recorded command log.
    pub fn ops(&self) -> &[SinkOp] {
        &self.ops
    }

    /// Make every command after the first `n` fail with
    /// [`io::ErrorKind::BrokenPipe`], simulating a closed sink.
    pub fn fail_after(&mut self, n: usize) {
        self.fail_after = Some(n);
    }

    fn record(&mut self, op: SinkOp) -> io::Result<()> {
        if let Some(limit) = self.fail_after {
            if self.ops.len() >= limit {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
            }
        }
        self.ops.push(op);
        Ok(())
    }
}

impl Sink for RecordingSink {
    fn clear_screen(&mut self) -> io::Result<()> {
        self.record(SinkOp::ClearScreen)
    }

    fn set_foreground(&mut self, color: Rgb) -> io::Result<()> {
        self.record(SinkOp::SetForeground(color))
    }

    fn set_background(&mut self, color: Rgb) -> io::Result<()> {
        self.record(SinkOp::SetBackground(color))
    }

    fn reset_styles(&mut self) -> io::Result<()> {
        self.record(SinkOp::ResetStyles)
    }

    fn write_char(&mut self, ch: char) -> io::Result<()> {
        self.record(SinkOp::WriteChar(ch))
    }

    fn newline(&mut self) -> io::Result<()> {
        self.record(SinkOp::Newline)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.record(SinkOp::Flush)
    }

    fn size(&self) -> io::Result<(u16, u16)> {
        Ok((self.width, self.height))
    }
}
