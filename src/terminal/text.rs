//! `TextSink`: a plain-text output surface.

use std::io;

use crate::buffer::Rgb;
use crate::render::Sink;

/// A [`Sink`] that accumulates plain text and ignores every style command.
///
/// Useful for rendering a grid to a string: logs, golden files, or any
/// destination without color support. The reported size is fixed at
/// construction.
#[derive(Debug, Clone)]
pub struct TextSink {
    contents: String,
    width: u16,
    height: u16,
}

impl TextSink {
    /// Create a text sink reporting the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            contents: String::with_capacity((width as usize + 1) * (height as usize)),
            width,
            height,
        }
    }

    /// The text rendered so far.
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Consume the sink, returning the rendered text.
    pub fn into_string(self) -> String {
        self.contents
    }
}

impl Sink for TextSink {
    fn clear_screen(&mut self) -> io::Result<()> {
        self.contents.clear();
        Ok(())
    }

    fn set_foreground(&mut self, _color: Rgb) -> io::Result<()> {
        Ok(())
    }

    fn set_background(&mut self, _color: Rgb) -> io::Result<()> {
        Ok(())
    }

    fn reset_styles(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn write_char(&mut self, ch: char) -> io::Result<()> {
        self.contents.push(ch);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn size(&self) -> io::Result<(u16, u16)> {
        Ok((self.width, self.height))
    }
}
