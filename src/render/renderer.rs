//! Renderer: diff-based emission of a grid to a sink.
//!
//! The renderer walks the grid row-major and emits, per cell, only the style
//! commands the sink actually needs: a color change when the cell's resolved
//! color differs from the last one emitted, a single reset when an unstyled
//! cell follows styled output, and nothing otherwise. Every character is
//! written. The stream of style commands is therefore bounded by the number
//! of visual transitions in the grid, not by `width * height`.

use crate::buffer::{GridRead, Rgb};
use crate::error::Result;
use crate::render::sink::Sink;

/// Last-emitted colors at the sink. `None` means no explicit color is
/// active. Lives only for the duration of one render pass.
#[derive(Debug, Clone, Copy, Default)]
struct StyleState {
    fg: Option<Rgb>,
    bg: Option<Rgb>,
}

impl StyleState {
    const fn any_active(&self) -> bool {
        self.fg.is_some() || self.bg.is_some()
    }
}

/// Render the full grid to the sink with minimal style commands.
///
/// The pass clears the screen, walks rows top-to-bottom and cells
/// left-to-right (a newline separates every row from the next), and flushes
/// the sink once at the end. Emission order is part of the contract: the
/// style-diff state is inherently sequential, so the walk cannot be
/// reordered or parallelized without changing the output.
///
/// Style handling per cell:
/// - both colors absent: emit one [`reset_styles`](Sink::reset_styles) if
///   any color is still active at the sink (skipped when nothing needs
///   resetting), so unstyled cells never inherit stale color;
/// - otherwise, each present channel that differs from the last-emitted
///   value gets one set-color command; unchanged channels emit nothing.
///
/// The renderer does no bounds checking of its own; it trusts
/// [`GridRead::get`]. A sink error aborts the pass immediately and
/// propagates to the caller; nothing is retried or swallowed.
pub fn render<G, S>(grid: &G, sink: &mut S) -> Result<()>
where
    G: GridRead + ?Sized,
    S: Sink + ?Sized,
{
    sink.clear_screen()?;
    let mut state = StyleState::default();

    for y in 0..grid.height() {
        if y > 0 {
            sink.newline()?;
        }

        for x in 0..grid.width() {
            let cell = grid.get(x, y)?;

            match (cell.fg(), cell.bg()) {
                (None, None) => {
                    if state.any_active() {
                        sink.reset_styles()?;
                        state = StyleState::default();
                    }
                }
                (fg, bg) => {
                    if let Some(color) = fg {
                        if state.fg != Some(color) {
                            sink.set_foreground(color)?;
                            state.fg = Some(color);
                        }
                    }
                    if let Some(color) = bg {
                        if state.bg != Some(color) {
                            sink.set_background(color)?;
                            state.bg = Some(color);
                        }
                    }
                }
            }

            sink.write_char(cell.ch())?;
        }
    }

    sink.flush()?;
    Ok(())
}
