//! Hello demo: place styled text and render it once to the terminal.

use glyphgrid::{render, AnsiSink, Buffer, Cell, Rect, Rgb, Sink};

fn main() -> glyphgrid::Result<()> {
    let mut sink = AnsiSink::stdout();
    let (width, height) = sink.size().unwrap_or((80, 24));

    let mut buffer = Buffer::new(width, height.min(12))?;

    // Banner band across the top
    buffer.fill(
        Rect::new(0, 0, buffer.width(), 3),
        None,
        None,
        Some(Rgb::new(24, 28, 40)),
    );
    buffer.print_text(
        "glyphgrid",
        2,
        1,
        Some(Rgb::new(255, 176, 64)),
        None,
    );
    buffer.print_text(
        "a diff-emitting character grid",
        2,
        4,
        Some(Rgb::new(128, 200, 255)),
        None,
    );
    buffer.print_text("plain text inherits the terminal default", 2, 6, None, None);

    // Swatch row built cell by cell
    for i in 0..16u16 {
        let shade = (i * 16) as u8;
        buffer.set(
            2 + i,
            8,
            Cell::new('█').with_fg(Rgb::new(shade, 96, 255 - shade)),
        )?;
    }

    render(&buffer, &mut sink)?;

    // Leave the shell prompt on its own line
    sink.newline()?;
    sink.flush()?;
    Ok(())
}
