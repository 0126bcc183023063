//! Game-of-Life demo: a caller-owned tick loop driving the render path.
//!
//! The core has no timing of its own; this loop decides the cadence and
//! calls `render` once per generation.

use std::thread;
use std::time::Duration;

use glyphgrid::{render, AnsiSink, Buffer, Cell, Rgb, Sink};

const GENERATIONS: usize = 300;
const TICK: Duration = Duration::from_millis(60);

struct World {
    alive: Vec<bool>,
    width: usize,
    height: usize,
}

impl World {
    fn new(width: usize, height: usize) -> Self {
        let mut world = Self {
            alive: vec![false; width * height],
            width,
            height,
        };
        // A few gliders marching down-right
        for &(gx, gy) in &[(2, 2), (12, 5), (24, 3), (38, 8)] {
            world.spawn_glider(gx, gy);
        }
        world
    }

    fn spawn_glider(&mut self, x: usize, y: usize) {
        for &(dx, dy) in &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)] {
            let (gx, gy) = (x + dx, y + dy);
            if gx < self.width && gy < self.height {
                self.alive[gy * self.width + gx] = true;
            }
        }
    }

    fn neighbors(&self, x: usize, y: usize) -> usize {
        let mut count = 0;
        for dy in [self.height - 1, 0, 1] {
            for dx in [self.width - 1, 0, 1] {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = (x + dx) % self.width;
                let ny = (y + dy) % self.height;
                if self.alive[ny * self.width + nx] {
                    count += 1;
                }
            }
        }
        count
    }

    fn step(&mut self) {
        let mut next = vec![false; self.alive.len()];
        for y in 0..self.height {
            for x in 0..self.width {
                let n = self.neighbors(x, y);
                let idx = y * self.width + x;
                next[idx] = matches!((self.alive[idx], n), (true, 2 | 3) | (false, 3));
            }
        }
        self.alive = next;
    }

    fn draw(&self, buffer: &mut Buffer) {
        buffer.clear();
        for y in 0..self.height {
            for x in 0..self.width {
                if self.alive[y * self.width + x] {
                    let green = 120 + ((x * 2 + y * 3) % 120) as u8;
                    let _ = buffer.set(
                        x as u16,
                        y as u16,
                        Cell::new('●').with_fg(Rgb::new(80, green, 96)),
                    );
                }
            }
        }
    }
}

fn main() -> glyphgrid::Result<()> {
    let mut sink = AnsiSink::stdout();
    let (width, height) = sink.size().unwrap_or((80, 24));

    let mut buffer = Buffer::new(width, height)?;
    let mut world = World::new(width as usize, height as usize);

    sink.cursor_hide();
    let result = (|| -> glyphgrid::Result<()> {
        for _ in 0..GENERATIONS {
            // The terminal may have been resized between frames
            let (w, h) = sink.size().unwrap_or((buffer.width(), buffer.height()));
            if (w, h) != (buffer.width(), buffer.height()) {
                buffer.resize(w, h)?;
                world = World::new(w as usize, h as usize);
            }

            world.draw(&mut buffer);
            render(&buffer, &mut sink)?;
            world.step();
            thread::sleep(TICK);
        }
        Ok(())
    })();

    sink.cursor_show();
    sink.newline()?;
    sink.flush()?;
    result
}
