//! # GlyphGrid
//!
//! A diff-emitting character grid for terminal surfaces.
//!
//! GlyphGrid is a 2D buffer of styled character cells that can be mutated
//! programmatically and then synchronized to an external output (an ANSI
//! terminal, a plain-text buffer, or a test harness) with a minimal number
//! of escape sequences.
//!
//! ## Core Concepts
//!
//! - **Cells are values**: a character plus optional colors; an absent color
//!   inherits the terminal default
//! - **Row-major buffer**: one contiguous allocation, `index = y * width + x`
//! - **Diff emission**: rendering tracks the last-emitted style and only
//!   emits color/reset commands at actual visual transitions
//! - **No runtime of its own**: synchronous, single-threaded; the caller's
//!   loop owns timing and repetition
//!
//! ## Example
//!
//! ```rust
//! use glyphgrid::{render, Buffer, Rgb, TextSink};
//!
//! let mut buffer = Buffer::new(12, 3)?;
//! buffer.print_text("hello", 1, 1, Some(Rgb::new(255, 80, 40)), None);
//!
//! let mut sink = TextSink::new(12, 3);
//! render(&buffer, &mut sink)?;
//! assert!(sink.contents().contains("hello"));
//! # Ok::<(), glyphgrid::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod buffer;
pub mod error;
pub mod layout;
pub mod render;
pub mod terminal;

// Re-exports for convenience
pub use buffer::{Buffer, Cell, GridRead, GridWrite, Rgb};
pub use error::{Error, Result};
pub use layout::Rect;
pub use render::{render, Sink};
pub use terminal::{AnsiSink, RecordingSink, SinkOp, TextSink};
