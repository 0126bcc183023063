//! Terminal module: concrete [`Sink`](crate::render::Sink) implementations.
//!
//! - [`AnsiSink`]: 24-bit ANSI escape sequences, buffered and flushed in a
//!   single write
//! - [`TextSink`]: plain text, style-blind
//! - [`RecordingSink`]: command log for test harnesses

mod ansi;
mod recording;
mod text;

pub use ansi::AnsiSink;
pub use recording::{RecordingSink, SinkOp};
pub use text::TextSink;
