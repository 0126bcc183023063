//! Render module: the diff emitter and the sink contract it writes through.
//!
//! [`render`] walks a grid row-major and emits style commands only at visual
//! transitions; [`Sink`] is the abstract output boundary. Concrete sinks
//! live in [`crate::terminal`].

mod renderer;
mod sink;

pub use renderer::render;
pub use sink::Sink;
