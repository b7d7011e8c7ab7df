//! Terminal rendering module.
//!
//! This is the presentation side of the compositor: it turns a
//! [`Composite`](crate::core::Composite) into visible output. The core never
//! depends on it; the only contract is the composite's shape and the rule that
//! the first entry of each cell's stack is drawn.
//!
//! Sinks:
//! - [`TextSink`]: plain text, one line per viewport row (the "pre" renderer)
//! - [`TerminalRenderer`]: crossterm output with diff redraws
//! - [`SinkRegistry`]: named sinks with scene/call option merging

pub mod fb;
pub mod registry;
pub mod renderer;
pub mod sink;

pub use swears_core as core;
pub use swears_types as types;

pub use fb::FrameBuffer;
pub use registry::{SinkRegistry, DEFAULT_SINK, RENDERER_OPTION};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer, LEFT_OPTION, TOP_OPTION};
pub use sink::{render_to_string, Glyph, RenderSink, TextSink, BLANK_OPTION};
