//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::SceneAction`]s for the
//! interactive driver. The compositor itself never sees key events.

pub mod map;

pub use swears_types as types;

pub use map::{handle_key_event, should_quit};
