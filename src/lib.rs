//! Swears (workspace facade crate).
//!
//! This package re-exports the `swears::{core,input,player,term,types}` public API while the
//! implementation lives in dedicated crates under `crates/`.

pub use swears_core as core;
pub use swears_input as input;
pub use swears_player as player;
pub use swears_term as term;
pub use swears_types as types;
