//! Frame scheduling module
//!
//! Drives a [`Scene`](crate::core::Scene) frame by frame: the caller's update
//! hook runs first, then the compositor, then a render sink. Frames never
//! overlap, and the composite is never read while it is being rebuilt.
//!
//! # Timing
//!
//! - The interval is `1000 / fps` milliseconds, floored at
//!   [`MIN_FRAME_INTERVAL_MS`](crate::types::MIN_FRAME_INTERVAL_MS)
//! - Zero or negative frame rates are rejected before anything starts
//! - Overrunning frames are followed immediately by the next one
//!
//! # Example
//!
//! ```
//! use swears_player::Player;
//! use swears_player::core::{Grid, Scene};
//! use swears_player::term::TextSink;
//!
//! let mut scene = Scene::new(2, 1).unwrap();
//! let id = scene.add_layer(Grid::from_text("o", None));
//!
//! let mut player = Player::new(100).unwrap();
//! let stop = player.stop_handle();
//! let mut sink = TextSink::new(Vec::new());
//!
//! let frames = player
//!     .run(&mut scene, |s: &mut Scene| {
//!         s.translate_layer(id, 1, 0)?;
//!         stop.stop();
//!         Ok(())
//!     }, &mut sink)
//!     .unwrap();
//! assert_eq!(frames, 1);
//! assert_eq!(sink.last_frame(), " o\n");
//! ```

pub mod config;
pub mod error;
pub mod pacer;
pub mod player;

pub use swears_core as core;
pub use swears_term as term;
pub use swears_types as types;

pub use config::PlayerConfig;
pub use error::PlayerError;
pub use pacer::FramePacer;
pub use player::{Player, StopHandle};
