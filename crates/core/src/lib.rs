//! Core compositing module - pure, deterministic, and testable
//!
//! This module contains the layer stack, z-order management, the compositor and
//! the collision gate. It has **no dependencies** on terminals, timers, or I/O,
//! making it:
//!
//! - **Deterministic**: the same layers and viewport always produce the same composite
//! - **Testable**: every operation is a plain method on [`Scene`]
//! - **Portable**: any sink can consume a [`Composite`] (terminal, string, pixels)
//!
//! # Module Structure
//!
//! - [`grid`]: cell data, text-to-grid conversion, ragged rows
//! - [`layer`]: a positioned grid with a visibility flag
//! - [`scene`]: viewport, z-order list (add/remove/reorder), compositing entry point
//! - [`composite`]: per-cell contribution stacks and the compositor
//! - [`collision`]: collision-gated layer translation against the last composite
//! - [`options`]: render options with default/override merging
//!
//! # Model
//!
//! - **Plane**: unbounded integer space; layers and the viewport are positioned in it
//! - **Z-order**: index 0 is frontmost; a layer's z-index is its list position
//! - **Composite**: viewport-shaped; each cell holds opaque contributions, front first
//! - **Hidden layers** are skipped by the compositor
//!
//! # Example
//!
//! ```
//! use swears_core::{Grid, Scene};
//!
//! let mut scene = Scene::new(3, 1).unwrap();
//! let a = scene.add_layer(Grid::from_text("XXX", None));
//! let b = scene.add_layer(Grid::from_text("YYY", None));
//!
//! let composite = scene.compose();
//! assert_eq!(composite.top(0, 0).unwrap().payload, 'X');
//! assert_eq!(composite.stack(0, 0).len(), 2);
//!
//! scene.move_to_top(b).unwrap();
//! assert_eq!(scene.compose().top(0, 0).unwrap().payload, 'Y');
//! assert_eq!(scene.z_index(a), Some(1));
//! ```

pub mod collision;
pub mod composite;
pub mod error;
pub mod grid;
pub mod layer;
pub mod options;
pub mod scene;

pub use swears_types as types;

// Re-export commonly used types for convenience
pub use collision::Collider;
pub use composite::{Composite, Contribution};
pub use error::SceneError;
pub use grid::{Cell, Grid};
pub use layer::{Layer, LayerOptions};
pub use options::RenderOptions;
pub use scene::{Scene, Viewport};
pub use types::{Extent, LayerId};
