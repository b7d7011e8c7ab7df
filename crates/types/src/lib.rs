//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the compositor.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (compositing, terminal rendering, frame scheduling).
//!
//! # Coordinates
//!
//! Layers and the viewport live in an unbounded integer plane:
//!
//! - **x** grows to the right, **y** grows downwards
//! - Positions are `i32`; extent arithmetic is done in `i64` so that layers
//!   placed arbitrarily far away can never overflow
//! - An [`Extent`] is half-open: `x0..x1` by `y0..y1`
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MIN_FRAME_INTERVAL_MS` | 10 | Floor for the scheduler interval |
//! | `DEFAULT_FPS` | 30 | Frame rate used by the demo when unset |
//!
//! # Examples
//!
//! ```
//! use swears_types::{Extent, SceneAction};
//!
//! let viewport = Extent::new(0, 0, 3, 1);
//! let layer = Extent::new(5, 0, 2, 1);
//! assert!(viewport.intersect(&layer).is_empty());
//!
//! let action = SceneAction::from_str("panLeft").unwrap();
//! assert_eq!(action, SceneAction::PanLeft);
//! ```

use std::fmt;

/// Lower bound on the interval between two frames (10ms).
///
/// Requested frame rates above 100 FPS are clamped to this interval.
pub const MIN_FRAME_INTERVAL_MS: u64 = 10;

/// Frame rate used when none is configured.
pub const DEFAULT_FPS: u32 = 30;

/// Stable handle to a layer owned by a scene.
///
/// Ids are never reused within one scene, so a handle to a removed layer stays
/// detectably stale instead of aliasing a newer layer.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(u64);

impl LayerId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LayerId({})", self.0)
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Half-open integer rectangle in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Extent {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
}

impl Extent {
    /// Extent of a `width` x `height` box whose top-left cell is at `(x, y)`.
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        let x0 = i64::from(x);
        let y0 = i64::from(y);
        Self {
            x0,
            y0,
            x1: x0 + i64::from(width),
            y1: y0 + i64::from(height),
        }
    }

    pub fn width(&self) -> i64 {
        (self.x1 - self.x0).max(0)
    }

    pub fn height(&self) -> i64 {
        (self.y1 - self.y0).max(0)
    }

    pub fn is_empty(&self) -> bool {
        self.x1 <= self.x0 || self.y1 <= self.y0
    }

    /// Check if the point lies inside this extent
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= self.x0 && x < self.x1 && y >= self.y0 && y < self.y1
    }

    /// Rectangular intersection; the result may be empty.
    pub fn intersect(&self, other: &Extent) -> Extent {
        Extent {
            x0: self.x0.max(other.x0),
            y0: self.y0.max(other.y0),
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
        }
    }
}

/// Actions the interactive driver can apply to a scene
///
/// These are produced by terminal input and consumed by the demo loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneAction {
    /// Move the viewport one cell left
    PanLeft,
    /// Move the viewport one cell right
    PanRight,
    /// Move the viewport one cell up
    PanUp,
    /// Move the viewport one cell down
    PanDown,
    /// Move the focused layer one cell left (collision checked)
    MoveLeft,
    /// Move the focused layer one cell right (collision checked)
    MoveRight,
    /// Move the focused layer one cell up (collision checked)
    MoveUp,
    /// Move the focused layer one cell down (collision checked)
    MoveDown,
    /// Bring the focused layer one step towards the front
    Raise,
    /// Send the focused layer one step towards the back
    Lower,
    /// Show or hide the secondary layer
    ToggleVisible,
}

impl SceneAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use swears_types::SceneAction;
    ///
    /// assert_eq!(SceneAction::from_str("moveUp"), Some(SceneAction::MoveUp));
    /// assert_eq!(SceneAction::from_str("RAISE"), Some(SceneAction::Raise));
    /// assert_eq!(SceneAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "panleft" => Some(SceneAction::PanLeft),
            "panright" => Some(SceneAction::PanRight),
            "panup" => Some(SceneAction::PanUp),
            "pandown" => Some(SceneAction::PanDown),
            "moveleft" => Some(SceneAction::MoveLeft),
            "moveright" => Some(SceneAction::MoveRight),
            "moveup" => Some(SceneAction::MoveUp),
            "movedown" => Some(SceneAction::MoveDown),
            "raise" => Some(SceneAction::Raise),
            "lower" => Some(SceneAction::Lower),
            "togglevisible" => Some(SceneAction::ToggleVisible),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            SceneAction::PanLeft => "panLeft",
            SceneAction::PanRight => "panRight",
            SceneAction::PanUp => "panUp",
            SceneAction::PanDown => "panDown",
            SceneAction::MoveLeft => "moveLeft",
            SceneAction::MoveRight => "moveRight",
            SceneAction::MoveUp => "moveUp",
            SceneAction::MoveDown => "moveDown",
            SceneAction::Raise => "raise",
            SceneAction::Lower => "lower",
            SceneAction::ToggleVisible => "toggleVisible",
        }
    }

    /// Unit step `(dx, dy)` for pan and move actions.
    pub fn delta(&self) -> Option<(i32, i32)> {
        match self {
            SceneAction::PanLeft | SceneAction::MoveLeft => Some((-1, 0)),
            SceneAction::PanRight | SceneAction::MoveRight => Some((1, 0)),
            SceneAction::PanUp | SceneAction::MoveUp => Some((0, -1)),
            SceneAction::PanDown | SceneAction::MoveDown => Some((0, 1)),
            _ => None,
        }
    }
}
