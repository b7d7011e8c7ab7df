//! Layer module - an independently positioned grid
//!
//! A layer is owned by exactly one [`Scene`](crate::Scene) and addressed from the
//! outside through its [`LayerId`]. Its z-index is not stored here: the scene
//! derives it from list position, so it can never drift out of sync.

use crate::grid::Grid;
use crate::types::{Extent, LayerId};

/// Options applied when a layer is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerOptions {
    /// Whether the compositor should draw the layer.
    pub visible: bool,
}

impl Default for LayerOptions {
    fn default() -> Self {
        Self { visible: true }
    }
}

/// A positioned grid of cells inside a scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer<P = char> {
    id: LayerId,
    x: i32,
    y: i32,
    grid: Grid<P>,
    visible: bool,
}

impl<P> Layer<P> {
    pub(crate) fn new(id: LayerId, grid: Grid<P>, options: LayerOptions) -> Self {
        Self {
            id,
            x: 0,
            y: 0,
            grid,
            visible: options.visible,
        }
    }

    pub fn id(&self) -> LayerId {
        self.id
    }

    /// Top-left cell position in the plane.
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    pub fn grid(&self) -> &Grid<P> {
        &self.grid
    }

    /// Replace the layer's data; width and height follow the new grid.
    pub fn set_data(&mut self, grid: Grid<P>) {
        self.grid = grid;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    /// Position after moving by `(dx, dy)`, saturating at the `i32` range.
    pub fn translated_position(&self, dx: i32, dy: i32) -> (i32, i32) {
        (self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// Unconditional positional update, no collision checks and no clamping.
    pub fn raw_translate(&mut self, dx: i32, dy: i32) {
        let (x, y) = self.translated_position(dx, dy);
        self.set_position(x, y);
    }

    /// Region of the plane covered by the layer's nominal width and height.
    pub fn extent(&self) -> Extent {
        Extent::new(self.x, self.y, self.grid.width(), self.grid.height())
    }

    /// Opaque payload at plane coordinates, if any.
    pub fn payload_at(&self, px: i64, py: i64) -> Option<&P> {
        let lx = usize::try_from(px - i64::from(self.x)).ok()?;
        let ly = usize::try_from(py - i64::from(self.y)).ok()?;
        self.grid.get(lx, ly)
    }
}
