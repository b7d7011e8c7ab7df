//! Scene module - viewport, z-order list and compositing entry point
//!
//! The scene owns every layer. `layers[0]` is the frontmost layer; the z-index of
//! a layer is its position in that list and is derived on demand, never cached.
//! Reorders are done by splicing the list, so the z-indices are always exactly
//! `0..len` with no gaps or duplicates.

use log::debug;

use crate::composite::Composite;
use crate::error::SceneError;
use crate::grid::Grid;
use crate::layer::{Layer, LayerOptions};
use crate::options::RenderOptions;
use crate::types::{Extent, LayerId};

/// Fixed-size window onto the plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u16,
    height: u16,
    x: i32,
    y: i32,
}

impl Viewport {
    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Top-left corner in the plane.
    pub fn origin(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Largest visible x (inclusive).
    pub fn max_x(&self) -> i64 {
        i64::from(self.x) + i64::from(self.width) - 1
    }

    /// Largest visible y (inclusive).
    pub fn max_y(&self) -> i64 {
        i64::from(self.y) + i64::from(self.height) - 1
    }

    pub fn extent(&self) -> Extent {
        Extent::new(self.x, self.y, u32::from(self.width), u32::from(self.height))
    }
}

/// A stack of layers seen through one viewport.
#[derive(Debug, Clone)]
pub struct Scene<P = char> {
    viewport: Viewport,
    layers: Vec<Layer<P>>,
    next_id: u64,
    composite: Composite<P>,
    options: RenderOptions,
}

impl<P> Scene<P> {
    /// Create a scene with a `width` x `height` viewport at the plane origin.
    pub fn new(width: u16, height: u16) -> Result<Self, SceneError> {
        if width == 0 || height == 0 {
            return Err(SceneError::EmptyViewport { width, height });
        }
        Ok(Self {
            viewport: Viewport {
                width,
                height,
                x: 0,
                y: 0,
            },
            layers: Vec::new(),
            next_id: 0,
            composite: Composite::new(width, height),
            options: RenderOptions::default(),
        })
    }

    /// Scene-level render defaults.
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut RenderOptions {
        &mut self.options
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Shift the viewport by `(dx, dy)`. No clamping.
    pub fn translate(&mut self, dx: i32, dy: i32) -> &mut Self {
        self.viewport.x = self.viewport.x.saturating_add(dx);
        self.viewport.y = self.viewport.y.saturating_add(dy);
        debug!(
            "viewport moved to ({}, {})",
            self.viewport.x, self.viewport.y
        );
        self
    }

    // -- Layer lifecycle --

    /// Create a visible layer at (0, 0), at the back of the z-order.
    pub fn add_layer(&mut self, grid: Grid<P>) -> LayerId {
        self.add_layer_with(grid, LayerOptions::default())
    }

    pub fn add_layer_with(&mut self, grid: Grid<P>, options: LayerOptions) -> LayerId {
        let id = LayerId::new(self.next_id);
        self.next_id += 1;
        self.layers.push(Layer::new(id, grid, options));
        debug!("added layer {} at z {}", id, self.layers.len() - 1);
        id
    }

    /// Remove a layer; every layer behind it moves one step forward.
    pub fn remove_layer(&mut self, id: LayerId) -> Result<Layer<P>, SceneError> {
        let idx = self.index_of(id)?;
        let layer = self.layers.remove(idx);
        debug!("removed layer {} from z {}", id, idx);
        Ok(layer)
    }

    /// Destroy every layer.
    pub fn clear_layers(&mut self) {
        debug!("cleared {} layers", self.layers.len());
        self.layers.clear();
    }

    pub fn layer(&self, id: LayerId) -> Option<&Layer<P>> {
        self.layers.iter().find(|l| l.id() == id)
    }

    pub fn layer_mut(&mut self, id: LayerId) -> Option<&mut Layer<P>> {
        self.layers.iter_mut().find(|l| l.id() == id)
    }

    /// Layers in z-order, front first.
    pub fn layers(&self) -> &[Layer<P>] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Current z-index (0 = frontmost).
    pub fn z_index(&self, id: LayerId) -> Option<usize> {
        self.layers.iter().position(|l| l.id() == id)
    }

    pub(crate) fn index_of(&self, id: LayerId) -> Result<usize, SceneError> {
        self.z_index(id).ok_or(SceneError::UnknownLayer(id))
    }

    // -- Z-order --

    /// Swap with the neighbour in front. Returns the new z-index.
    pub fn move_up(&mut self, id: LayerId) -> Result<usize, SceneError> {
        let idx = self.index_of(id)?;
        if idx == 0 {
            return Err(SceneError::AlreadyFrontmost(id));
        }
        self.layers.swap(idx, idx - 1);
        debug!("layer {} moved up to z {}", id, idx - 1);
        Ok(idx - 1)
    }

    /// Swap with the neighbour behind. Returns the new z-index.
    pub fn move_down(&mut self, id: LayerId) -> Result<usize, SceneError> {
        let idx = self.index_of(id)?;
        if idx + 1 >= self.layers.len() {
            return Err(SceneError::AlreadyBackmost(id));
        }
        self.layers.swap(idx, idx + 1);
        debug!("layer {} moved down to z {}", id, idx + 1);
        Ok(idx + 1)
    }

    /// Splice the layer to z-index 0. Already frontmost is not an error.
    pub fn move_to_top(&mut self, id: LayerId) -> Result<usize, SceneError> {
        let idx = self.index_of(id)?;
        if idx > 0 {
            let layer = self.layers.remove(idx);
            self.layers.insert(0, layer);
            debug!("layer {} moved to top from z {}", id, idx);
        }
        Ok(0)
    }

    /// Splice the layer to the last z-index. Already backmost is not an error.
    pub fn move_to_bottom(&mut self, id: LayerId) -> Result<usize, SceneError> {
        let idx = self.index_of(id)?;
        let last = self.layers.len() - 1;
        if idx < last {
            let layer = self.layers.remove(idx);
            self.layers.push(layer);
            debug!("layer {} moved to bottom from z {}", id, idx);
        }
        Ok(last)
    }

    // -- Movement --

    /// Move a layer without any collision check.
    pub fn translate_layer(&mut self, id: LayerId, dx: i32, dy: i32) -> Result<(), SceneError> {
        let idx = self.index_of(id)?;
        self.layers[idx].raw_translate(dx, dy);
        Ok(())
    }

    // -- Compositing --

    /// Composite as of the last [`compose`](Self::compose) call.
    pub fn last_composite(&self) -> &Composite<P> {
        &self.composite
    }
}

impl<P: Clone> Scene<P> {
    /// Rebuild the composite buffer from the current layers and viewport.
    pub fn compose(&mut self) -> &Composite<P> {
        self.composite.rebuild(&self.viewport, &self.layers);
        &self.composite
    }
}
