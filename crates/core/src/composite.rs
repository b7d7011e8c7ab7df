//! Composite buffer and the compositor that fills it.
//!
//! The composite is a viewport-shaped grid of stacks. After a rebuild, the stack
//! at a viewport cell lists every opaque contribution at that cell in z-order,
//! front first, so `stack[0]` is what a renderer should draw.
//!
//! The buffer also remembers which region of the plane it was built for. The
//! collision gate reads that snapshot, not the live viewport.

use log::trace;

use crate::layer::Layer;
use crate::scene::Viewport;
use crate::types::{Extent, LayerId};

/// One opaque cell contributed by a layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contribution<P = char> {
    pub payload: P,
    pub source: LayerId,
}

/// Per-viewport-cell stacks of contributions, rebuilt in place every frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composite<P = char> {
    width: u16,
    height: u16,
    extent: Extent,
    /// Row-major stacks (y * width + x).
    cells: Vec<Vec<Contribution<P>>>,
}

impl<P> Composite<P> {
    /// Empty composite covering `width` x `height` cells at the plane origin.
    pub fn new(width: u16, height: u16) -> Self {
        let len = usize::from(width) * usize::from(height);
        let mut cells = Vec::with_capacity(len);
        cells.resize_with(len, Vec::new);
        Self {
            width,
            height,
            extent: Extent::new(0, 0, u32::from(width), u32::from(height)),
            cells,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Region of the plane this composite was last built for.
    pub fn extent(&self) -> Extent {
        self.extent
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    /// Stack at viewport-local `(x, y)`, front first. Empty when out of range.
    pub fn stack(&self, x: u16, y: u16) -> &[Contribution<P>] {
        match self.idx(x, y) {
            Some(i) => &self.cells[i],
            None => &[],
        }
    }

    /// Visually topmost contribution at viewport-local `(x, y)`.
    pub fn top(&self, x: u16, y: u16) -> Option<&Contribution<P>> {
        self.stack(x, y).first()
    }

    /// Stack at plane coordinates, using the snapshot extent.
    pub fn stack_at_plane(&self, px: i64, py: i64) -> &[Contribution<P>] {
        if !self.extent.contains(px, py) {
            return &[];
        }
        let x = (px - self.extent.x0) as usize;
        let y = (py - self.extent.y0) as usize;
        &self.cells[y * usize::from(self.width) + x]
    }

    /// Empty every stack, keeping allocations.
    pub fn clear(&mut self) {
        for stack in &mut self.cells {
            stack.clear();
        }
    }

    /// Number of viewport cells with at least one contribution.
    pub fn covered_cells(&self) -> usize {
        self.cells.iter().filter(|s| !s.is_empty()).count()
    }
}

impl<P: Clone> Composite<P> {
    /// Rebuild from `layers` (front first) as seen through `viewport`.
    ///
    /// Each layer is clipped against its own extent and the viewport at once;
    /// a layer with an empty intersection is skipped. Invisible layers are
    /// skipped. Transparent cells and cells past the end of short rows
    /// contribute nothing.
    pub(crate) fn rebuild(&mut self, viewport: &Viewport, layers: &[Layer<P>]) {
        debug_assert_eq!(self.width, viewport.width());
        debug_assert_eq!(self.height, viewport.height());

        self.clear();
        self.extent = viewport.extent();
        let stride = usize::from(self.width);

        for layer in layers {
            if !layer.is_visible() {
                trace!("compositor: skipping hidden layer {}", layer.id());
                continue;
            }

            let clip = layer.extent().intersect(&self.extent);
            if clip.is_empty() {
                trace!("compositor: layer {} outside viewport", layer.id());
                continue;
            }

            let lx0 = i64::from(layer.x());
            let ly0 = i64::from(layer.y());
            // Layer-to-viewport offset.
            let off_x = lx0 - self.extent.x0;
            let off_y = ly0 - self.extent.y0;

            for local_y in (clip.y0 - ly0)..(clip.y1 - ly0) {
                let Some(row) = layer.grid().rows().get(local_y as usize) else {
                    continue;
                };
                let vp_y = (local_y + off_y) as usize;
                for local_x in (clip.x0 - lx0)..(clip.x1 - lx0) {
                    let Some(Some(payload)) = row.get(local_x as usize) else {
                        continue;
                    };
                    let vp_x = (local_x + off_x) as usize;
                    self.cells[vp_y * stride + vp_x].push(Contribution {
                        payload: payload.clone(),
                        source: layer.id(),
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_composite_is_empty_and_viewport_shaped() {
        let c: Composite = Composite::new(4, 2);
        assert_eq!((c.width(), c.height()), (4, 2));
        assert_eq!(c.covered_cells(), 0);
        assert!(c.stack(3, 1).is_empty());
        assert_eq!(c.extent(), Extent::new(0, 0, 4, 2));
    }

    #[test]
    fn out_of_range_lookups_are_empty() {
        let c: Composite = Composite::new(2, 2);
        assert!(c.stack(2, 0).is_empty());
        assert!(c.top(0, 9).is_none());
        assert!(c.stack_at_plane(-1, 0).is_empty());
        assert!(c.stack_at_plane(0, 2).is_empty());
    }
}
