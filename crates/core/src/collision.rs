//! Collision-gated layer movement.
//!
//! A checked move tests the layer's prospective footprint against the composite
//! from the last [`Scene::compose`] call, not against a fresh one. Layers that
//! moved since that snapshot are seen at their old position, and regions outside
//! the snapshot's extent are never checked. Callers that need exact results
//! compose before moving.

use log::trace;

use crate::error::SceneError;
use crate::layer::Layer;
use crate::scene::Scene;
use crate::types::{Extent, LayerId};

/// Decides whether a move may proceed when it would overlap another layer.
pub trait Collider<P = char> {
    /// Called once per contact with `other`; return `false` to reject the move.
    fn on_collide(&mut self, other: &Layer<P>) -> bool;
}

impl<P, F> Collider<P> for F
where
    F: FnMut(&Layer<P>) -> bool,
{
    fn on_collide(&mut self, other: &Layer<P>) -> bool {
        self(other)
    }
}

impl<P> Scene<P> {
    /// Move a layer by `(dx, dy)` unless `collider` rejects a contact.
    ///
    /// Every opaque cell of the layer at its prospective position is looked up in
    /// the last composite. Each entry there from another layer is offered to the
    /// collider. All contacts are visited even after a rejection, then the move
    /// is aborted as a whole with [`SceneError::Collision`] naming the first
    /// rejecting layer.
    ///
    /// The target position saturates at the `i32` range; the checked cells and
    /// the committed position are always the same.
    ///
    /// A zero move succeeds immediately. A prospective position outside the
    /// snapshot's extent is applied without checks. That extent is the viewport
    /// as of the last compose, so panning since then does not change what is
    /// checked.
    pub fn translate_layer_checked<C>(
        &mut self,
        id: LayerId,
        dx: i32,
        dy: i32,
        collider: &mut C,
    ) -> Result<(), SceneError>
    where
        C: Collider<P> + ?Sized,
    {
        let idx = self.index_of(id)?;
        if dx == 0 && dy == 0 {
            return Ok(());
        }

        let (tx, ty) = self.layers()[idx].translated_position(dx, dy);
        if let Some(layer) = self.first_rejection(idx, tx, ty, collider) {
            trace!("move of layer {} rejected by {}", id, layer);
            return Err(SceneError::Collision { layer });
        }

        if let Some(layer) = self.layer_mut(id) {
            layer.set_position(tx, ty);
        }
        Ok(())
    }

    fn first_rejection<C>(&self, idx: usize, tx: i32, ty: i32, collider: &mut C) -> Option<LayerId>
    where
        C: Collider<P> + ?Sized,
    {
        let layer = &self.layers()[idx];
        let snapshot = self.last_composite();
        let prospective = Extent::new(tx, ty, layer.width(), layer.height());

        let clip = prospective.intersect(&snapshot.extent());
        if clip.is_empty() {
            trace!("layer {} moving outside the last composite", layer.id());
            return None;
        }

        let mut rejected = None;
        for py in clip.y0..clip.y1 {
            let local_y = (py - prospective.y0) as usize;
            for px in clip.x0..clip.x1 {
                let local_x = (px - prospective.x0) as usize;
                if !layer.grid().is_opaque(local_x, local_y) {
                    continue;
                }
                for entry in snapshot.stack_at_plane(px, py) {
                    if entry.source == layer.id() {
                        continue;
                    }
                    // Removed since the snapshot.
                    let Some(other) = self.layer(entry.source) else {
                        continue;
                    };
                    if !collider.on_collide(other) && rejected.is_none() {
                        rejected = Some(other.id());
                    }
                }
            }
        }
        rejected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    fn two_blocks() -> (Scene, LayerId, LayerId) {
        let mut scene = Scene::new(6, 1).unwrap();
        let a = scene.add_layer(Grid::from_text("A", None));
        let b = scene.add_layer(Grid::from_text("B", None));
        scene.translate_layer(b, 2, 0).unwrap();
        scene.compose();
        (scene, a, b)
    }

    #[test]
    fn zero_move_never_consults_collider() {
        let (mut scene, a, _) = two_blocks();
        let mut calls = 0;
        let mut count = |_: &Layer| {
            calls += 1;
            false
        };
        assert_eq!(scene.translate_layer_checked(a, 0, 0, &mut count), Ok(()));
        assert_eq!(calls, 0);
    }

    #[test]
    fn own_snapshot_entries_are_ignored() {
        let mut scene = Scene::new(4, 1).unwrap();
        let wide = scene.add_layer(Grid::from_text("WW", None));
        scene.compose();
        // Shifting by one overlaps only the layer's own previous footprint.
        let mut reject = |_: &Layer| false;
        assert_eq!(scene.translate_layer_checked(wide, 1, 0, &mut reject), Ok(()));
        assert_eq!(scene.layer(wide).unwrap().position(), (1, 0));
    }

    #[test]
    fn clamped_moves_are_checked_where_they_land() {
        let mut scene = Scene::new(4, 1).unwrap();
        scene.translate(i32::MAX - 3, 0);
        let mover = scene.add_layer(Grid::from_text("M", None));
        let wall = scene.add_layer(Grid::from_text("W", None));
        scene.layer_mut(mover).unwrap().set_position(i32::MAX - 2, 0);
        scene.layer_mut(wall).unwrap().set_position(i32::MAX, 0);
        scene.compose();

        // +5 saturates onto the wall's cell.
        let mut reject = |_: &Layer| false;
        assert_eq!(
            scene.translate_layer_checked(mover, 5, 0, &mut reject),
            Err(SceneError::Collision { layer: wall })
        );
        assert_eq!(scene.layer(mover).unwrap().position(), (i32::MAX - 2, 0));

        let mut accept = |_: &Layer| true;
        scene.translate_layer_checked(mover, 5, 0, &mut accept).unwrap();
        assert_eq!(scene.layer(mover).unwrap().position(), (i32::MAX, 0));
    }

    #[test]
    fn unknown_layer_is_reported_before_anything_else() {
        let (mut scene, a, _) = two_blocks();
        scene.remove_layer(a).unwrap();
        let mut accept = |_: &Layer| true;
        assert_eq!(
            scene.translate_layer_checked(a, 1, 0, &mut accept),
            Err(SceneError::UnknownLayer(a))
        );
    }

    #[test]
    fn removed_layers_in_the_snapshot_are_skipped() {
        let (mut scene, a, b) = two_blocks();
        scene.remove_layer(b).unwrap();
        let mut reject = |_: &Layer| false;
        assert_eq!(scene.translate_layer_checked(a, 2, 0, &mut reject), Ok(()));
    }

    #[test]
    fn transparent_cells_do_not_collide() {
        let mut scene = Scene::new(6, 1).unwrap();
        let ring = scene.add_layer(Grid::from_text("R.R", Some('.')));
        let dot = scene.add_layer(Grid::from_text("D", None));
        scene.translate_layer(dot, 4, 0).unwrap();
        scene.compose();
        // Transparent middle of the ring lands on the dot.
        let mut reject = |_: &Layer| false;
        assert_eq!(scene.translate_layer_checked(ring, 3, 0, &mut reject), Ok(()));
        assert_eq!(scene.layer(ring).unwrap().position(), (3, 0));
    }

    #[test]
    fn every_contact_is_offered_after_a_rejection() {
        let mut scene = Scene::new(6, 1).unwrap();
        let mover = scene.add_layer(Grid::from_text("MM", None));
        let a = scene.add_layer(Grid::from_text("A", None));
        let b = scene.add_layer(Grid::from_text("B", None));
        scene.translate_layer(a, 2, 0).unwrap();
        scene.translate_layer(b, 3, 0).unwrap();
        scene.compose();

        let mut seen = Vec::new();
        let mut collider = |other: &Layer| {
            seen.push(other.id());
            false
        };
        assert_eq!(
            scene.translate_layer_checked(mover, 2, 0, &mut collider),
            Err(SceneError::Collision { layer: a })
        );
        assert_eq!(seen, vec![a, b]);
    }
}
