use thiserror::Error;

use crate::types::LayerId;

/// Recoverable failures reported by scene operations.
///
/// None of these leave the scene in an inconsistent state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    #[error("viewport must be at least 1x1, got {width}x{height}")]
    EmptyViewport { width: u16, height: u16 },

    #[error("layer {0} does not belong to this scene")]
    UnknownLayer(LayerId),

    #[error("layer {0} is already frontmost")]
    AlreadyFrontmost(LayerId),

    #[error("layer {0} is already backmost")]
    AlreadyBackmost(LayerId),

    #[error("move rejected by collision with layer {layer}")]
    Collision { layer: LayerId },
}
