//! Player configuration read from the environment.
//!
//! - `SWEARS_FPS`: frames per second (default 30)
//! - `SWEARS_VIEWPORT`: viewport size as `WxH` (default 60x16)
//! - `SWEARS_OPTIONS`: path to a JSON object of render options (optional)
//!
//! Invalid values fall back to the defaults with a warning.

use log::warn;

use crate::core::RenderOptions;
use crate::types::DEFAULT_FPS;

/// Default viewport width in cells.
pub const DEFAULT_VIEWPORT_WIDTH: u16 = 60;

/// Default viewport height in cells.
pub const DEFAULT_VIEWPORT_HEIGHT: u16 = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    pub fps: u32,
    pub width: u16,
    pub height: u16,
    pub options: RenderOptions,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            width: DEFAULT_VIEWPORT_WIDTH,
            height: DEFAULT_VIEWPORT_HEIGHT,
            options: RenderOptions::default(),
        }
    }
}

impl PlayerConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup("SWEARS_FPS") {
            match raw.trim().parse::<u32>() {
                Ok(fps) if fps > 0 => config.fps = fps,
                _ => warn!("ignoring SWEARS_FPS={:?}", raw),
            }
        }

        if let Some(raw) = lookup("SWEARS_VIEWPORT") {
            match parse_viewport(&raw) {
                Some((w, h)) => {
                    config.width = w;
                    config.height = h;
                }
                None => warn!("ignoring SWEARS_VIEWPORT={:?}", raw),
            }
        }

        if let Some(path) = lookup("SWEARS_OPTIONS").filter(|p| !p.trim().is_empty()) {
            match std::fs::read_to_string(path.trim()) {
                Ok(text) => match RenderOptions::from_json_str(&text) {
                    Ok(options) => config.options = options,
                    Err(e) => warn!("ignoring render options in {}: {}", path, e),
                },
                Err(e) => warn!("cannot read render options {}: {}", path, e),
            }
        }

        config
    }
}

/// Parse `WxH` (case-insensitive `x`); both sides must be positive.
pub fn parse_viewport(s: &str) -> Option<(u16, u16)> {
    let (w, h) = s.trim().split_once(['x', 'X'])?;
    let w: u16 = w.trim().parse().ok()?;
    let h: u16 = h.trim().parse().ok()?;
    if w == 0 || h == 0 {
        return None;
    }
    Some((w, h))
}
