// src/config.rs
use macroquad::prelude::*;
use std::path::PathBuf;
use std::time::Duration;

/// Logical canvas width.
pub const LOGICAL_WIDTH: f32 = 1024.0;
/// Logical canvas height.
pub const LOGICAL_HEIGHT: f32 = 768.0;
/// Default resize quiet window.
pub const DEFAULT_RESIZE_QUIET: Duration = Duration::from_millis(100);

/// Renderer settings.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Width of the logical canvas
    pub logical_width: f32,
    /// Height of the logical canvas
    pub logical_height: f32,
    /// Quiet window before a resize is applied
    pub resize_quiet: Duration,
    /// Directory holding `background/` and `objects/`
    pub assets_root: PathBuf,
    /// Pending textures loaded per frame
    pub textures_per_frame: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            logical_width: LOGICAL_WIDTH,
            logical_height: LOGICAL_HEIGHT,
            resize_quiet: DEFAULT_RESIZE_QUIET,
            assets_root: PathBuf::from("assets"),
            textures_per_frame: 4,
        }
    }
}

impl RenderConfig {
    /// Logical canvas size as a vector.
    pub fn logical_size(&self) -> Vec2 {
        vec2(self.logical_width, self.logical_height)
    }
}
