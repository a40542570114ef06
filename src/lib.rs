#![warn(missing_docs)]

//! Strategy-board renderer for Macroquad.
//!
//! A board code is decoded into a [`Board`], composed into backend-free
//! [`Primitive`]s by [`compose`], and drawn with [`draw_scene`] at the scale
//! kept by a [`ViewportScaler`].

/// Image locators for backgrounds and sprite sheets.
pub mod assets;
pub mod atlas;
/// Decoded board model.
pub mod board;
/// Renderer configuration.
pub mod config;
mod error;
pub mod geometry;
/// Board code decoding and discovery.
pub mod loader {
    /// JSON board codes and the default-board fallback.
    pub mod json_decoder;
    /// Board codes carried in page URLs.
    pub mod source;
}
pub mod render;
pub mod scene;
/// Canvas fitting and debounced resize.
pub mod viewport;

pub use assets::{AssetResolver, StaticAssets};
pub use atlas::{AtlasEntry, IconAtlas};
pub use board::{BackgroundId, Board, Marker, Shape};
pub use config::RenderConfig;
pub use error::Error;
pub use loader::json_decoder::{load_board, BoardDecoder, JsonDecoder, DEFAULT_CODE};
pub use loader::source::code_from_url;
pub use render::{draw_scene, TextureCache};
pub use scene::{compose, Primitive, Scene};
pub use viewport::{compute_scale, ViewportScaler};
