// src/assets.rs
use crate::board::BackgroundId;
use std::path::PathBuf;

/// Sheet id of the circle/fan AOE image.
pub const CIRCLE_AOE_SHEET: &str = "circle_aoe";

/// Maps image ids to loadable locators.
pub trait AssetResolver {
    /// Locator of a background image.
    fn background(&self, id: BackgroundId) -> String;
    /// Locator of a sprite sheet or standalone marker image.
    fn sheet(&self, sheet: &str) -> String;
}

/// Static asset tree: `root/background/<n>.png` and `root/objects/<sheet>.png`.
#[derive(Debug, Clone)]
pub struct StaticAssets {
    root: PathBuf,
}

impl StaticAssets {
    /// Assets rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetResolver for StaticAssets {
    fn background(&self, id: BackgroundId) -> String {
        self.root
            .join("background")
            .join(format!("{}.png", id.asset_number()))
            .to_string_lossy()
            .into_owned()
    }

    fn sheet(&self, sheet: &str) -> String {
        self.root
            .join("objects")
            .join(format!("{sheet}.png"))
            .to_string_lossy()
            .into_owned()
    }
}
