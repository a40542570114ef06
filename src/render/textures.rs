// src/render/textures.rs
use crate::assets::{AssetResolver, CIRCLE_AOE_SHEET};
use crate::atlas::IconAtlas;
use crate::error::Error;
use macroquad::prelude::*;
use std::collections::{HashMap, VecDeque};

enum Slot {
    Pending,
    Ready(Texture2D),
    Failed,
}

/// Lazily loaded textures keyed by locator.
///
/// Drawing never waits on a load: an image whose texture is not ready yet is
/// simply left out of the frame, and shows up once a later frame has loaded it.
#[derive(Default)]
pub struct TextureCache {
    slots: HashMap<String, Slot>,
    queue: VecDeque<String>,
}

impl TextureCache {
    /// Empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The texture for `locator`, queueing a load on first sight.
    pub fn request(&mut self, locator: &str) -> Option<&Texture2D> {
        if !self.slots.contains_key(locator) {
            self.slots.insert(locator.to_owned(), Slot::Pending);
            self.queue.push_back(locator.to_owned());
        }
        match self.slots.get(locator) {
            Some(Slot::Ready(tex)) => Some(tex),
            _ => None,
        }
    }

    /// Queue every atlas sheet plus the AOE image ahead of the first frame.
    pub fn queue_sheets(&mut self, atlas: &IconAtlas, assets: &dyn AssetResolver) {
        for sheet in atlas.sheets().into_iter().chain([CIRCLE_AOE_SHEET]) {
            self.request(&assets.sheet(sheet));
        }
    }

    /// Number of queued loads.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Load up to `budget` queued textures; returns how many became ready.
    ///
    /// A failed load is logged once and never retried.
    pub async fn load_pending(&mut self, budget: usize) -> usize {
        let mut loaded = 0;
        for _ in 0..budget {
            let Some(locator) = self.queue.pop_front() else {
                break;
            };
            let slot = match load_texture(&locator).await {
                Ok(tex) => {
                    tex.set_filter(FilterMode::Linear);
                    loaded += 1;
                    tracing::debug!(%locator, "texture loaded");
                    Slot::Ready(tex)
                }
                Err(e) => {
                    let err = Error::Texture {
                        locator: locator.clone(),
                        message: e.to_string(),
                    };
                    tracing::warn!(error = %err, "texture unavailable");
                    Slot::Failed
                }
            };
            self.slots.insert(locator, slot);
        }
        loaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_request_queues_once() {
        let mut cache = TextureCache::new();
        assert!(cache.request("a.png").is_none());
        assert!(cache.request("a.png").is_none());
        assert!(cache.request("b.png").is_none());
        assert_eq!(cache.pending(), 2);
    }

    #[test]
    fn atlas_sheets_are_queued_up_front() {
        let atlas = IconAtlas::standard();
        let assets = crate::assets::StaticAssets::new("res");
        let mut cache = TextureCache::new();
        cache.queue_sheets(&atlas, &assets);
        assert_eq!(cache.pending(), atlas.sheets().len() + 1);

        // Drawing the same sheet later does not queue it twice.
        cache.request(&assets.sheet(CIRCLE_AOE_SHEET));
        assert_eq!(cache.pending(), atlas.sheets().len() + 1);
    }
}
