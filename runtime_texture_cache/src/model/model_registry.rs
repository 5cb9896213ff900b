/// Baked-model registry
///
/// Baked models are derived from the texture a slot holds. When the cache
/// hands a slot to a new owner, the previous owner's baked model refers to
/// pixels that are about to be overwritten and must be dropped.

use std::sync::{Arc, Mutex};
use rustc_hash::FxHashMap;
use crate::texture::SlotTexture;

/// Registry notified by the cache when a slot changes owner
pub trait ModelRegistry: Send + Sync {
    /// Drop the baked model derived for `id` (no-op if none exists)
    fn remove_baked_model(&self, id: &str);
}

/// A model baked against the texture of its assigned slot
#[derive(Clone)]
pub struct BakedModel {
    /// Id of the source model
    pub id: String,
    /// Texture the model samples from
    pub texture: Arc<dyn SlotTexture>,
}

impl std::fmt::Debug for BakedModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BakedModel")
            .field("id", &self.id)
            .field("texture", &self.texture.name())
            .finish()
    }
}

/// Thread-safe map of baked models keyed by model id
///
/// Assignment callbacks insert from whatever context delivers them; the cache
/// removes on eviction.
#[derive(Default)]
pub struct BakedModelRegistry {
    models: Mutex<FxHashMap<String, BakedModel>>,
}

impl BakedModelRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a baked model, replacing any previous one with the same id
    pub fn insert(&self, model: BakedModel) {
        if let Ok(mut models) = self.models.lock() {
            models.insert(model.id.clone(), model);
        }
    }

    /// Get a copy of the baked model for `id`
    pub fn get(&self, id: &str) -> Option<BakedModel> {
        self.models.lock().ok()?.get(id).cloned()
    }

    /// Whether a baked model exists for `id`
    pub fn contains(&self, id: &str) -> bool {
        self.models
            .lock()
            .map(|models| models.contains_key(id))
            .unwrap_or(false)
    }

    /// Number of baked models
    pub fn len(&self) -> usize {
        self.models.lock().map(|models| models.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ModelRegistry for BakedModelRegistry {
    fn remove_baked_model(&self, id: &str) {
        let removed = self
            .models
            .lock()
            .map(|mut models| models.remove(id).is_some())
            .unwrap_or(false);

        if removed {
            crate::cache_debug!("texcache::BakedModelRegistry", "Dropped baked model '{}'", id);
        }
    }
}

#[cfg(test)]
#[path = "model_registry_tests.rs"]
mod tests;
