/// Repaint task and its completion message
///
/// The task runs on the scheduler's context. It never touches slot state:
/// the outcome travels back to the cache as a `Completion` and is applied by
/// `SlotCache::poll_completions`.

use std::sync::Arc;
use crossbeam_channel::{SendError, Sender};
use crate::error::{Error, Result};
use crate::model::BakableModel;
use crate::texture::{generate_mip_levels, SlotTexture};

/// Callback receiving the texture assigned to a model
///
/// `Err` means no texture will be delivered for this request (failed repaint,
/// or the slot was cleared while the repaint was in flight).
pub type AssignmentCallback = Box<dyn FnOnce(Result<Arc<dyn SlotTexture>>) + Send + 'static>;

/// Regenerate the mip chain of `model`'s image and upload it into `texture`
///
/// # Errors
///
/// Propagates the backend's upload error.
pub fn repaint(model: &dyn BakableModel, texture: &dyn SlotTexture) -> Result<()> {
    let levels = generate_mip_levels(model.image(), texture.mip_level_count());
    crate::cache_trace!(
        "texcache::repaint",
        "Uploading {} mip level(s) of '{}' into '{}'",
        levels.len(),
        model.id(),
        texture.name()
    );
    texture.upload(&levels)
}

/// Outcome of a repaint, sent back to the owning cache
pub(crate) struct Completion {
    pub slot: usize,
    pub generation: u64,
    pub outcome: Result<()>,
    pub texture: Arc<dyn SlotTexture>,
    pub callback: AssignmentCallback,
}

/// Deferred repaint of one slot for one owner
pub(crate) struct RepaintTask {
    pub slot: usize,
    pub generation: u64,
    pub model: Arc<dyn BakableModel>,
    pub texture: Arc<dyn SlotTexture>,
    pub callback: AssignmentCallback,
    pub completions: Sender<Completion>,
}

impl RepaintTask {
    pub(crate) fn run(self) {
        let outcome = repaint(self.model.as_ref(), self.texture.as_ref());

        let completion = Completion {
            slot: self.slot,
            generation: self.generation,
            outcome,
            texture: self.texture,
            callback: self.callback,
        };

        // The cache was dropped while the repaint was in flight
        if let Err(SendError(completion)) = self.completions.send(completion) {
            crate::cache_warn!(
                "texcache::repaint",
                "Cache dropped before repaint of slot {} completed",
                completion.slot
            );
            (completion.callback)(Err(Error::SlotInvalidated(completion.slot)));
        }
    }
}
