/// Backing texture trait for cache slots

use crate::error::Result;
use crate::texture::ImageData;

/// Pre-allocated GPU texture region backing one cache slot
///
/// Implemented by the host's graphics backend (an atlas sprite, a texture
/// array layer, ...). Handles are created once when the backing atlas is
/// built and handed to the cache through `SlotCache::add_texture`.
///
/// `upload` is called from the context that runs the repaint task, which is
/// generally not the context that owns the cache.
pub trait SlotTexture: Send + Sync {
    /// Debug name of the region (sprite name, layer label, ...)
    fn name(&self) -> &str;

    /// Number of mip levels the region stores (level 0 included)
    fn mip_level_count(&self) -> u32;

    /// Replace the region contents with the given mip chain
    ///
    /// `levels[0]` is the full-size image; each further entry is half the
    /// size of the previous one.
    ///
    /// # Errors
    ///
    /// Returns `Error::UploadFailed` when the backend rejects the data.
    fn upload(&self, levels: &[ImageData]) -> Result<()>;
}
