/// Logical owner of a cache slot

use crate::texture::ImageData;

/// A model that needs its image rasterized into a cache slot
///
/// The id must be stable and unique: it is the key a slot is bound to.
/// The image is read by the repaint task, possibly on another thread.
pub trait BakableModel: Send + Sync {
    /// Stable unique identifier
    fn id(&self) -> &str;

    /// Source image painted into the assigned slot
    fn image(&self) -> &ImageData;
}

/// Plain model description (id + image)
#[derive(Debug, Clone)]
pub struct ModelDesc {
    /// Unique identifier
    pub id: String,
    /// Source image
    pub image: ImageData,
}

impl ModelDesc {
    pub fn new(id: impl Into<String>, image: ImageData) -> Self {
        Self { id: id.into(), image }
    }
}

impl BakableModel for ModelDesc {
    fn id(&self) -> &str {
        &self.id
    }

    fn image(&self) -> &ImageData {
        &self.image
    }
}
