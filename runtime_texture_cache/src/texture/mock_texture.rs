/// Mock slot texture for unit tests (no GPU required)
///
/// Records every upload so tests can check what a repaint wrote.

use std::sync::Mutex;
use crate::error::{Error, Result};
use crate::texture::{ImageData, SlotTexture};

#[derive(Debug)]
pub struct MockSlotTexture {
    pub name: String,
    pub mip_levels: u32,
    pub fail_uploads: bool,
    pub uploads: Mutex<Vec<Vec<ImageData>>>,
}

impl MockSlotTexture {
    pub fn new(name: &str, mip_levels: u32) -> Self {
        Self {
            name: name.to_string(),
            mip_levels,
            fail_uploads: false,
            uploads: Mutex::new(Vec::new()),
        }
    }

    /// Texture whose uploads always fail
    pub fn failing(name: &str) -> Self {
        Self {
            fail_uploads: true,
            ..Self::new(name, 1)
        }
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }

    /// Level 0 of the most recent upload
    pub fn last_upload(&self) -> Option<ImageData> {
        self.uploads
            .lock()
            .unwrap()
            .last()
            .and_then(|levels| levels.first().cloned())
    }
}

impl SlotTexture for MockSlotTexture {
    fn name(&self) -> &str {
        &self.name
    }

    fn mip_level_count(&self) -> u32 {
        self.mip_levels
    }

    fn upload(&self, levels: &[ImageData]) -> Result<()> {
        if self.fail_uploads {
            return Err(Error::UploadFailed(format!("mock texture '{}' rejects uploads", self.name)));
        }
        self.uploads.lock().unwrap().push(levels.to_vec());
        Ok(())
    }
}
