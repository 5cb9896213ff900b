/*!
# Runtime Texture Cache

Assigns a small, fixed pool of pre-allocated GPU texture regions to a larger,
changing set of models, tick by tick.

Backing textures are expensive to create, so they are built once and then
reassigned: every tick, models ask the cache for their texture. Models that
already hold a slot get it back immediately; others are given a free or stale
slot, whose previous owner is evicted, and a repaint of the slot is scheduled
on the render thread.

## Architecture

- **SlotCache**: slot assignment, eviction, tick aging and repaint hand-off
- **TaskScheduler**: deferred work queued per execution phase
- **ModelRegistry**: baked models invalidated when their slot changes owner
- **BakableModel**: logical slot owner (id + source image)
- **SlotTexture**: backend texture region a slot's pixels are uploaded into

Backends implement `SlotTexture`; hosts drive ticks and scheduler phases.
*/

// Internal modules
pub mod error;
pub mod log;
pub mod cache;
pub mod model;
pub mod scheduler;
pub mod texture;

// Main texcache namespace module
pub mod texcache {
    // Error types
    pub use crate::error::{Error, Result};

    // Core cache types
    pub use crate::cache::{SlotCache, SlotCacheConfig, SlotInfo};

    // Logging sub-module (types and logger control, NOT macros)
    pub mod log {
        pub use crate::log::{
            DefaultLogger, LogEntry, LogSeverity, Logger, reset_logger, set_logger,
        };
    }

    // Cache sub-module
    pub mod cache {
        pub use crate::cache::*;
    }

    // Model sub-module
    pub mod model {
        pub use crate::model::*;
    }

    // Scheduler sub-module
    pub mod scheduler {
        pub use crate::scheduler::*;
    }

    // Texture sub-module
    pub mod texture {
        pub use crate::texture::*;
    }
}
