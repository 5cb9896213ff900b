/// Slot cache configuration

use crate::error::{Error, Result};
use super::DECAY_PINNED;

const SOURCE: &str = "texcache::SlotCacheConfig";

/// Default number of slots
pub const DEFAULT_CAPACITY: usize = 16;

/// Default number of ticks a slot is held after its texture was found missing
pub const DEFAULT_RETRY_DELAY_TICKS: u32 = 20;

/// Slot cache configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotCacheConfig {
    /// Number of slots (non-zero power of two)
    pub capacity: usize,
    /// Ticks a slot stays reserved when its texture handle is missing
    pub retry_delay_ticks: u32,
    /// Cache name used in diagnostics
    pub name: String,
}

impl Default for SlotCacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            retry_delay_ticks: DEFAULT_RETRY_DELAY_TICKS,
            name: "runtime".to_string(),
        }
    }
}

impl SlotCacheConfig {
    /// Default configuration with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    /// Check the configuration
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if:
    /// - capacity is zero or not a power of two (the ring cursor wraps with a bitmask)
    /// - retry_delay_ticks is zero or reaches the pin value
    ///
    /// Rejections are logged at error level.
    pub fn validate(&self) -> Result<()> {
        if !self.capacity.is_power_of_two() {
            crate::cache_bail!(
                SOURCE,
                Error::InvalidConfig,
                "slot cache '{}': capacity must be a non-zero power of two, got {}",
                self.name,
                self.capacity
            );
        }

        if self.retry_delay_ticks == 0 || self.retry_delay_ticks >= DECAY_PINNED {
            crate::cache_bail!(
                SOURCE,
                Error::InvalidConfig,
                "slot cache '{}': retry_delay_ticks must be in 1..{}, got {}",
                self.name,
                DECAY_PINNED,
                self.retry_delay_ticks
            );
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "slot_cache_config_tests.rs"]
mod tests;
