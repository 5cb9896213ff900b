//! Error types for the runtime texture cache
//!
//! Errors never escape `SlotCache::retrieve_assigned_texture`. They are
//! returned from constructors and validation, and delivered to assignment
//! callbacks when a repaint cannot produce a texture.

use std::fmt;

/// Result type for texture cache operations
pub type Result<T> = std::result::Result<T, Error>;

/// Texture cache errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Cache configuration rejected (capacity, retry delay, ...)
    InvalidConfig(String),

    /// Image payload has inconsistent dimensions or byte length
    InvalidImage(String),

    /// Pixel upload into a backing texture failed
    UploadFailed(String),

    /// The slot was cleared or reassigned before its repaint completed
    SlotInvalidated(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::InvalidImage(msg) => write!(f, "Invalid image: {}", msg),
            Error::UploadFailed(msg) => write!(f, "Upload failed: {}", msg),
            Error::SlotInvalidated(slot) => write!(f, "Slot {} was invalidated before its repaint completed", slot),
        }
    }
}

impl std::error::Error for Error {}

/// Log an error with file:line and return it as `Err(<variant>(message))`
///
/// `$kind` is a message-carrying `Error` variant.
///
/// # Example
///
/// ```ignore
/// cache_bail!("texcache::SlotCacheConfig", Error::InvalidConfig, "capacity {} is not a power of two", capacity);
/// ```
#[macro_export]
macro_rules! cache_bail {
    ($source:expr, $kind:path, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::log::log_detailed(
            $crate::log::LogSeverity::Error,
            $source,
            message.clone(),
            file!(),
            line!(),
        );
        return Err($kind(message));
    }};
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
