/// Cache module - slot assignment, eviction and repaint hand-off

pub mod repaint;
pub mod slot_cache;
pub mod slot_cache_config;

pub use repaint::{repaint, AssignmentCallback};
pub use slot_cache::*;
pub use slot_cache_config::*;
