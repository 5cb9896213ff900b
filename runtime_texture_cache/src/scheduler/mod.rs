/// Scheduler module - deferred repaint work tagged by execution phase

pub mod phase_scheduler;

pub use phase_scheduler::*;
