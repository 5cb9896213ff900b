/// Deferred task scheduling by execution phase
///
/// Repaints must run where the graphics context lives (the host's texture
/// tick on the render thread), not where the request was made. Work is
/// queued per phase and run when the host drives that phase.

use crossbeam_channel::{unbounded, Receiver, Sender};

/// Execution phase a task is tagged with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskPhase {
    /// Render-thread texture tick (pixel upload)
    TextureUpload,
    /// Client logic tick
    ///
    /// The cache never queues work here. Hosts use it for follow-up work on
    /// delivered textures (rebaking geometry, swapping render handles) that
    /// must run with their client logic.
    ClientTick,
}

impl TaskPhase {
    /// All phases, in queue order
    pub const ALL: [TaskPhase; 2] = [TaskPhase::TextureUpload, TaskPhase::ClientTick];

    fn index(self) -> usize {
        match self {
            TaskPhase::TextureUpload => 0,
            TaskPhase::ClientTick => 1,
        }
    }
}

/// Unit of deferred work
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Accepts deferred work for a phase
///
/// A scheduled task must run to completion exactly once, eventually, on some
/// context. No ordering is promised relative to the caller.
pub trait TaskScheduler: Send + Sync {
    fn schedule(&self, phase: TaskPhase, task: Task);
}

#[derive(Clone)]
struct PhaseQueue {
    sender: Sender<Task>,
    receiver: Receiver<Task>,
}

impl PhaseQueue {
    fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self { sender, receiver }
    }
}

/// Channel-backed scheduler with one queue per phase
///
/// Clones share the same queues: one clone can be handed to the cache while
/// another is driven from the render thread.
///
/// # Example
///
/// ```
/// use runtime_texture_cache::texcache::scheduler::{PhaseScheduler, TaskPhase, TaskScheduler};
///
/// let scheduler = PhaseScheduler::new();
/// scheduler.schedule(TaskPhase::TextureUpload, Box::new(|| { /* upload */ }));
/// assert_eq!(scheduler.run_phase(TaskPhase::TextureUpload), 1);
/// ```
#[derive(Clone)]
pub struct PhaseScheduler {
    queues: Vec<PhaseQueue>,
}

impl PhaseScheduler {
    /// Create a scheduler with empty queues
    pub fn new() -> Self {
        Self {
            queues: TaskPhase::ALL.iter().map(|_| PhaseQueue::new()).collect(),
        }
    }

    /// Run every task queued for `phase` at the time of the call
    ///
    /// Tasks run on the calling thread. Tasks scheduled while running are
    /// left for the next call. Returns the number of tasks run.
    pub fn run_phase(&self, phase: TaskPhase) -> usize {
        let receiver = &self.queues[phase.index()].receiver;
        let queued = receiver.len();

        let mut ran = 0;
        for _ in 0..queued {
            match receiver.try_recv() {
                Ok(task) => {
                    task();
                    ran += 1;
                }
                Err(_) => break,
            }
        }

        if ran > 0 {
            crate::cache_trace!("texcache::PhaseScheduler", "Ran {} task(s) in {:?}", ran, phase);
        }
        ran
    }

    /// Number of tasks waiting in `phase`
    pub fn pending(&self, phase: TaskPhase) -> usize {
        self.queues[phase.index()].receiver.len()
    }
}

impl Default for PhaseScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskScheduler for PhaseScheduler {
    fn schedule(&self, phase: TaskPhase, task: Task) {
        // Both ends live in self, the channel cannot be disconnected
        if self.queues[phase.index()].sender.send(task).is_err() {
            crate::cache_error!("texcache::PhaseScheduler", "Queue for {:?} is closed, task dropped", phase);
        }
    }
}

#[cfg(test)]
#[path = "phase_scheduler_tests.rs"]
mod tests;
