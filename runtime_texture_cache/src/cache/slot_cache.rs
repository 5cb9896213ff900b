/// Fixed-capacity texture slot cache
///
/// A small number of pre-allocated texture regions are shared by a larger,
/// changing set of models. Each tick, models ask for their texture; the cache
/// either serves the slot they already hold or hands them a free or stale
/// slot, evicting its previous owner and scheduling a repaint.
///
/// Lookup and eviction both scan the slots linearly.

use std::fmt;
use std::sync::Arc;
use crossbeam_channel::{unbounded, Receiver, Sender};
use crate::error::{Error, Result};
use crate::model::{BakableModel, ModelRegistry};
use crate::scheduler::{TaskPhase, TaskScheduler};
use crate::texture::SlotTexture;
use super::repaint::{AssignmentCallback, Completion, RepaintTask};
use super::SlotCacheConfig;

const SOURCE: &str = "texcache::SlotCache";

// ===== DECAY VALUES =====

/// Unowned, evictable immediately
pub const DECAY_FREE: u32 = 0;

/// Owned, used in a previous tick; evictable
pub const DECAY_USED_LAST_TICK: u32 = 1;

/// Owned, used in the current tick; protected until the next tick boundary
pub const DECAY_USED_THIS_TICK: u32 = 2;

/// Owned, repaint in flight; never evicted and never aged
pub const DECAY_PINNED: u32 = u32::MAX;

// ===== SLOT =====

struct Slot {
    /// Key of the model bound to this slot
    owner: Option<String>,
    /// Usage / pin counter (see DECAY_* constants)
    decay: u32,
    /// Backing texture, seeded once by the ring cursor
    texture: Option<Arc<dyn SlotTexture>>,
    /// Bumped whenever the binding is replaced or cleared
    generation: u64,
    /// Held by the retry countdown after the texture was found missing
    backoff: bool,
}

impl Slot {
    fn empty() -> Self {
        Self {
            owner: None,
            decay: DECAY_FREE,
            texture: None,
            generation: 0,
            backoff: false,
        }
    }
}

/// Read-only snapshot of an owned slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotInfo {
    /// Slot index
    pub index: usize,
    /// Decay counter
    pub decay: u32,
    /// Owning model id
    pub owner: String,
}

impl SlotInfo {
    /// Whether the slot is waiting for its repaint to complete
    pub fn is_pinned(&self) -> bool {
        self.decay == DECAY_PINNED
    }
}

/// What a lookup hit requires
enum Lookup {
    /// Serve the bound texture now
    Ready(Arc<dyn SlotTexture>),
    /// Repaint in flight or retry countdown running
    Wait,
    /// Not bound (or backoff elapsed): allocate a slot
    Allocate,
}

// ===== SLOT CACHE =====

/// Texture slot cache
///
/// One instance owns all slot state. `retrieve_assigned_texture`, `clear` and
/// `poll_completions` take `&mut self`; repaint tasks running elsewhere report
/// back through a channel, so every slot write happens on the owner's context.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use runtime_texture_cache::texcache::cache::{SlotCache, SlotCacheConfig};
/// use runtime_texture_cache::texcache::model::BakedModelRegistry;
/// use runtime_texture_cache::texcache::scheduler::PhaseScheduler;
///
/// let scheduler = PhaseScheduler::new();
/// let registry = Arc::new(BakedModelRegistry::new());
/// let cache = SlotCache::new(
///     SlotCacheConfig::with_capacity(8),
///     Arc::new(scheduler.clone()),
///     registry,
/// )?;
/// assert_eq!(cache.capacity(), 8);
/// # Ok::<(), runtime_texture_cache::texcache::Error>(())
/// ```
pub struct SlotCache {
    config: SlotCacheConfig,
    slots: Vec<Slot>,
    /// Ring position of the next `add_texture`
    next_texture_slot: usize,
    /// Where this tick's allocation scan resumes
    search_cursor: usize,
    last_tick: u64,
    scheduler: Arc<dyn TaskScheduler>,
    registry: Arc<dyn ModelRegistry>,
    completion_sender: Sender<Completion>,
    completion_receiver: Receiver<Completion>,
}

impl SlotCache {
    /// Create a cache with `config.capacity` empty slots
    ///
    /// Textures are added afterwards with `add_texture`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the configuration is rejected.
    pub fn new(
        config: SlotCacheConfig,
        scheduler: Arc<dyn TaskScheduler>,
        registry: Arc<dyn ModelRegistry>,
    ) -> Result<Self> {
        config.validate()?;

        let (completion_sender, completion_receiver) = unbounded();
        let slots = (0..config.capacity).map(|_| Slot::empty()).collect();

        crate::cache_info!(SOURCE, "Created slot cache '{}' with {} slots", config.name, config.capacity);

        Ok(Self {
            config,
            slots,
            next_texture_slot: 0,
            search_cursor: 0,
            last_tick: 0,
            scheduler,
            registry,
            completion_sender,
            completion_receiver,
        })
    }

    // ===== BACKING TEXTURES =====

    /// Seed a backing texture into the next ring position
    ///
    /// Overwrites the handle previously stored there. Owners and decay
    /// counters are untouched, so only call this while (re)building the
    /// backing atlas.
    pub fn add_texture(&mut self, texture: Arc<dyn SlotTexture>) {
        let index = self.next_texture_slot;
        self.slots[index].texture = Some(texture);
        self.next_texture_slot = (index + 1) & (self.slots.len() - 1);
    }

    // ===== ASSIGNMENT =====

    /// Drop every owner binding
    ///
    /// Textures stay in place. Repaints still in flight complete with
    /// `Error::SlotInvalidated`.
    pub fn clear(&mut self) {
        self.search_cursor = 0;

        for slot in &mut self.slots {
            slot.owner = None;
            slot.decay = DECAY_FREE;
            slot.backoff = false;
            slot.generation += 1;
        }

        crate::cache_info!(SOURCE, "Cleared all slot assignments of '{}'", self.config.name);
    }

    /// Get the texture assigned to `model`, assigning one if needed
    ///
    /// Call at most once per model per tick, always from the same context.
    ///
    /// - Bound and painted: the slot is marked used this tick and `callback`
    ///   runs before this returns.
    /// - Newly assigned: a repaint is scheduled on `TaskPhase::TextureUpload`
    ///   and `callback` runs from a later `poll_completions` (or the next call
    ///   of this method) once the repaint has finished.
    /// - No free slot this tick, repaint already in flight, or retry countdown
    ///   running: nothing happens and `callback` is dropped. Ask again next tick.
    pub fn retrieve_assigned_texture<F>(&mut self, model: &Arc<dyn BakableModel>, tick: u64, callback: F)
    where
        F: FnOnce(Result<Arc<dyn SlotTexture>>) + Send + 'static,
    {
        self.advance_tick(tick);
        self.poll_completions();

        match self.lookup(model.id()) {
            Lookup::Ready(texture) => callback(Ok(texture)),
            Lookup::Wait => {}
            Lookup::Allocate => self.assign_slot(model, Box::new(callback)),
        }
    }

    /// Apply the repaint completions received so far
    ///
    /// Runs the callbacks of finished assignments. Returns how many
    /// completions were applied.
    pub fn poll_completions(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(completion) = self.completion_receiver.try_recv() {
            self.apply_completion(completion);
            applied += 1;
        }
        applied
    }

    fn advance_tick(&mut self, tick: u64) {
        if tick == self.last_tick {
            return;
        }

        self.last_tick = tick;
        self.search_cursor = 0;

        for slot in &mut self.slots {
            if slot.decay != DECAY_PINNED {
                slot.decay = slot.decay.saturating_sub(1);
            }
        }
    }

    fn lookup(&mut self, key: &str) -> Lookup {
        let Some(index) = self.find_slot(key) else {
            return Lookup::Allocate;
        };
        let slot = &mut self.slots[index];

        if slot.backoff {
            if slot.decay > DECAY_FREE {
                return Lookup::Wait;
            }
            crate::cache_info!(SOURCE, "Retrying texture assignment for '{}'", key);
            slot.owner = None;
            slot.backoff = false;
            return Lookup::Allocate;
        }

        if slot.decay == DECAY_PINNED {
            return Lookup::Wait;
        }

        match &slot.texture {
            Some(texture) => {
                slot.decay = DECAY_USED_THIS_TICK;
                Lookup::Ready(texture.clone())
            }
            None => Lookup::Wait,
        }
    }

    fn assign_slot(&mut self, model: &Arc<dyn BakableModel>, callback: AssignmentCallback) {
        let capacity = self.slots.len();
        if self.search_cursor == capacity {
            return;
        }

        let free = (self.search_cursor..capacity).find(|&i| self.slots[i].decay == DECAY_FREE);
        let Some(index) = free else {
            self.search_cursor = capacity;
            crate::cache_trace!(SOURCE, "No free slot for '{}' this tick", model.id());
            return;
        };
        self.search_cursor = index + 1;

        let key = model.id().to_string();
        let slot = &mut self.slots[index];

        if let Some(previous) = slot.owner.take() {
            crate::cache_debug!(SOURCE, "Evicting '{}' from slot {}", previous, index);
            self.registry.remove_baked_model(&previous);
        }

        slot.decay = DECAY_PINNED;
        slot.backoff = false;
        slot.generation += 1;
        let generation = slot.generation;

        let Some(texture) = slot.texture.clone() else {
            crate::cache_error!(
                SOURCE,
                "Texture of slot {} assigned to '{}' is missing, retrying in {} ticks",
                index,
                key,
                self.config.retry_delay_ticks
            );
            slot.owner = Some(key);
            slot.decay = self.config.retry_delay_ticks;
            slot.backoff = true;
            return;
        };

        crate::cache_debug!(SOURCE, "Assigned slot {} ('{}') to '{}'", index, texture.name(), key);
        slot.owner = Some(key);

        let task = RepaintTask {
            slot: index,
            generation,
            model: model.clone(),
            texture,
            callback,
            completions: self.completion_sender.clone(),
        };
        self.scheduler.schedule(TaskPhase::TextureUpload, Box::new(move || task.run()));
    }

    fn apply_completion(&mut self, completion: Completion) {
        let Completion { slot: index, generation, outcome, texture, callback } = completion;
        let slot = &mut self.slots[index];

        if slot.generation != generation {
            crate::cache_warn!(SOURCE, "Discarding repaint of slot {}: binding changed while in flight", index);
            callback(Err(Error::SlotInvalidated(index)));
            return;
        }

        match outcome {
            Ok(()) => {
                slot.decay = DECAY_USED_THIS_TICK;
                callback(Ok(texture));
            }
            Err(error) => {
                crate::cache_warn!(
                    SOURCE,
                    "Repaint of slot {} for '{}' failed: {}",
                    index,
                    slot.owner.as_deref().unwrap_or("<none>"),
                    error
                );
                slot.owner = None;
                slot.decay = DECAY_FREE;
                callback(Err(error));
            }
        }
    }

    // ===== INTROSPECTION =====

    /// Number of slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Configuration the cache was created with
    pub fn config(&self) -> &SlotCacheConfig {
        &self.config
    }

    /// Index of the slot bound to `key`
    pub fn find_slot(&self, key: &str) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.owner.as_deref() == Some(key))
    }

    /// Decay counter of a slot (None if out of range)
    pub fn decay(&self, index: usize) -> Option<u32> {
        self.slots.get(index).map(|slot| slot.decay)
    }

    /// Owner of a slot (None if unowned or out of range)
    pub fn owner(&self, index: usize) -> Option<&str> {
        self.slots.get(index)?.owner.as_deref()
    }

    /// Backing texture of a slot (None if not seeded or out of range)
    pub fn texture(&self, index: usize) -> Option<&Arc<dyn SlotTexture>> {
        self.slots.get(index)?.texture.as_ref()
    }

    /// Where the next allocation scan of this tick starts
    pub fn search_cursor(&self) -> usize {
        self.search_cursor
    }

    /// Last tick seen by `retrieve_assigned_texture`
    pub fn last_tick(&self) -> u64 {
        self.last_tick
    }

    /// Snapshot of every owned slot
    pub fn occupied_slots(&self) -> Vec<SlotInfo> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| {
                slot.owner.as_ref().map(|owner| SlotInfo {
                    index,
                    decay: slot.decay,
                    owner: owner.clone(),
                })
            })
            .collect()
    }
}

/// Diagnostic dump: `SlotCache 'name'[i:<index>,u:<decay>,k:<owner>]...`
///
/// Lists every owned slot, including stale ones at decay 0, in index order.
impl fmt::Display for SlotCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SlotCache '{}'", self.config.name)?;
        for (index, slot) in self.slots.iter().enumerate() {
            if slot.owner.is_some() || slot.decay > DECAY_FREE {
                write!(
                    f,
                    "[i:{},u:{},k:{}]",
                    index,
                    slot.decay,
                    slot.owner.as_deref().unwrap_or("<none>")
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "slot_cache_tests.rs"]
mod tests;
