//! Soft-cap trimming of non-player entities.
//!
//! Runs once per entity tick but only acts on every Nth invocation. When
//! acting, it trims the excess over the soft cap from the front of the
//! host-provided sequence; hosts yield entities in the order they are
//! willing to lose them. Every operation is best-effort: an individual
//! removal failure is skipped without aborting the batch.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::info;

use turbine_host::{EntityHooks, WorldId};

/// Periodically trims excess non-player entities from a world.
pub struct EntityOptimizer {
    tick_counter: AtomicU64,
}

impl EntityOptimizer {
    pub fn new() -> Self {
        Self {
            tick_counter: AtomicU64::new(0),
        }
    }

    /// One entity-tick pass. Returns the number of entities removed.
    ///
    /// Acts only when the internal counter reaches a multiple of
    /// `skip_every`; otherwise this is a no-op. With `aggressive` off, a
    /// world at or under `soft_cap` is left alone.
    pub fn run<E>(
        &self,
        entities: &E,
        world: WorldId,
        soft_cap: usize,
        skip_every: u64,
        aggressive: bool,
    ) -> usize
    where
        E: EntityHooks + ?Sized,
    {
        let tick = self.tick_counter.fetch_add(1, Ordering::Relaxed) + 1;
        if tick % skip_every.max(1) != 0 {
            return 0;
        }

        let candidates = entities.non_player_entities(world);
        let total = candidates.len();
        if total <= soft_cap && !aggressive {
            return 0;
        }

        let target = total.saturating_sub(soft_cap);
        let mut trimmed = 0;
        for entity in candidates.into_iter().take(target) {
            if entities.remove_entity(world, entity) {
                trimmed += 1;
            }
        }

        if trimmed > 0 {
            info!(
                "Trimmed {} entities (total before={}, cap={})",
                trimmed, total, soft_cap
            );
        }
        trimmed
    }
}

impl Default for EntityOptimizer {
    fn default() -> Self {
        Self::new()
    }
}
