//! Configuration settings structures.
//!
//! The seven sections of the persisted `config.json` document. Every field
//! carries a default so a partial or extended file still deserializes; raw
//! values are stored as read and clamped only at the point of use through
//! the `effective_*` accessors.

use serde::{Deserialize, Serialize};

/// Root configuration object, replaced wholesale on reload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct PerfConfig {
    /// Simulation tick pacing knobs.
    pub tick: TickSettings,
    /// Bounded worker pool sizing.
    #[serde(rename = "async")]
    pub async_pool: AsyncSettings,
    /// Entity soft-cap trimming.
    pub entities: EntitySettings,
    /// Network-facing throttles.
    pub network: NetworkSettings,
    /// World autosave scheduling.
    pub world: WorldSettings,
    /// Particle density scaling.
    pub particles: ParticlesSettings,
    /// Bundled coarse toggles.
    pub bundled: BundledSettings,
}

/// Tick catch-up and jitter clamping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TickSettings {
    /// Maximum milliseconds of tick catch-up per cycle.
    pub max_catchup_millis: u32,
    /// Clamp applied to tick timing jitter, in milliseconds.
    pub jitter_clamp_ms: u32,
}

impl Default for TickSettings {
    fn default() -> Self {
        Self {
            max_catchup_millis: 50,
            jitter_clamp_ms: 10,
        }
    }
}

/// Worker pool sizing. The pool is rebuilt, never resized, so these only
/// take effect at construction time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AsyncSettings {
    /// Number of pool worker threads.
    pub worker_threads: usize,
    /// Capacity of the pending-work queue.
    pub max_queue: usize,
}

impl AsyncSettings {
    /// Minimum queue capacity a pool will ever be built with.
    pub const MIN_QUEUE: usize = 64;

    /// Worker thread count floored to 1.
    pub fn effective_worker_threads(&self) -> usize {
        self.worker_threads.max(1)
    }

    /// Queue capacity floored to [`Self::MIN_QUEUE`].
    pub fn effective_max_queue(&self) -> usize {
        self.max_queue.max(Self::MIN_QUEUE)
    }
}

impl Default for AsyncSettings {
    fn default() -> Self {
        Self {
            worker_threads: 2,
            max_queue: 512,
        }
    }
}

/// Entity soft-cap trimming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EntitySettings {
    /// Target maximum non-player entities per scope; excess is trimmed.
    pub soft_cap_per_chunk: usize,
    /// The entity pass only acts on every Nth tick.
    pub distant_ai_skip_every: u64,
}

impl EntitySettings {
    pub fn effective_soft_cap(&self) -> usize {
        self.soft_cap_per_chunk.max(1)
    }

    pub fn effective_skip_every(&self) -> u64 {
        self.distant_ai_skip_every.max(1)
    }
}

impl Default for EntitySettings {
    fn default() -> Self {
        Self {
            soft_cap_per_chunk: 35,
            distant_ai_skip_every: 4,
        }
    }
}

/// Network-facing throttles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NetworkSettings {
    /// Packet burst ceiling per connection.
    pub packet_burst_limit: u32,
    /// Chat coalescing window in milliseconds; 0 disables suppression.
    pub coalesce_chat_ms: u64,
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            packet_burst_limit: 256,
            coalesce_chat_ms: 75,
        }
    }
}

/// World autosave scheduling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorldSettings {
    /// Minutes between autosave backups.
    pub autosave_minutes: u64,
    /// Whether saves are staggered rather than run as a single burst.
    pub stagger_saves: bool,
}

impl WorldSettings {
    /// Autosave period floored to one minute.
    pub fn effective_autosave_minutes(&self) -> u64 {
        self.autosave_minutes.max(1)
    }
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            autosave_minutes: 10,
            stagger_saves: true,
        }
    }
}

/// Particle density scaling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParticlesSettings {
    /// Requested density multiplier; consumed clamped to `[0.1, 1.0]`.
    pub density_scalar: f64,
    /// Whether the scalar also applies to projectile trails.
    pub apply_to_projectiles: bool,
}

impl ParticlesSettings {
    /// Density scalar clamped into `[0.1, 1.0]`.
    pub fn effective_density_scalar(&self) -> f64 {
        self.density_scalar.clamp(0.1, 1.0)
    }
}

impl Default for ParticlesSettings {
    fn default() -> Self {
        Self {
            density_scalar: 0.85,
            apply_to_projectiles: true,
        }
    }
}

/// Bundled coarse toggles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct BundledSettings {
    /// Trim entities even while under the soft cap.
    pub aggressive_trimming: bool,
    /// Lighter AI evaluation depth for distant entities.
    pub low_ai_depth: bool,
}
