//! Reload orchestration.
//!
//! The coordinator owns every piece of derived runtime state (the live
//! configuration snapshot, the scheduled jobs, the worker pool, the
//! reload-bound optimizers) and the single exclusive gate that all
//! stop/reconfigure/start cycles pass through. A reload tears everything
//! down, reloads the file, and rebuilds; on a mid-sequence failure it
//! reports `false` and leaves whatever was already applied in place
//! rather than attempting a rollback.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::sync::RwLock;

use tokio::sync::Mutex;
use tracing::{info, warn};

use turbine_host::HostServices;

use crate::config::{ConfigStore, PerfConfig};
use crate::error::TurbineError;
use crate::optimizers::{EntityOptimizer, ParticleOptimizer};
use crate::pool::WorkerPool;
use crate::scheduler::TaskScheduler;

/// Observable coordinator state; `Reloading` is held only for the
/// duration of a reload call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadState {
    Running,
    Reloading,
}

/// Orchestrates the full stop/reconfigure/start cycle.
pub struct ReloadCoordinator {
    host: Arc<dyn HostServices>,
    store: ConfigStore,
    scheduler: TaskScheduler,
    config: RwLock<Arc<PerfConfig>>,
    pool: RwLock<Option<Arc<WorkerPool>>>,
    entity_optimizer: Arc<EntityOptimizer>,
    particle_optimizer: ParticleOptimizer,
    gate: Mutex<()>,
    reloading: AtomicBool,
}

impl ReloadCoordinator {
    pub fn new(host: Arc<dyn HostServices>, store: ConfigStore) -> Self {
        Self {
            host,
            store,
            scheduler: TaskScheduler::new(),
            config: RwLock::new(Arc::new(PerfConfig::default())),
            pool: RwLock::new(None),
            entity_optimizer: Arc::new(EntityOptimizer::new()),
            particle_optimizer: ParticleOptimizer::new(),
            gate: Mutex::new(()),
            reloading: AtomicBool::new(false),
        }
    }

    /// Current coordinator state.
    pub fn state(&self) -> ReloadState {
        if self.reloading.load(Ordering::SeqCst) {
            ReloadState::Reloading
        } else {
            ReloadState::Running
        }
    }

    /// The live configuration snapshot. Job bodies do not use this; they
    /// capture their own snapshot at schedule time.
    pub fn config(&self) -> Arc<PerfConfig> {
        self.config.read().expect("config lock poisoned").clone()
    }

    /// The current worker pool, if one has been built.
    pub fn worker_pool(&self) -> Option<Arc<WorkerPool>> {
        self.pool.read().expect("pool lock poisoned").clone()
    }

    /// Initial startup: load configuration, build the pool, schedule the
    /// jobs, apply optimizer settings.
    pub async fn start(&self) -> Result<(), TurbineError> {
        let _guard = self.gate.lock().await;
        self.apply_cycle().await
    }

    /// Cancels all jobs and shuts the pool down. Safe to call repeatedly.
    pub async fn stop(&self) {
        let _guard = self.gate.lock().await;
        self.teardown().await;
    }

    /// Full reload cycle. Concurrent calls serialize on the gate; the
    /// second waits for the first to finish rather than interleaving.
    ///
    /// Returns whether every step applied. On failure the system keeps
    /// whatever state the completed steps left behind.
    pub async fn reload(&self) -> bool {
        let _guard = self.gate.lock().await;
        self.reloading.store(true, Ordering::SeqCst);

        self.teardown().await;
        let result = self.apply_cycle().await;

        self.reloading.store(false, Ordering::SeqCst);
        match result {
            Ok(()) => {
                info!("Reloaded configuration successfully");
                true
            }
            Err(error) => {
                warn!("Failed to reload configuration: {}", error);
                false
            }
        }
    }

    /// Steps 1–2: cancel scheduled work, shut down the pool.
    async fn teardown(&self) {
        self.scheduler.cancel_all().await;
        let previous = self.pool.write().expect("pool lock poisoned").take();
        if let Some(pool) = previous {
            pool.shutdown_now();
        }
    }

    /// Steps 3–6: reload config, swap the snapshot, rebuild the pool,
    /// reschedule, re-apply optimizer settings.
    async fn apply_cycle(&self) -> Result<(), TurbineError> {
        let config = Arc::new(self.store.load().await);
        *self.config.write().expect("config lock poisoned") = config.clone();

        let pool = Arc::new(WorkerPool::build(&config.async_pool)?);
        *self.pool.write().expect("pool lock poisoned") = Some(pool.clone());

        self.scheduler
            .schedule_all(
                config.clone(),
                self.host.clone(),
                pool,
                self.entity_optimizer.clone(),
            )
            .await;

        self.particle_optimizer
            .apply(&config.particles, self.host.as_ref());
        Ok(())
    }

    /// Number of live scheduled job handles.
    pub async fn scheduled_jobs(&self) -> usize {
        self.scheduler.live_handles().await
    }
}
