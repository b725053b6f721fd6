//! Periodic background task scheduling.
//!
//! Three named jobs (autosave, entity-tick, metrics) run on the tokio
//! runtime with periods derived from configuration. Job bodies capture an
//! immutable configuration snapshot at schedule time, so a reload swaps
//! the whole set rather than mutating anything a running body can see.
//! One failing run never cancels a schedule or affects another job.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval, interval_at, Instant};
use tracing::{info, warn};

use turbine_host::HostServices;

use crate::config::PerfConfig;
use crate::optimizers::EntityOptimizer;
use crate::pool::WorkerPool;

/// Names of the periodic jobs owned by the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobName {
    Autosave,
    EntityTick,
    Metrics,
}

impl JobName {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobName::Autosave => "autosave",
            JobName::EntityTick => "entity-tick",
            JobName::Metrics => "metrics",
        }
    }
}

/// Owns at most one live task handle per job name.
pub struct TaskScheduler {
    handles: Mutex<HashMap<JobName, JoinHandle<()>>>,
}

impl TaskScheduler {
    pub fn new() -> Self {
        Self {
            handles: Mutex::new(HashMap::new()),
        }
    }

    /// Creates (or re-creates) every periodic job from `config`.
    ///
    /// Any pre-existing handle for a job name is cancelled before its
    /// replacement is spawned, so calling this twice in a row leaves
    /// exactly one live handle per job.
    pub async fn schedule_all(
        &self,
        config: Arc<PerfConfig>,
        host: Arc<dyn HostServices>,
        pool: Arc<WorkerPool>,
        entity_optimizer: Arc<EntityOptimizer>,
    ) {
        let mut handles = self.handles.lock().await;
        Self::replace(
            &mut handles,
            JobName::Autosave,
            spawn_autosave(config.clone(), host.clone()),
        );
        Self::replace(
            &mut handles,
            JobName::EntityTick,
            spawn_entity_tick(config, host, entity_optimizer),
        );
        Self::replace(&mut handles, JobName::Metrics, spawn_metrics(pool));
    }

    /// Cancels every live handle without waiting for in-flight runs and
    /// clears the handle set. Safe to call when nothing is scheduled.
    pub async fn cancel_all(&self) {
        let mut handles = self.handles.lock().await;
        for (name, handle) in handles.drain() {
            handle.abort();
            info!("Cancelled scheduled job: {}", name.as_str());
        }
    }

    /// Number of currently tracked job handles.
    pub async fn live_handles(&self) -> usize {
        self.handles.lock().await.len()
    }

    fn replace(
        handles: &mut HashMap<JobName, JoinHandle<()>>,
        name: JobName,
        handle: JoinHandle<()>,
    ) {
        if let Some(previous) = handles.remove(&name) {
            previous.abort();
        }
        handles.insert(name, handle);
    }
}

impl Default for TaskScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Autosave: period and initial delay of `autosaveMinutes` (min 1).
/// Skips the period cleanly when no world is ready; backup failures are
/// logged and the schedule continues.
fn spawn_autosave(config: Arc<PerfConfig>, host: Arc<dyn HostServices>) -> JoinHandle<()> {
    let period = Duration::from_secs(config.world.effective_autosave_minutes() * 60);
    tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        loop {
            ticker.tick().await;
            if host.ready_world().is_none() {
                info!("Skipping backup; no world loaded yet");
                continue;
            }
            if let Err(error) = host.run_backup().await {
                warn!("Autosave backup failed: {}", error);
            }
        }
    })
}

/// Entity tick: fixed 1s period, no initial delay. The optimizer pass is
/// handed to the world's own execution context; a missing world skips the
/// tick silently.
fn spawn_entity_tick(
    config: Arc<PerfConfig>,
    host: Arc<dyn HostServices>,
    optimizer: Arc<EntityOptimizer>,
) -> JoinHandle<()> {
    let soft_cap = config.entities.effective_soft_cap();
    let skip_every = config.entities.effective_skip_every();
    let aggressive = config.bundled.aggressive_trimming;
    tokio::spawn(async move {
        let mut ticker = interval(Duration::from_secs(1));
        loop {
            ticker.tick().await;
            let Some(world) = host.ready_world() else {
                continue;
            };
            let run_host = host.clone();
            let run_optimizer = optimizer.clone();
            host.execute_on_world(
                world,
                Box::new(move || {
                    run_optimizer.run(run_host.as_ref(), world, soft_cap, skip_every, aggressive);
                }),
            );
        }
    })
}

/// Metrics: fixed 30s period, 1s initial delay. Reports the worker pool
/// captured at schedule time.
fn spawn_metrics(pool: Arc<WorkerPool>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval_at(
            Instant::now() + Duration::from_secs(1),
            Duration::from_secs(30),
        );
        loop {
            ticker.tick().await;
            info!(
                "Async pool queued={} completed={}",
                pool.queue_depth(),
                pool.completed()
            );
        }
    })
}
