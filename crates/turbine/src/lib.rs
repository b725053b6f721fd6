//! # Turbine: server performance add-on
//!
//! A performance-tuning add-on for a multiplayer game server host. Turbine
//! throttles chat packet bursts, periodically trims excess non-player
//! entities, scales particle density, and runs scheduled world autosaves,
//! all driven by a hot-reloadable configuration file and a bounded worker
//! pool.
//!
//! ## Architecture
//!
//! The core of the crate is the runtime configuration & scheduling cycle:
//!
//! * **[`config::ConfigStore`]**: loads, defaults, and persists the
//!   annotated `config.json` document; never fails upward.
//! * **[`scheduler::TaskScheduler`]**: owns the three named periodic jobs
//!   (autosave, entity-tick, metrics) derived from configuration.
//! * **[`pool::WorkerPool`]**: a bounded, named worker pool sized from
//!   configuration; rebuilt, never resized.
//! * **[`optimizers`]**: independent policy units (chat burst suppressor,
//!   entity soft-cap trimmer, particle density scalar) consuming config
//!   slices and host capabilities.
//! * **[`reload::ReloadCoordinator`]**: the exclusive
//!   stop/reconfigure/start cycle behind the admin reload command.
//!
//! Game-specific mechanics stay on the host side of the `turbine_host`
//! capability traits; this crate only calls through them.
//!
//! ## Embedding
//!
//! ```no_run
//! use std::sync::Arc;
//! use turbine::TurbineAddon;
//! # async fn embed(host: Arc<dyn turbine_host::HostServices>) -> Result<(), turbine::TurbineError> {
//! let addon = TurbineAddon::new(host, "mods/turbine");
//! addon.start().await?;
//! // ... route chat events through addon.on_chat_event(...),
//! // and the admin command through turbine::command::handle_command.
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! Reload cycles serialize on one async mutex. Job bodies capture an
//! `Arc<PerfConfig>` snapshot at schedule time, so they observe either the
//! old or the new configuration, never a mix. Cancellation is
//! best-effort and non-blocking: it prevents future invocations without
//! waiting for an in-flight run to finish.

pub use addon::TurbineAddon;
pub use command::{handle_command, COMMAND_NAME};
pub use config::{ConfigStore, PerfConfig};
pub use error::TurbineError;
pub use pool::WorkerPool;
pub use reload::{ReloadCoordinator, ReloadState};
pub use scheduler::{JobName, TaskScheduler};

pub mod addon;
pub mod command;
pub mod config;
pub mod error;
pub mod logging;
pub mod optimizers;
pub mod pool;
pub mod reload;
pub mod scheduler;

#[cfg(test)]
pub(crate) mod test_support;
