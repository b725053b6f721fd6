//! Add-on facade wired against a host.
//!
//! `TurbineAddon` is what a host embeds: construct it with the host
//! capability bundle and a config root, call [`start`](TurbineAddon::start)
//! during host setup, route chat events through
//! [`on_chat_event`](TurbineAddon::on_chat_event), and hand the admin
//! command to [`crate::command::handle_command`].

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use turbine_host::{ChatEvent, HostServices};

use crate::config::{ConfigStore, PerfConfig};
use crate::error::TurbineError;
use crate::optimizers::ChatBurstOptimizer;
use crate::pool::WorkerPool;
use crate::reload::{ReloadCoordinator, ReloadState};

/// The embedded performance add-on.
pub struct TurbineAddon {
    coordinator: ReloadCoordinator,
    chat_optimizer: ChatBurstOptimizer,
}

impl TurbineAddon {
    /// Wires the add-on against `host`, with its configuration document at
    /// `<config_root>/config.json`. Nothing runs until [`start`] is called.
    ///
    /// [`start`]: TurbineAddon::start
    pub fn new(host: Arc<dyn HostServices>, config_root: impl Into<PathBuf>) -> Self {
        Self {
            coordinator: ReloadCoordinator::new(host, ConfigStore::new(config_root)),
            chat_optimizer: ChatBurstOptimizer::new(),
        }
    }

    /// Loads configuration and brings up the worker pool, the scheduled
    /// jobs, and the optimizer settings.
    pub async fn start(&self) -> Result<(), TurbineError> {
        self.coordinator.start().await?;

        let config = self.config();
        info!("Turbine initialized");
        info!("  Worker threads: {}", config.async_pool.effective_worker_threads());
        info!("  Queue capacity: {}", config.async_pool.effective_max_queue());
        info!("  Autosave period: {} min", config.world.effective_autosave_minutes());
        info!("  Entity soft cap: {}", config.entities.effective_soft_cap());
        info!("  Chat coalescing: {} ms", config.network.coalesce_chat_ms);
        info!("  Particle density: {:.2}", config.particles.effective_density_scalar());
        Ok(())
    }

    /// Cancels scheduled work and shuts the pool down.
    pub async fn shutdown(&self) {
        self.coordinator.stop().await;
        info!("Turbine stopped");
    }

    /// Runs the full reload cycle; returns whether it applied cleanly.
    pub async fn reload(&self) -> bool {
        self.coordinator.reload().await
    }

    /// Applies chat burst suppression to one incoming chat event. Hosts
    /// call this from their chat event pipeline.
    pub fn on_chat_event(&self, event: &mut dyn ChatEvent) {
        let config = self.coordinator.config();
        self.chat_optimizer.apply(event, &config.network);
    }

    /// The live configuration snapshot.
    pub fn config(&self) -> Arc<PerfConfig> {
        self.coordinator.config()
    }

    /// The current worker pool, if running.
    pub fn worker_pool(&self) -> Option<Arc<WorkerPool>> {
        self.coordinator.worker_pool()
    }

    /// Whether a reload is currently executing.
    pub fn reload_state(&self) -> ReloadState {
        self.coordinator.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestHost;
    use tempfile::tempdir;
    use turbine_host::Message;

    struct TestChatEvent {
        formatter: Option<Message>,
    }

    impl ChatEvent for TestChatEvent {
        fn sender_name(&self) -> &str {
            "casey"
        }

        fn set_formatter(&mut self, message: Message) {
            self.formatter = Some(message);
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_start_then_shutdown() {
        let root = tempdir().unwrap();
        let addon = TurbineAddon::new(Arc::new(TestHost::with_world()), root.path());

        addon.start().await.unwrap();
        assert!(addon.worker_pool().is_some());
        assert_eq!(addon.reload_state(), ReloadState::Running);

        addon.shutdown().await;
        assert!(addon.worker_pool().is_none());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_chat_events_use_the_live_config() {
        let root = tempdir().unwrap();
        // A very wide window so two back-to-back events are always inside it.
        std::fs::create_dir_all(root.path()).unwrap();
        std::fs::write(
            root.path().join("config.json"),
            r#"{ "network": { "coalesceChatMs": 600000 } }"#,
        )
        .unwrap();

        let addon = TurbineAddon::new(Arc::new(TestHost::with_world()), root.path());
        addon.start().await.unwrap();

        let mut first = TestChatEvent { formatter: None };
        addon.on_chat_event(&mut first);
        assert!(first.formatter.is_none());

        let mut second = TestChatEvent { formatter: None };
        addon.on_chat_event(&mut second);
        assert!(second.formatter.is_some());

        addon.shutdown().await;
    }
}
