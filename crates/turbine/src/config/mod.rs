//! Configuration loading, defaulting, and best-effort persistence.
//!
//! The store never fails upward: a missing file materializes defaults, a
//! corrupt file is logged, overwritten with defaults, and replaced in
//! memory by defaults. Persistence is best-effort; an unwritable disk
//! leaves the in-memory configuration authoritative.

pub mod annotate;
pub mod settings;

pub use settings::{
    AsyncSettings, BundledSettings, EntitySettings, NetworkSettings, ParticlesSettings,
    PerfConfig, TickSettings, WorldSettings,
};

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use annotate::{render_annotated, strip_line_comments};

/// File name of the configuration document under the config root.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Owns the on-disk location of the configuration document.
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Creates a store rooted at `config_root`; the document lives at
    /// `<config_root>/config.json`.
    pub fn new(config_root: impl Into<PathBuf>) -> Self {
        Self {
            path: config_root.into().join(CONFIG_FILE_NAME),
        }
    }

    /// Full path of the configuration document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the configuration, falling back to defaults on any failure.
    ///
    /// A missing file is created from defaults; an unreadable or
    /// unparseable file is overwritten with defaults after a warning.
    /// Always returns a usable configuration.
    pub async fn load(&self) -> PerfConfig {
        if let Some(parent) = self.path.parent() {
            if let Err(error) = tokio::fs::create_dir_all(parent).await {
                warn!("Failed to create config directory {}: {}", parent.display(), error);
            }
        }

        if !self.path.exists() {
            let defaults = PerfConfig::default();
            self.persist(&defaults).await;
            info!("Created default configuration file: {}", self.path.display());
            return defaults;
        }

        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(error) => {
                warn!("Failed to read config {}: {}, using defaults", self.path.display(), error);
                let defaults = PerfConfig::default();
                self.persist(&defaults).await;
                return defaults;
            }
        };

        match serde_json::from_str::<PerfConfig>(&strip_line_comments(&raw)) {
            Ok(config) => config,
            Err(error) => {
                warn!("Failed to parse config {}: {}, using defaults", self.path.display(), error);
                let defaults = PerfConfig::default();
                self.persist(&defaults).await;
                defaults
            }
        }
    }

    /// Writes the annotated document. Best-effort: I/O failures are logged
    /// and swallowed.
    ///
    /// The document is staged to a sibling temp file and renamed into
    /// place, so a concurrent reader sees either the old or the new file
    /// content, never a truncated one.
    pub async fn persist(&self, config: &PerfConfig) {
        let rendered = render_annotated(config);
        let staged = self.path.with_extension("json.tmp");

        if let Err(error) = tokio::fs::write(&staged, rendered).await {
            warn!("Failed to write config {}: {}", staged.display(), error);
            return;
        }
        if let Err(error) = tokio::fs::rename(&staged, &self.path).await {
            warn!("Failed to replace config {}: {}", self.path.display(), error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_load_missing_file_creates_defaults() {
        let root = tempdir().unwrap();
        let store = ConfigStore::new(root.path());

        let config = store.load().await;
        assert_eq!(config, PerfConfig::default());

        // The annotated document was materialized on disk.
        assert!(store.path().exists());
        let written = std::fs::read_to_string(store.path()).unwrap();
        assert!(written.contains("// Options:"));
        assert!(written.contains("\"workerThreads\""));
    }

    #[tokio::test]
    async fn test_load_creates_missing_config_root() {
        let root = tempdir().unwrap();
        let nested = root.path().join("mods").join("turbine");
        let store = ConfigStore::new(&nested);

        let config = store.load().await;
        assert_eq!(config, PerfConfig::default());
        assert!(nested.join(CONFIG_FILE_NAME).exists());
    }

    #[tokio::test]
    async fn test_load_corrupt_file_falls_back_and_overwrites() {
        let root = tempdir().unwrap();
        let store = ConfigStore::new(root.path());
        std::fs::write(store.path(), "{ not json at all").unwrap();

        let config = store.load().await;
        assert_eq!(config, PerfConfig::default());

        // The corrupt file was replaced with a parseable default document.
        let config_again = store.load().await;
        assert_eq!(config_again, PerfConfig::default());
        let written = std::fs::read_to_string(store.path()).unwrap();
        assert!(written.contains("\"autosaveMinutes\""));
    }

    #[tokio::test]
    async fn test_persist_then_load_round_trips() {
        let root = tempdir().unwrap();
        let store = ConfigStore::new(root.path());

        let mut config = PerfConfig::default();
        config.async_pool.worker_threads = 6;
        config.world.autosave_minutes = 3;
        config.particles.density_scalar = 0.6;
        config.bundled.low_ai_depth = true;

        store.persist(&config).await;
        let loaded = store.load().await;
        assert_eq!(loaded, config);
    }

    #[tokio::test]
    async fn test_load_accepts_plain_unannotated_json() {
        let root = tempdir().unwrap();
        let store = ConfigStore::new(root.path());
        std::fs::write(
            store.path(),
            r#"{ "async": { "workerThreads": 8 }, "world": { "autosaveMinutes": 0 } }"#,
        )
        .unwrap();

        let config = store.load().await;
        assert_eq!(config.async_pool.worker_threads, 8);
        // Out-of-range persisted values survive loading; only use clamps.
        assert_eq!(config.world.autosave_minutes, 0);
        assert_eq!(config.world.effective_autosave_minutes(), 1);
    }
}
