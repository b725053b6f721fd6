//! Error types for the add-on core.
//!
//! Most failure modes in this crate are absorbed locally (config and
//! persistence problems resolve to defaults, job-body errors are isolated
//! per job); `TurbineError` covers the few that must reach a caller.

use thiserror::Error;

/// Failures surfaced by the add-on core.
#[derive(Debug, Error)]
pub enum TurbineError {
    /// Worker pool construction could not spawn a worker thread.
    #[error("failed to spawn worker thread: {0}")]
    PoolSpawn(#[from] std::io::Error),
}
