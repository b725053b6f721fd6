//! Particle density scaling.
//!
//! Clamps the configured density scalar, remembers what was last applied,
//! and publishes the result through the host's property sink for other
//! subsystems to read. Re-applying with new configuration simply
//! overwrites; no rollback, no validation beyond the clamp.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use tracing::info;

use turbine_host::{ParticleScaling, PropertySink};

use crate::config::ParticlesSettings;

/// Publishes clamped particle density settings process-wide.
pub struct ParticleOptimizer {
    scalar_bits: AtomicU64,
    apply_to_projectiles: AtomicBool,
}

impl ParticleOptimizer {
    pub fn new() -> Self {
        let initial = ParticleScaling::default();
        Self {
            scalar_bits: AtomicU64::new(initial.density_scalar.to_bits()),
            apply_to_projectiles: AtomicBool::new(initial.apply_to_projectiles),
        }
    }

    /// Clamps and publishes the configured scaling.
    pub fn apply<S>(&self, particles: &ParticlesSettings, sink: &S)
    where
        S: PropertySink + ?Sized,
    {
        let scaling = ParticleScaling {
            density_scalar: particles.effective_density_scalar(),
            apply_to_projectiles: particles.apply_to_projectiles,
        };

        self.scalar_bits
            .store(scaling.density_scalar.to_bits(), Ordering::Relaxed);
        self.apply_to_projectiles
            .store(scaling.apply_to_projectiles, Ordering::Relaxed);
        sink.publish_particles(scaling);

        info!(
            "Particle density scalar set to {:.2} (projectiles={})",
            scaling.density_scalar, scaling.apply_to_projectiles
        );
    }

    /// The scalar most recently applied, clamped.
    pub fn current_scalar(&self) -> f64 {
        f64::from_bits(self.scalar_bits.load(Ordering::Relaxed))
    }

    /// Whether the last-applied settings covered projectile trails.
    pub fn applies_to_projectiles(&self) -> bool {
        self.apply_to_projectiles.load(Ordering::Relaxed)
    }
}

impl Default for ParticleOptimizer {
    fn default() -> Self {
        Self::new()
    }
}
