//! Default in-process property cell for particle settings.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crate::hooks::PropertySink;
use crate::types::ParticleScaling;

/// Lock-free single-writer, multi-reader cell holding the live
/// [`ParticleScaling`].
///
/// Hosts that have no better place to park the published settings can embed
/// one of these and hand it to the add-on as its [`PropertySink`]. The two
/// fields are stored as independent atomics; a reader racing a writer may
/// observe the new scalar with the old projectile flag for one read, which
/// is acceptable for render tuning.
pub struct SharedProperties {
    scalar_bits: AtomicU64,
    apply_to_projectiles: AtomicBool,
}

impl SharedProperties {
    pub fn new() -> Self {
        let initial = ParticleScaling::default();
        Self {
            scalar_bits: AtomicU64::new(initial.density_scalar.to_bits()),
            apply_to_projectiles: AtomicBool::new(initial.apply_to_projectiles),
        }
    }
}

impl Default for SharedProperties {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertySink for SharedProperties {
    fn publish_particles(&self, scaling: ParticleScaling) {
        self.scalar_bits
            .store(scaling.density_scalar.to_bits(), Ordering::Release);
        self.apply_to_projectiles
            .store(scaling.apply_to_projectiles, Ordering::Release);
    }

    fn particles(&self) -> ParticleScaling {
        ParticleScaling {
            density_scalar: f64::from_bits(self.scalar_bits.load(Ordering::Acquire)),
            apply_to_projectiles: self.apply_to_projectiles.load(Ordering::Acquire),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_full_density() {
        let cell = SharedProperties::new();
        assert_eq!(cell.particles(), ParticleScaling::default());
    }

    #[test]
    fn test_publish_overwrites() {
        let cell = SharedProperties::new();
        cell.publish_particles(ParticleScaling {
            density_scalar: 0.6,
            apply_to_projectiles: false,
        });
        let read = cell.particles();
        assert_eq!(read.density_scalar, 0.6);
        assert!(!read.apply_to_projectiles);

        cell.publish_particles(ParticleScaling {
            density_scalar: 0.85,
            apply_to_projectiles: true,
        });
        assert_eq!(cell.particles().density_scalar, 0.85);
    }
}
