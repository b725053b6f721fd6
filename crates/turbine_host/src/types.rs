//! Shared identifier and value types exchanged with the host.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a loaded world on the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorldId(pub Uuid);

impl WorldId {
    /// Creates a new random world ID using UUID v4.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for WorldId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for WorldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for an entity within a world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    /// Creates a new random entity ID using UUID v4.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Live particle rendering settings published through the property sink.
///
/// Other host subsystems read this to decide how densely to spawn particle
/// effects and whether projectile trails are affected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleScaling {
    /// Density multiplier in `[0.1, 1.0]`.
    pub density_scalar: f64,
    /// Whether the scalar also applies to projectile trails.
    pub apply_to_projectiles: bool,
}

impl Default for ParticleScaling {
    fn default() -> Self {
        Self {
            density_scalar: 1.0,
            apply_to_projectiles: true,
        }
    }
}

/// Current wall-clock time in milliseconds since the Unix epoch.
pub fn current_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(WorldId::new(), WorldId::new());
        assert_ne!(EntityId::new(), EntityId::new());
    }

    #[test]
    fn test_particle_scaling_default() {
        let scaling = ParticleScaling::default();
        assert_eq!(scaling.density_scalar, 1.0);
        assert!(scaling.apply_to_projectiles);
    }

    #[test]
    fn test_current_millis_is_monotonic_enough() {
        let a = current_millis();
        let b = current_millis();
        assert!(b >= a);
        assert!(a > 0);
    }
}
