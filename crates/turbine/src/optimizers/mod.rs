//! Policy units driven by configuration slices and host capabilities.
//!
//! Each optimizer is independent and holds only the small amount of state
//! its policy needs; instances are created once at startup and reused
//! across reloads, with fresh configuration handed in per call or per
//! schedule cycle.

pub mod chat;
pub mod entity;
pub mod particle;

pub use chat::ChatBurstOptimizer;
pub use entity::EntityOptimizer;
pub use particle::ParticleOptimizer;
