//! Host capability API for the Turbine performance add-on.
//!
//! Turbine runs embedded in a long-lived game server host. Everything the
//! add-on needs from that host (world readiness, backup triggering, entity
//! storage access, chat rendering overrides, the shared particle property
//! cell) is expressed here as a narrow capability trait. The core never
//! probes the host's internals; it only calls through these interfaces, so a
//! host upgrade that reshapes its entity storage only has to re-implement a
//! small adapter.
//!
//! The crate also carries the small shared vocabulary both sides speak:
//! [`WorldId`] / [`EntityId`] identifiers, the colored [`Message`] type used
//! for operator-facing chat output, and [`ParticleScaling`], the value
//! published through the property sink.

pub use hooks::{ChatEvent, CommandResponder, EntityHooks, HostServices, PropertySink, WorldHooks};
pub use message::{Color, Message};
pub use properties::SharedProperties;
pub use types::{current_millis, EntityId, ParticleScaling, WorldId};

pub mod hooks;
pub mod message;
pub mod properties;
pub mod types;
