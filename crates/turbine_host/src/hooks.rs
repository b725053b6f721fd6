//! Capability traits the add-on core consumes from the host.
//!
//! Hosts implement these against their own internals; the core stays
//! agnostic of how worlds, entity storage, or chat rendering actually work.
//! All host operations are best-effort collaborators: failures are reported
//! through return values, never panics.

use async_trait::async_trait;

use crate::message::Message;
use crate::types::{EntityId, ParticleScaling, WorldId};

/// World lifecycle operations: readiness, backups, and the world's
/// dedicated execution context.
#[async_trait]
pub trait WorldHooks: Send + Sync {
    /// The world currently loaded and ready for work, if any.
    ///
    /// `None` is a skip condition, not an error: callers are expected to
    /// quietly wait for a later period.
    fn ready_world(&self) -> Option<WorldId>;

    /// Triggers a world backup. May fail; the caller logs and carries on.
    async fn run_backup(&self) -> anyhow::Result<()>;

    /// Runs `job` on the world's own execution context.
    ///
    /// Entity mutation must stay consistent with the host's threading rules,
    /// so anything touching entity storage goes through here rather than
    /// running on a scheduler thread.
    fn execute_on_world(&self, world: WorldId, job: Box<dyn FnOnce() + Send + 'static>);
}

/// Entity storage access for a given world.
///
/// The sequence order returned by [`non_player_entities`] is the trim order:
/// hosts should yield entities in the order they are willing to lose them.
///
/// [`non_player_entities`]: EntityHooks::non_player_entities
pub trait EntityHooks: Send + Sync {
    /// All entities in `world` that are not identifiable as players.
    fn non_player_entities(&self, world: WorldId) -> Vec<EntityId>;

    /// Attempts to remove one entity. Returns whether removal took effect;
    /// a `false` is skipped silently by callers.
    fn remove_entity(&self, world: WorldId, entity: EntityId) -> bool;
}

/// Process-wide publication point for live particle settings.
///
/// Single writer (the particle optimizer), many readers (whatever host
/// subsystems care). Implementations must be safe for concurrent reads
/// while a write is in flight.
pub trait PropertySink: Send + Sync {
    /// Overwrites the published settings.
    fn publish_particles(&self, scaling: ParticleScaling);

    /// The most recently published settings.
    fn particles(&self) -> ParticleScaling;
}

/// The full bundle of host capabilities the add-on wires against.
pub trait HostServices: WorldHooks + EntityHooks + PropertySink {}

impl<T: WorldHooks + EntityHooks + PropertySink> HostServices for T {}

/// A chat event whose outgoing rendering can be overridden.
///
/// The event itself is never cancelled; suppression only swaps what gets
/// rendered to recipients.
pub trait ChatEvent {
    /// Display name of the sending player.
    fn sender_name(&self) -> &str;

    /// Replaces the outgoing rendering of this event.
    fn set_formatter(&mut self, message: Message);
}

/// Where an administrative command's responses go.
pub trait CommandResponder: Send + Sync {
    fn send_message(&self, message: Message);
}
