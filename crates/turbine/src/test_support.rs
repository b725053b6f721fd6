//! Shared in-memory host double for unit tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use turbine_host::{
    EntityHooks, EntityId, ParticleScaling, PropertySink, WorldHooks, WorldId,
};

/// Test host implementing every capability against plain in-memory state.
pub(crate) struct TestHost {
    pub world: Mutex<Option<WorldId>>,
    pub backups: AtomicUsize,
    pub fail_backup: AtomicBool,
    entities: Mutex<Vec<EntityId>>,
    removed: AtomicUsize,
    published: Mutex<Vec<ParticleScaling>>,
    /// When set, `publish_particles` sleeps this long; used to probe that
    /// reload cycles never overlap.
    pub publish_delay: Option<Duration>,
    publishing: AtomicUsize,
    pub publish_overlapped: AtomicBool,
}

impl TestHost {
    pub fn with_world() -> Self {
        Self::new(Some(WorldId::new()))
    }

    pub fn without_world() -> Self {
        Self::new(None)
    }

    fn new(world: Option<WorldId>) -> Self {
        Self {
            world: Mutex::new(world),
            backups: AtomicUsize::new(0),
            fail_backup: AtomicBool::new(false),
            entities: Mutex::new(Vec::new()),
            removed: AtomicUsize::new(0),
            published: Mutex::new(Vec::new()),
            publish_delay: None,
            publishing: AtomicUsize::new(0),
            publish_overlapped: AtomicBool::new(false),
        }
    }

    pub fn populate_entities(&self, count: usize) {
        let mut entities = self.entities.lock().unwrap();
        entities.clear();
        entities.extend((0..count).map(|_| EntityId::new()));
    }

    pub fn entity_count(&self) -> usize {
        self.entities.lock().unwrap().len()
    }

    pub fn removed_count(&self) -> usize {
        self.removed.load(Ordering::SeqCst)
    }

    pub fn published(&self) -> Vec<ParticleScaling> {
        self.published.lock().unwrap().clone()
    }
}

#[async_trait]
impl WorldHooks for TestHost {
    fn ready_world(&self) -> Option<WorldId> {
        *self.world.lock().unwrap()
    }

    async fn run_backup(&self) -> anyhow::Result<()> {
        self.backups.fetch_add(1, Ordering::SeqCst);
        if self.fail_backup.load(Ordering::SeqCst) {
            anyhow::bail!("backup failed");
        }
        Ok(())
    }

    fn execute_on_world(&self, _world: WorldId, job: Box<dyn FnOnce() + Send + 'static>) {
        job();
    }
}

impl EntityHooks for TestHost {
    fn non_player_entities(&self, _world: WorldId) -> Vec<EntityId> {
        self.entities.lock().unwrap().clone()
    }

    fn remove_entity(&self, _world: WorldId, entity: EntityId) -> bool {
        let mut entities = self.entities.lock().unwrap();
        match entities.iter().position(|&e| e == entity) {
            Some(index) => {
                entities.remove(index);
                self.removed.fetch_add(1, Ordering::SeqCst);
                true
            }
            None => false,
        }
    }
}

impl PropertySink for TestHost {
    fn publish_particles(&self, scaling: ParticleScaling) {
        let concurrent = self.publishing.fetch_add(1, Ordering::SeqCst);
        if concurrent > 0 {
            self.publish_overlapped.store(true, Ordering::SeqCst);
        }
        if let Some(delay) = self.publish_delay {
            std::thread::sleep(delay);
        }
        self.published.lock().unwrap().push(scaling);
        self.publishing.fetch_sub(1, Ordering::SeqCst);
    }

    fn particles(&self) -> ParticleScaling {
        self.published
            .lock()
            .unwrap()
            .last()
            .copied()
            .unwrap_or_default()
    }
}
