//! Entity manager with deferred insertion and removal
//!
//! Creation queues an entity; destruction flags it. Neither touches the live
//! collections. [`EntityManager::update`] reconciles both once per frame in two
//! phases: queued entities are added first, then every inactive entity is removed
//! from the live list and from each tag bucket.

use super::entity::{Entity, EntityKey};
use super::Tag;
use slotmap::SlotMap;
use std::collections::HashMap;

/// Owner of every entity in a world
pub struct EntityManager<T, C> {
    storage: SlotMap<EntityKey, Entity<T, C>>,
    live: Vec<EntityKey>,
    pending: Vec<EntityKey>,
    buckets: HashMap<T, Vec<EntityKey>>,
    total_created: u64,
}

impl<T: Tag, C: Default> EntityManager<T, C> {
    /// Create an empty manager
    pub fn new() -> Self {
        Self {
            storage: SlotMap::with_key(),
            live: Vec::new(),
            pending: Vec::new(),
            buckets: HashMap::new(),
            total_created: 0,
        }
    }

    /// Queue a new entity with the given tag
    ///
    /// The entity can be configured through the returned handle straight away but
    /// does not appear in [`entities`](Self::entities) until the next sweep.
    pub fn add_entity(&mut self, tag: T) -> EntityKey {
        let entity = Entity::new(self.total_created, tag);
        self.total_created += 1;

        let key = self.storage.insert(entity);
        self.pending.push(key);
        key
    }
}

impl<T: Tag, C> EntityManager<T, C> {
    /// Apply queued creations, then purge inactive entities
    ///
    /// Must run exactly once per frame, before any system touches entity data.
    pub fn update(&mut self) {
        let added = self.pending.len();
        for key in self.pending.drain(..) {
            if let Some(entity) = self.storage.get(key) {
                self.live.push(key);
                self.buckets.entry(entity.tag()).or_default().push(key);
            }
        }

        let before = self.live.len();
        let storage = &self.storage;
        let is_alive = |key: &EntityKey| storage.get(*key).is_some_and(Entity::is_active);

        self.live.retain(is_alive);
        for bucket in self.buckets.values_mut() {
            bucket.retain(is_alive);
        }
        self.storage.retain(|_, entity| entity.is_active());

        let removed = before - self.live.len();
        if added > 0 || removed > 0 {
            log::trace!(
                "EntityManager: swept +{} -{} (live: {})",
                added,
                removed,
                self.live.len()
            );
        }
    }

    /// All live entities, in creation order
    pub fn entities(&self) -> &[EntityKey] {
        &self.live
    }

    /// Live entities carrying `tag`; empty if none were ever created
    pub fn entities_by_tag(&self, tag: T) -> &[EntityKey] {
        self.buckets.get(&tag).map_or(&[][..], Vec::as_slice)
    }

    /// Iterate live entities together with their handles
    pub fn iter(&self) -> impl Iterator<Item = (EntityKey, &Entity<T, C>)> {
        self.live
            .iter()
            .filter_map(|&key| self.storage.get(key).map(|entity| (key, entity)))
    }

    /// Look up an entity, live or still queued
    pub fn get(&self, key: EntityKey) -> Option<&Entity<T, C>> {
        self.storage.get(key)
    }

    /// Look up an entity mutably, live or still queued
    pub fn get_mut(&mut self, key: EntityKey) -> Option<&mut Entity<T, C>> {
        self.storage.get_mut(key)
    }

    /// Whether the handle still refers to a stored entity
    pub fn contains(&self, key: EntityKey) -> bool {
        self.storage.contains_key(key)
    }

    /// Whether the handle refers to a stored entity that has not been destroyed
    pub fn is_active(&self, key: EntityKey) -> bool {
        self.storage.get(key).is_some_and(Entity::is_active)
    }

    /// Flag an entity for removal at the next sweep
    ///
    /// Stale handles and already-destroyed entities are ignored.
    pub fn destroy(&mut self, key: EntityKey) {
        if let Some(entity) = self.storage.get_mut(key) {
            entity.destroy();
        }
    }

    /// Number of live entities
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Whether there are no live entities
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Number of entities waiting for the next sweep
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Number of entities ever created; also the next entity ID
    pub fn total_created(&self) -> u64 {
        self.total_created
    }
}

impl<T: Tag, C: Default> Default for EntityManager<T, C> {
    fn default() -> Self {
        Self::new()
    }
}
