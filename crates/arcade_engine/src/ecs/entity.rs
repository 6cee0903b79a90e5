//! Entity implementation

slotmap::new_key_type! {
    /// Generational handle to an entity owned by an [`EntityManager`](super::EntityManager)
    ///
    /// Handles are non-owning: once the entity is swept the handle stops resolving.
    pub struct EntityKey;
}

/// A tagged entity with an attached component record
#[derive(Debug, Clone)]
pub struct Entity<T, C> {
    id: u64,
    tag: T,
    active: bool,
    /// Attached components
    pub components: C,
}

impl<T: Copy, C: Default> Entity<T, C> {
    /// Create a new active entity with no components attached
    pub(super) fn new(id: u64, tag: T) -> Self {
        Self {
            id,
            tag,
            active: true,
            components: C::default(),
        }
    }
}

impl<T: Copy, C> Entity<T, C> {
    /// Get the entity ID
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Get the entity tag
    pub fn tag(&self) -> T {
        self.tag
    }

    /// Whether the entity is still alive
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Mark the entity for removal at the next sweep. Idempotent.
    pub fn destroy(&mut self) {
        self.active = false;
    }
}
