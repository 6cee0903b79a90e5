//! Entity-Component-System implementation
//!
//! Entities carry an immutable tag and a game-defined component record. The
//! [`EntityManager`] defers every structural change to its once-per-frame
//! [`EntityManager::update`] sweep, so systems never see a collection change size
//! underneath them.

pub mod entity;
pub mod manager;
pub mod system;

pub use entity::{Entity, EntityKey};
pub use manager::EntityManager;
pub use system::{Pipeline, System};

use std::fmt::Debug;
use std::hash::Hash;

/// Bound for entity tags: a small copyable key used to bucket entities
pub trait Tag: Copy + Eq + Hash + Debug {}

impl<T: Copy + Eq + Hash + Debug> Tag for T {}
