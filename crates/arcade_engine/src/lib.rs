//! # Arcade Engine
//!
//! A small, frame-stepped 2D engine for arcade games.
//!
//! ## Features
//!
//! - **Entity Registry**: Tagged entities with deferred insertion and removal
//! - **System Pipeline**: Ordered per-frame passes over a game world
//! - **Configuration**: TOML, RON and legacy whitespace-token config files
//! - **Presentation**: A surface trait plus a headless implementation
//! - **Input**: A polled event model with a scripted source for replays
//!
//! ## Quick Start
//!
//! ```rust
//! use arcade_engine::prelude::*;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum Tag { Rock }
//!
//! let mut entities: EntityManager<Tag, ()> = EntityManager::new();
//! let rock = entities.add_entity(Tag::Rock);
//! assert!(entities.entities().is_empty());
//!
//! entities.update();
//! assert_eq!(entities.entities_by_tag(Tag::Rock), &[rock]);
//! ```

#![warn(missing_docs)]

pub mod foundation;
pub mod ecs;
pub mod config;
pub mod input;
pub mod render;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        foundation::{
            math::{Vec2, Vec2Ext},
            time::FrameLimiter,
        },
        ecs::{Entity, EntityKey, EntityManager, Pipeline, System},
        config::{Config, ConfigError},
        input::{InputEvent, InputSource, KeyCode, MouseButton, ScriptedInput},
        render::{Color, HeadlessSurface, ShapeDraw, Surface, SurfaceError},
    };
}
