//! # Galaxy Wars
//!
//! An asteroids-like arcade shooter. The player ship survives waves of enemies
//! that split into smaller fragments when shot.
//!
//! The game is a [`GameWorld`] of tagged entities driven one frame at a time by
//! [`Game`]. Presentation and input are pluggable through the engine's
//! [`Surface`](arcade_engine::render::Surface) and
//! [`InputSource`](arcade_engine::input::InputSource) traits.
//!
//! ```rust
//! use arcade_engine::prelude::*;
//! use galaxy_wars::{Game, GameConfig};
//!
//! let mut config = GameConfig::default();
//! config.background = None;
//! let input = ScriptedInput::empty().at(2, InputEvent::Closed);
//! let mut game = Game::new(config, HeadlessSurface::new(1280, 720), input, 7).unwrap();
//!
//! assert_eq!(game.run(), 3);
//! assert_eq!(game.score_text(), "Score: 0");
//! ```

#![warn(missing_docs)]

pub mod components;
pub mod config;
pub mod error;
pub mod game;
pub mod spawner;
pub mod systems;
pub mod world;

pub use components::{Components, Entities, GameEntity, Tag};
pub use config::GameConfig;
pub use error::{GameError, GameResult};
pub use game::Game;
pub use world::GameWorld;
