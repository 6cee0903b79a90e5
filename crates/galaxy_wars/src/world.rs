//! Global game state shared by every system

use crate::components::{Entities, Input};
use crate::config::GameConfig;
use crate::spawner;
use arcade_engine::ecs::EntityKey;
use arcade_engine::foundation::math::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Everything a frame reads or writes
///
/// Each field has one writer: the registry is swept by the game loop, `score`
/// is written by collision, `paused`/`running` by input, `last_enemy_spawn_frame`
/// by enemy spawning and `player` by player spawning.
pub struct GameWorld {
    /// Entity registry; sole owner of all entities
    pub entities: Entities,

    /// Immutable run configuration
    pub config: GameConfig,

    /// Source of all randomness
    pub rng: StdRng,

    /// Running score
    pub score: u64,

    /// Frames stepped so far, paused frames included
    pub current_frame: u64,

    /// Frame of the most recent enemy spawn
    pub last_enemy_spawn_frame: u64,

    /// Simulation systems are skipped while set
    pub paused: bool,

    /// The loop stops at the top of the next iteration once cleared
    pub running: bool,

    /// Handle of the current player; replaced on every respawn
    pub player: EntityKey,

    /// Surface size (width, height)
    pub bounds: Vec2,
}

impl GameWorld {
    /// Create a world and spawn the first player at the center of `bounds`
    pub fn new(config: GameConfig, bounds: (u32, u32), seed: u64) -> Self {
        let mut world = Self {
            entities: Entities::new(),
            config,
            rng: StdRng::seed_from_u64(seed),
            score: 0,
            current_frame: 0,
            last_enemy_spawn_frame: 0,
            paused: false,
            running: true,
            player: EntityKey::default(),
            bounds: Vec2::new(bounds.0 as f32, bounds.1 as f32),
        };
        spawner::spawn_player(&mut world);
        world
    }

    /// Add points for a kill
    pub fn add_score(&mut self, points: u32) {
        self.set_score(self.score + u64::from(points));
    }

    /// Replace the score
    pub fn set_score(&mut self, score: u64) {
        if score != self.score {
            log::info!("Score: {} -> {}", self.score, score);
        }
        self.score = score;
    }

    /// Score line drawn every frame
    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }

    /// Center of the surface
    pub fn center(&self) -> Vec2 {
        self.bounds / 2.0
    }

    /// Position of the current player, if it still has a transform
    pub fn player_position(&self) -> Option<Vec2> {
        self.entities
            .get(self.player)
            .and_then(|player| player.components.transform)
            .map(|transform| transform.position)
    }

    /// Held controls of the current player
    pub fn player_input_mut(&mut self) -> Option<&mut Input> {
        self.entities
            .get_mut(self.player)
            .and_then(|player| player.components.input.as_mut())
    }
}
