//! Timed enemy spawning

use crate::spawner;
use crate::world::GameWorld;
use arcade_engine::ecs::System;

/// Spawns one enemy every `enemy.spawn_interval` frames
pub struct EnemySpawnerSystem;

impl System<GameWorld> for EnemySpawnerSystem {
    fn name(&self) -> &'static str {
        "enemy_spawner"
    }

    fn run(&mut self, world: &mut GameWorld) {
        let elapsed = world.current_frame.saturating_sub(world.last_enemy_spawn_frame);
        if elapsed >= world.config.enemy.spawn_interval {
            spawner::spawn_enemy(world);
        }
    }
}
