//! Movement integration

use crate::components::Input;
use crate::world::GameWorld;
use arcade_engine::ecs::System;
use arcade_engine::foundation::math::Vec2;

/// Degrees every transform spins per frame
pub const SPIN_PER_FRAME: f32 = 2.0;

/// Turns player input into velocity, then moves and spins every transform
///
/// Player movement is not inertial: velocity is rebuilt from the held controls
/// each frame, so no controls means standing still.
pub struct MovementSystem;

/// Player velocity for the held controls
pub fn player_velocity(input: &Input, speed: f32) -> Vec2 {
    let mut velocity = Vec2::zeros();
    if input.up {
        velocity.y -= speed;
    }
    if input.down {
        velocity.y += speed;
    }
    if input.left {
        velocity.x -= speed;
    }
    if input.right {
        velocity.x += speed;
    }
    velocity
}

impl System<GameWorld> for MovementSystem {
    fn name(&self) -> &'static str {
        "movement"
    }

    fn run(&mut self, world: &mut GameWorld) {
        let speed = world.config.player.speed;
        if let Some(player) = world.entities.get_mut(world.player) {
            let components = &mut player.components;
            if let (Some(transform), Some(input)) = (components.transform.as_mut(), components.input) {
                transform.velocity = player_velocity(&input, speed);
            }
        }

        let keys = world.entities.entities().to_vec();
        for key in keys {
            let Some(transform) = world
                .entities
                .get_mut(key)
                .and_then(|entity| entity.components.transform.as_mut())
            else {
                continue;
            };
            transform.position += transform.velocity;
            transform.angle += SPIN_PER_FRAME;
        }
    }
}
