//! Lifespan decay and fade-out

use crate::world::GameWorld;
use arcade_engine::ecs::System;

/// Counts lifespans down, fades shapes with the remaining ratio and destroys
/// entities whose lifespan has run out
pub struct LifespanSystem;

/// Alpha for a remaining-lifespan ratio
pub fn fade_alpha(ratio: f32) -> u8 {
    (255.0 * ratio.clamp(0.0, 1.0)) as u8
}

impl System<GameWorld> for LifespanSystem {
    fn name(&self) -> &'static str {
        "lifespan"
    }

    fn run(&mut self, world: &mut GameWorld) {
        let keys = world.entities.entities().to_vec();
        for key in keys {
            let Some(entity) = world.entities.get_mut(key) else {
                continue;
            };
            let Some(lifespan) = entity.components.lifespan.as_mut() else {
                continue;
            };

            lifespan.tick();
            let lifespan = *lifespan;

            if lifespan.expired() {
                entity.destroy();
            } else if entity.is_active() {
                let alpha = fade_alpha(lifespan.ratio());
                if let Some(shape) = entity.components.shape.as_mut() {
                    shape.fill = shape.fill.with_alpha(alpha);
                    shape.outline = shape.outline.with_alpha(alpha);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Lifespan;
    use crate::config::GameConfig;
    use crate::spawner;
    use arcade_engine::foundation::math::Vec2;

    fn world_with_bullet(lifespan: u32) -> (GameWorld, arcade_engine::ecs::EntityKey) {
        let mut world = GameWorld::new(GameConfig::default(), (1280, 720), 3);
        world.config.bullet.lifespan = lifespan;
        let player = world.player;
        let bullet = spawner::spawn_bullet(&mut world, player, Vec2::new(0.0, 0.0)).unwrap();
        world.entities.update();
        (world, bullet)
    }

    #[test]
    fn test_fade_alpha() {
        assert_eq!(fade_alpha(1.0), 255);
        assert_eq!(fade_alpha(0.5), 127);
        assert_eq!(fade_alpha(0.0), 0);
    }

    #[test]
    fn test_fades_both_colors() {
        let (mut world, bullet) = world_with_bullet(4);
        LifespanSystem.run(&mut world);

        let entity = world.entities.get(bullet).unwrap();
        assert_eq!(entity.components.lifespan, Some(Lifespan { remaining: 3, total: 4 }));
        let shape = entity.components.shape.unwrap();
        assert_eq!(shape.fill.a, 191);
        assert_eq!(shape.outline.a, 191);
        assert_eq!(shape.fill.r, 255);
        assert!(entity.is_active());
    }

    #[test]
    fn test_expired_entity_destroyed() {
        let (mut world, bullet) = world_with_bullet(2);
        LifespanSystem.run(&mut world);
        assert!(world.entities.is_active(bullet));
        LifespanSystem.run(&mut world);
        assert!(!world.entities.is_active(bullet));
        assert_eq!(
            world.entities.get(bullet).unwrap().components.lifespan.map(|l| l.remaining),
            Some(0)
        );
    }

    #[test]
    fn test_entities_without_lifespan_untouched() {
        let (mut world, _) = world_with_bullet(2);
        for _ in 0..5 {
            LifespanSystem.run(&mut world);
        }
        assert!(world.entities.is_active(world.player));
    }
}
