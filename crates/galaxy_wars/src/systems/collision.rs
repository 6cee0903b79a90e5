//! Collision detection and boundary handling
//!
//! All hit tests are circle against circle using the collision radius, never the
//! visual radius. Entities without a transform or collision component, and
//! entities already destroyed this frame, are skipped.

use crate::components::{Collision, Tag, Transform};
use crate::config::EnemyBounce;
use crate::spawner;
use crate::world::GameWorld;
use arcade_engine::ecs::{EntityKey, System};
use arcade_engine::foundation::math::{Vec2, Vec2Ext};

/// Resolves player deaths, bullet kills and surface edges
pub struct CollisionSystem;

/// Whether two circles overlap (touching does not count)
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    let reach = ra + rb;
    a.dist_sq(&b) < reach * reach
}

fn body(world: &GameWorld, key: EntityKey) -> Option<(Transform, Collision)> {
    let entity = world.entities.get(key)?;
    if !entity.is_active() {
        return None;
    }
    Some((entity.components.transform?, entity.components.collision?))
}

fn hit(world: &GameWorld, a: EntityKey, b: EntityKey) -> bool {
    match (body(world, a), body(world, b)) {
        (Some((ta, ca)), Some((tb, cb))) => {
            circles_overlap(ta.position, ca.radius, tb.position, cb.radius)
        }
        _ => false,
    }
}

fn points(world: &GameWorld, key: EntityKey) -> u32 {
    world
        .entities
        .get(key)
        .and_then(|entity| entity.components.score)
        .map_or(0, |score| score.points)
}

impl CollisionSystem {
    /// Checks every live player against both enemy kinds; a replacement player is
    /// still queued, so it is not checked until the next frame
    fn player_hits(world: &mut GameWorld) {
        let players = world.entities.entities_by_tag(Tag::Player).to_vec();
        for player in players {
            for tag in [Tag::Enemy, Tag::SmallEnemy] {
                let targets = world.entities.entities_by_tag(tag).to_vec();
                for target in targets {
                    if !hit(world, player, target) {
                        continue;
                    }

                    let score = match tag {
                        Tag::SmallEnemy => world.score / 2,
                        _ => 0,
                    };
                    log::debug!("Player destroyed by {}", tag);
                    world.set_score(score);
                    world.entities.destroy(player);
                    world.entities.destroy(target);
                    spawner::spawn_player(world);
                }
            }
        }
    }

    fn bullet_hits(world: &mut GameWorld, tag: Tag) {
        let bullets = world.entities.entities_by_tag(Tag::Bullet).to_vec();
        let targets = world.entities.entities_by_tag(tag).to_vec();
        for bullet in bullets {
            for &target in &targets {
                if !hit(world, bullet, target) {
                    continue;
                }

                let points = points(world, target);
                world.add_score(points);
                if tag == Tag::Enemy {
                    spawner::spawn_small_enemies(world, target);
                }
                world.entities.destroy(bullet);
                world.entities.destroy(target);
                break;
            }
        }
    }

    /// Nudges players back one speed step per frame while they overlap an edge
    fn confine_player(world: &mut GameWorld) {
        let bounds = world.bounds;
        let speed = world.config.player.speed;
        let radius = world.config.player.collision_radius;
        let players = world.entities.entities_by_tag(Tag::Player).to_vec();

        for key in players {
            let Some(transform) = world
                .entities
                .get_mut(key)
                .and_then(|player| player.components.transform.as_mut())
            else {
                continue;
            };

            for axis in 0..2 {
                let position = &mut transform.position[axis];
                if *position + radius > bounds[axis] {
                    *position -= speed;
                } else if *position - radius < 0.0 {
                    *position += speed;
                }
            }
        }
    }

    fn bounce_enemies(world: &mut GameWorld) {
        let bounds = world.bounds;
        let bounce = world.config.rules.enemy_bounce;
        let enemies = world.entities.entities_by_tag(Tag::Enemy).to_vec();

        for key in enemies {
            let Some(entity) = world.entities.get_mut(key) else {
                continue;
            };
            let (Some(transform), Some(collision)) =
                (entity.components.transform.as_mut(), entity.components.collision)
            else {
                continue;
            };
            let radius = collision.radius;

            for axis in 0..2 {
                let position = transform.position[axis];
                let over_max = position + radius > bounds[axis];
                let under_min = position - radius < 0.0;

                match bounce {
                    EnemyBounce::Repeat => {
                        if over_max || under_min {
                            transform.velocity[axis] = -transform.velocity[axis];
                        }
                    }
                    EnemyBounce::ReflectOnce => {
                        if over_max {
                            transform.velocity[axis] = -transform.velocity[axis].abs();
                            transform.position[axis] = bounds[axis] - radius;
                        } else if under_min {
                            transform.velocity[axis] = transform.velocity[axis].abs();
                            transform.position[axis] = radius;
                        }
                    }
                }
            }
        }
    }
}

impl System<GameWorld> for CollisionSystem {
    fn name(&self) -> &'static str {
        "collision"
    }

    fn run(&mut self, world: &mut GameWorld) {
        Self::player_hits(world);
        Self::bullet_hits(world, Tag::Enemy);
        Self::bullet_hits(world, Tag::SmallEnemy);
        Self::confine_player(world);
        Self::bounce_enemies(world);
    }
}
