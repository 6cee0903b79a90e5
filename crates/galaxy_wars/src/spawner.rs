//! Entity spawning and derivation
//!
//! Every function here only queues new entities. Existing entities are read for
//! their current state but never modified, so spawning is safe in the middle of
//! any system pass.

use crate::components::{Collision, Components, Input, Lifespan, Score, Shape, Tag, Transform};
use crate::config::{EnemyHeading, SplitVelocity};
use crate::world::GameWorld;
use arcade_engine::ecs::EntityKey;
use arcade_engine::foundation::math::{Vec2, Vec2Ext};
use arcade_engine::render::Color;
use rand::Rng;

/// Points for a large enemy; fragments are worth twice their parent
pub const ENEMY_SCORE: u32 = 100;

/// Frames fragments lose relative to the configured enemy lifespan
pub const SMALL_ENEMY_LIFESPAN_PENALTY: u32 = 50;

/// Bullets in one special-weapon ring
pub const SPECIAL_WEAPON_BULLETS: u32 = 15;

/// Special-weapon projectile look
const SPECIAL_WEAPON_RADIUS: f32 = 20.0;
const SPECIAL_WEAPON_POINTS: u32 = 4;
const SPECIAL_WEAPON_FILL: Color = Color::rgb(255, 160, 122);
const SPECIAL_WEAPON_OUTLINE: Color = Color::rgb(205, 92, 92);

fn spawn(world: &mut GameWorld, tag: Tag, components: Components) -> EntityKey {
    let key = world.entities.add_entity(tag);
    if let Some(entity) = world.entities.get_mut(key) {
        entity.components = components;
    }
    key
}

/// Spawn a player at the center of the surface and make it the current player
pub fn spawn_player(world: &mut GameWorld) -> EntityKey {
    let config = &world.config.player;
    let components = Components {
        transform: Some(Transform::new(world.center(), Vec2::zeros())),
        shape: Some(Shape {
            radius: config.shape_radius,
            point_count: config.vertices,
            fill: config.fill_color(),
            outline: config.outline_color(),
            outline_thickness: config.outline_thickness,
        }),
        collision: Some(Collision {
            radius: config.collision_radius,
        }),
        input: Some(Input::default()),
        ..Components::default()
    };

    let key = spawn(world, Tag::Player, components);
    world.player = key;
    log::debug!("Spawned player at {:?}", world.center());
    key
}

/// Spawn a large enemy at a random position and record the spawn frame
pub fn spawn_enemy(world: &mut GameWorld) -> EntityKey {
    let config = &world.config.enemy;
    let rng = &mut world.rng;

    let position = Vec2::new(
        rng.gen_range(0.0..world.bounds.x),
        rng.gen_range(0.0..world.bounds.y),
    );
    let point_count = rng.gen_range(config.vertices_min..=config.vertices_max);
    let speed = rng.gen_range(config.speed_min..=config.speed_max);
    let velocity = match world.config.rules.enemy_heading {
        EnemyHeading::Diagonal => Vec2::new(speed, speed),
        EnemyHeading::Random => Vec2::from_degrees(rng.gen_range(0.0..360.0)) * speed,
    };
    let fill = Color::rgb(rng.gen(), rng.gen(), rng.gen());

    let components = Components {
        transform: Some(Transform::new(position, velocity)),
        shape: Some(Shape {
            radius: config.shape_radius,
            point_count,
            fill,
            outline: Color::from(config.outline),
            outline_thickness: config.outline_thickness,
        }),
        collision: Some(Collision {
            radius: config.collision_radius,
        }),
        score: Some(Score {
            points: ENEMY_SCORE,
        }),
        ..Components::default()
    };

    let key = spawn(world, Tag::Enemy, components);
    world.last_enemy_spawn_frame = world.current_frame;
    log::debug!(
        "Spawned enemy with {} vertices at {:?} (frame {})",
        point_count,
        position,
        world.current_frame
    );
    key
}

/// Split a destroyed large enemy into one fragment per vertex
///
/// Fragments start at the parent's position, fan out at `360 / n` degree steps
/// and carry half the parent's radii and twice its score. A parent without a
/// transform or shape yields nothing.
pub fn spawn_small_enemies(world: &mut GameWorld, parent: EntityKey) -> Vec<EntityKey> {
    let Some(parent) = world.entities.get(parent) else {
        return Vec::new();
    };
    let (Some(transform), Some(shape)) = (parent.components.transform, parent.components.shape)
    else {
        return Vec::new();
    };
    let collision_radius = parent
        .components
        .collision
        .map_or(world.config.enemy.collision_radius, |c| c.radius);
    let points = parent.components.score.map_or(0, |s| s.points) * 2;
    let lifespan = world
        .config
        .enemy
        .lifespan
        .saturating_sub(SMALL_ENEMY_LIFESPAN_PENALTY);
    let split = world.config.rules.split_velocity;

    let count = shape.point_count;
    let step = 360.0 / count.max(1) as f32;
    (0..count)
        .map(|i| {
            let direction = Vec2::from_degrees(i as f32 * step);
            let velocity = match split {
                SplitVelocity::PerAxis => direction.component_mul(&transform.velocity),
                SplitVelocity::Rotated => direction * transform.velocity.norm(),
            };
            let components = Components {
                transform: Some(Transform::new(transform.position, velocity)),
                shape: Some(Shape {
                    radius: shape.radius / 2.0,
                    ..shape
                }),
                collision: Some(Collision {
                    radius: collision_radius / 2.0,
                }),
                score: Some(Score { points }),
                lifespan: Some(Lifespan::new(lifespan)),
                ..Components::default()
            };
            spawn(world, Tag::SmallEnemy, components)
        })
        .collect()
}

fn bullet(world: &GameWorld, position: Vec2, velocity: Vec2) -> Components {
    let config = &world.config.bullet;
    Components {
        transform: Some(Transform::new(position, velocity)),
        shape: Some(Shape {
            radius: config.shape_radius,
            point_count: config.vertices,
            fill: config.fill_color(),
            outline: config.outline_color(),
            outline_thickness: config.outline_thickness,
        }),
        collision: Some(Collision {
            radius: config.collision_radius,
        }),
        lifespan: Some(Lifespan::new(config.lifespan)),
        ..Components::default()
    }
}

/// Fire a bullet from `shooter` towards `target`
///
/// A target on top of the shooter gives a stationary bullet. Returns `None` when
/// the shooter has no transform.
pub fn spawn_bullet(world: &mut GameWorld, shooter: EntityKey, target: Vec2) -> Option<EntityKey> {
    let origin = world.entities.get(shooter)?.components.transform?.position;
    let velocity = (target - origin).normalized_or_zero() * world.config.bullet.speed;

    let components = bullet(world, origin, velocity);
    Some(spawn(world, Tag::Bullet, components))
}

/// Fire a ring of special-weapon bullets around `shooter`
///
/// Bullet `i` travels at `i * 24` degrees with the configured bullet speed.
pub fn spawn_special_weapon(world: &mut GameWorld, shooter: EntityKey) -> Vec<EntityKey> {
    let Some(origin) = world
        .entities
        .get(shooter)
        .and_then(|entity| entity.components.transform)
        .map(|transform| transform.position)
    else {
        return Vec::new();
    };
    let speed = world.config.bullet.speed;
    let step = 360.0 / SPECIAL_WEAPON_BULLETS as f32;

    (0..SPECIAL_WEAPON_BULLETS)
        .map(|i| {
            let velocity = Vec2::from_degrees(i as f32 * step) * speed;
            let mut components = bullet(world, origin, velocity);
            if let Some(shape) = components.shape.as_mut() {
                shape.radius = SPECIAL_WEAPON_RADIUS;
                shape.point_count = SPECIAL_WEAPON_POINTS;
                shape.fill = SPECIAL_WEAPON_FILL;
                shape.outline = SPECIAL_WEAPON_OUTLINE;
            }
            spawn(world, Tag::Bullet, components)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GameConfig, RulesConfig};
    use approx::assert_relative_eq;

    fn world() -> GameWorld {
        GameWorld::new(GameConfig::default(), (1280, 720), 42)
    }

    fn components(world: &GameWorld, key: EntityKey) -> &Components {
        &world.entities.get(key).unwrap().components
    }

    #[test]
    fn test_player_spawns_at_center() {
        let world = world();
        let player = components(&world, world.player);
        let transform = player.transform.unwrap();

        assert_eq!(transform.position, Vec2::new(640.0, 360.0));
        assert_eq!(transform.velocity, Vec2::zeros());
        assert_relative_eq!(transform.angle, 0.0);
        assert_eq!(player.input, Some(Input::default()));
        assert_eq!(player.shape.unwrap().point_count, 8);
        assert_relative_eq!(player.collision.unwrap().radius, 32.0);
        assert!(player.lifespan.is_none());
    }

    #[test]
    fn test_respawn_replaces_player_handle() {
        let mut world = world();
        let first = world.player;
        let second = spawn_player(&mut world);
        assert_ne!(first, second);
        assert_eq!(world.player, second);
    }

    #[test]
    fn test_enemy_attributes_within_config() {
        let mut world = world();
        world.config.enemy.speed_min = 2.0;
        world.config.enemy.speed_max = 6.0;
        world.current_frame = 17;

        for _ in 0..50 {
            let key = spawn_enemy(&mut world);
            let enemy = components(&world, key);
            let transform = enemy.transform.unwrap();
            let shape = enemy.shape.unwrap();

            assert!((0.0..1280.0).contains(&transform.position.x));
            assert!((0.0..720.0).contains(&transform.position.y));
            assert!((3..=8).contains(&shape.point_count));
            assert!((2.0..=6.0).contains(&transform.velocity.x));
            assert_relative_eq!(transform.velocity.x, transform.velocity.y);
            assert_eq!(shape.fill.a, 255);
            assert_eq!(shape.outline, Color::WHITE);
            assert_eq!(enemy.score, Some(Score { points: 100 }));
            assert!(enemy.lifespan.is_none());
        }
        assert_eq!(world.last_enemy_spawn_frame, 17);
    }

    #[test]
    fn test_random_heading_keeps_speed() {
        let mut world = world();
        world.config.rules = RulesConfig {
            enemy_heading: EnemyHeading::Random,
            ..RulesConfig::default()
        };
        let key = spawn_enemy(&mut world);
        let velocity = components(&world, key).transform.unwrap().velocity;
        assert_relative_eq!(velocity.norm(), 3.0, epsilon = 1e-4);
    }

    #[test]
    fn test_same_seed_same_enemies() {
        let mut a = world();
        let mut b = world();
        let ka = spawn_enemy(&mut a);
        let kb = spawn_enemy(&mut b);
        assert_eq!(
            components(&a, ka).transform.unwrap().position,
            components(&b, kb).transform.unwrap().position
        );
    }

    fn parent(world: &mut GameWorld, velocity: Vec2, points: u32) -> EntityKey {
        let key = spawn_enemy(world);
        let entity = world.entities.get_mut(key).unwrap();
        let transform = entity.components.transform.as_mut().unwrap();
        transform.position = Vec2::new(100.0, 200.0);
        transform.velocity = velocity;
        entity.components.shape.as_mut().unwrap().point_count = points;
        key
    }

    #[test]
    fn test_split_per_axis_velocity() {
        let mut world = world();
        let key = parent(&mut world, Vec2::new(3.0, 3.0), 4);
        let children = spawn_small_enemies(&mut world, key);

        let velocities: Vec<Vec2> = children
            .iter()
            .map(|&c| components(&world, c).transform.unwrap().velocity)
            .collect();
        assert_relative_eq!(velocities[0].x, 3.0, epsilon = 1e-5);
        assert_relative_eq!(velocities[0].y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(velocities[1].x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(velocities[1].y, 3.0, epsilon = 1e-5);
        assert_relative_eq!(velocities[2].x, -3.0, epsilon = 1e-5);

        for &child in &children {
            let child = components(&world, child);
            assert_eq!(child.transform.unwrap().position, Vec2::new(100.0, 200.0));
            assert_relative_eq!(child.shape.unwrap().radius, 16.0);
            assert_eq!(child.lifespan, Some(Lifespan::new(40)));
        }
    }

    #[test]
    fn test_split_rotated_velocity() {
        let mut world = world();
        world.config.rules.split_velocity = SplitVelocity::Rotated;
        let key = parent(&mut world, Vec2::new(3.0, 4.0), 6);

        for child in spawn_small_enemies(&mut world, key) {
            let velocity = components(&world, child).transform.unwrap().velocity;
            assert_relative_eq!(velocity.norm(), 5.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_split_lifespan_saturates() {
        let mut world = world();
        world.config.enemy.lifespan = 30;
        let key = parent(&mut world, Vec2::new(1.0, 1.0), 3);
        let children = spawn_small_enemies(&mut world, key);
        assert_eq!(components(&world, children[0]).lifespan, Some(Lifespan::new(0)));
    }

    #[test]
    fn test_split_of_unknown_parent() {
        let mut world = world();
        let key = spawn_enemy(&mut world);
        world.entities.destroy(key);
        world.entities.update();
        assert!(spawn_small_enemies(&mut world, key).is_empty());
    }

    #[test]
    fn test_bullet_aims_at_target() {
        let mut world = world();
        let player = world.player;
        let key = spawn_bullet(&mut world, player, Vec2::new(640.0, 0.0)).unwrap();
        let bullet = components(&world, key);

        let transform = bullet.transform.unwrap();
        assert_eq!(transform.position, Vec2::new(640.0, 360.0));
        assert_relative_eq!(transform.velocity.x, 0.0);
        assert_relative_eq!(transform.velocity.y, -20.0);
        assert_eq!(bullet.lifespan, Some(Lifespan::new(90)));
        assert_relative_eq!(bullet.collision.unwrap().radius, 10.0);
        assert_eq!(world.entities.get(key).unwrap().tag(), Tag::Bullet);
    }

    #[test]
    fn test_bullet_at_own_position_is_stationary() {
        let mut world = world();
        let player = world.player;
        let key = spawn_bullet(&mut world, player, Vec2::new(640.0, 360.0)).unwrap();
        assert_eq!(components(&world, key).transform.unwrap().velocity, Vec2::zeros());
    }

    #[test]
    fn test_special_weapon_look() {
        let mut world = world();
        let player = world.player;
        let bullets = spawn_special_weapon(&mut world, player);
        let shape = components(&world, bullets[3]).shape.unwrap();

        assert_relative_eq!(shape.radius, 20.0);
        assert_eq!(shape.point_count, 4);
        assert_eq!(shape.fill, Color::rgb(255, 160, 122));
        assert_eq!(shape.outline, Color::rgb(205, 92, 92));
        assert_relative_eq!(shape.outline_thickness, 2.0);
    }
}
