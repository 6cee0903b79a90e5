//! Frame presentation

use crate::world::GameWorld;
use arcade_engine::render::Surface;

/// Pushes one complete frame into the surface
///
/// Draw order is background, every live active entity with both a transform and
/// a shape, then the score line. Nothing in the world is modified.
pub struct RenderSystem;

impl RenderSystem {
    /// Draw and present the world
    pub fn run(world: &GameWorld, surface: &mut impl Surface) {
        surface.clear();
        surface.draw_background();

        for (_, entity) in world.entities.iter() {
            if !entity.is_active() {
                continue;
            }
            let components = &entity.components;
            if let (Some(transform), Some(shape)) = (&components.transform, &components.shape) {
                surface.draw_shape(&shape.to_draw(transform));
            }
        }

        surface.draw_text(&world.score_text());
        surface.display();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::spawner;
    use arcade_engine::render::HeadlessSurface;

    #[test]
    fn test_draws_active_entities_and_score() {
        let mut world = GameWorld::new(GameConfig::default(), (1280, 720), 13);
        let enemy = spawner::spawn_enemy(&mut world);
        spawner::spawn_enemy(&mut world);
        world.entities.update();
        world.entities.destroy(enemy);
        world.score = 42;

        let mut surface = HeadlessSurface::new(1280, 720);
        RenderSystem::run(&world, &mut surface);

        let frame = surface.last_frame();
        assert!(frame.cleared);
        assert_eq!(frame.shapes.len(), 2);
        assert_eq!(frame.text, vec!["Score: 42".to_string()]);
        assert_eq!(surface.presented_frames(), 1);
    }

    #[test]
    fn test_pending_entities_not_drawn() {
        let world = GameWorld::new(GameConfig::default(), (1280, 720), 13);
        let mut surface = HeadlessSurface::new(1280, 720);
        RenderSystem::run(&world, &mut surface);
        assert!(surface.last_frame().shapes.is_empty());
    }
}
