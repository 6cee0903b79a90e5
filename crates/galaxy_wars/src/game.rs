//! Game loop orchestration
//!
//! One [`Game::step`] is one frame:
//!
//! 1. sweep the registry (queued entities appear, destroyed ones vanish)
//! 2. unless paused: lifespan, enemy spawner, movement, collision
//! 3. input
//! 4. render
//! 5. advance the frame counter

use crate::config::GameConfig;
use crate::error::GameResult;
use crate::systems::{self, RenderSystem, UserInputSystem};
use crate::world::GameWorld;
use arcade_engine::config::{Config, ConfigError};
use arcade_engine::ecs::Pipeline;
use arcade_engine::input::InputSource;
use arcade_engine::render::{Color, Surface};
use std::path::Path;

/// Window title
pub const TITLE: &str = "Chipmore Galaxy Wars";

/// A running game bound to a surface and an input source
pub struct Game<S: Surface, I: InputSource> {
    world: GameWorld,
    surface: S,
    input: I,
    simulation: Pipeline<GameWorld>,
    max_frames: Option<u64>,
}

impl<S: Surface, I: InputSource> Game<S, I> {
    /// Validate the configuration, load presentation resources and spawn the player
    ///
    /// Missing background or font files are logged and the game runs without them.
    pub fn new(config: GameConfig, mut surface: S, input: I, seed: u64) -> GameResult<Self> {
        config.validate()?;
        let (width, height) = surface.size();
        if width == 0 || height == 0 {
            return Err(ConfigError::Invalid(format!(
                "surface size {}x{} must be positive",
                width, height
            ))
            .into());
        }

        if let Some(background) = &config.background {
            if let Err(e) = surface.load_background(Path::new(background)) {
                log::warn!("Running without background: {}", e);
            }
        }
        let font = &config.font;
        if let Err(e) = surface.load_font(Path::new(&font.path), font.size, Color::from(font.color)) {
            log::warn!("Running without score font: {}", e);
        }

        let world = GameWorld::new(config, surface.size(), seed);
        log::info!(
            "{} started: {}x{} (seed {})",
            TITLE,
            world.bounds.x,
            world.bounds.y,
            seed
        );

        Ok(Self {
            world,
            surface,
            input,
            simulation: systems::simulation_pipeline(),
            max_frames: None,
        })
    }

    /// Stop after `frames` frames even if the game is still running
    #[must_use]
    pub fn with_max_frames(mut self, frames: u64) -> Self {
        self.max_frames = Some(frames);
        self
    }

    /// Run one frame
    pub fn step(&mut self) {
        let world = &mut self.world;
        world.entities.update();

        if !world.paused {
            self.simulation.run(world);
        }

        UserInputSystem::run(world, &mut self.input);
        RenderSystem::run(world, &mut self.surface);

        world.current_frame += 1;
    }

    /// Step until the game stops running or the frame limit is reached
    ///
    /// Returns the number of frames stepped.
    pub fn run(&mut self) -> u64 {
        let start = self.world.current_frame;
        while self.world.running
            && self
                .max_frames
                .map_or(true, |max| self.world.current_frame < max)
        {
            self.step();
        }

        let frames = self.world.current_frame - start;
        log::info!(
            "{} stopped after {} frames with {}",
            TITLE,
            frames,
            self.score_text()
        );
        frames
    }

    /// Current score line
    pub fn score_text(&self) -> String {
        self.world.score_text()
    }

    /// Current score
    pub fn score(&self) -> u64 {
        self.world.score
    }

    /// Whether the game will keep stepping
    pub fn is_running(&self) -> bool {
        self.world.running
    }

    /// Game state
    pub fn world(&self) -> &GameWorld {
        &self.world
    }

    /// Mutable game state
    pub fn world_mut(&mut self) -> &mut GameWorld {
        &mut self.world
    }

    /// Presentation surface
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Input source
    pub fn input(&self) -> &I {
        &self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Tag;
    use crate::error::GameError;
    use arcade_engine::input::{InputEvent, KeyCode, ScriptedInput};
    use arcade_engine::render::HeadlessSurface;

    fn quiet_config() -> GameConfig {
        let mut config = GameConfig::default();
        config.background = None;
        config
    }

    fn game(input: ScriptedInput) -> Game<HeadlessSurface, ScriptedInput> {
        Game::new(quiet_config(), HeadlessSurface::new(1280, 720), input, 99).unwrap()
    }

    #[test]
    fn test_invalid_config_rejected_before_start() {
        let mut config = GameConfig::default();
        config.enemy.vertices_min = 2;
        let result = Game::new(config, HeadlessSurface::new(1280, 720), ScriptedInput::empty(), 0);
        assert!(matches!(result, Err(GameError::Config(_))));
    }

    #[test]
    fn test_empty_surface_rejected_before_start() {
        for (width, height) in [(0, 0), (0, 720), (1280, 0)] {
            let result = Game::new(
                quiet_config(),
                HeadlessSurface::new(width, height),
                ScriptedInput::empty(),
                0,
            );
            assert!(matches!(
                result,
                Err(GameError::Config(ConfigError::Invalid(_)))
            ));
        }
    }

    #[test]
    fn test_missing_resources_are_not_fatal() {
        let mut config = GameConfig::default();
        config.background = Some("no/such/background.jpg".to_string());
        config.font.path = "no/such/font.ttf".to_string();
        let game = Game::new(config, HeadlessSurface::new(1280, 720), ScriptedInput::empty(), 0);
        assert!(game.is_ok());
    }

    #[test]
    fn test_first_frame() {
        let mut game = game(ScriptedInput::empty());
        game.step();

        let world = game.world();
        assert_eq!(world.current_frame, 1);
        assert_eq!(world.entities.entities_by_tag(Tag::Player).len(), 1);
        assert_eq!(game.surface().last_frame().text, vec!["Score: 0".to_string()]);
        assert_eq!(game.surface().last_frame().shapes.len(), 1);
    }

    #[test]
    fn test_enemies_spawn_on_interval() {
        let mut config = quiet_config();
        config.player.collision_radius = 0.0;
        config.enemy.collision_radius = 0.0;
        let mut game = Game::new(config, HeadlessSurface::new(1280, 720), ScriptedInput::empty(), 5)
            .unwrap()
            .with_max_frames(121);
        assert_eq!(game.run(), 121);

        // spawned on frames 60 and 120; the second is still queued
        let world = game.world();
        assert_eq!(world.entities.entities_by_tag(Tag::Enemy).len(), 1);
        assert_eq!(world.entities.pending_len(), 1);
        assert_eq!(world.last_enemy_spawn_frame, 120);
    }

    #[test]
    fn test_paused_frames_still_count() {
        let input = ScriptedInput::empty()
            .at(0, InputEvent::KeyPressed(KeyCode::P))
            .at(0, InputEvent::KeyPressed(KeyCode::D));
        let mut game = game(input).with_max_frames(10);
        game.run();

        let world = game.world();
        assert!(world.paused);
        assert_eq!(world.current_frame, 10);
        let player = world.entities.get(world.player).unwrap().components.transform.unwrap();
        assert_eq!(player.position.x, 640.0);
        assert_eq!(game.surface().presented_frames(), 10);
    }

    #[test]
    fn test_close_finishes_current_frame() {
        let input = ScriptedInput::empty().at(4, InputEvent::Closed);
        let mut game = game(input).with_max_frames(100);
        assert_eq!(game.run(), 5);
        assert!(!game.is_running());
        assert_eq!(game.surface().presented_frames(), 5);
    }
}
