//! Input-to-intent mapping
//!
//! Only writes the player's held controls and the pause/running flags, plus
//! queued bullets for mouse clicks. Velocity is left to movement.

use crate::spawner;
use crate::world::GameWorld;
use arcade_engine::foundation::math::Vec2;
use arcade_engine::input::{InputEvent, InputSource, KeyCode, MouseButton};

/// Drains the input source once per frame
pub struct UserInputSystem;

impl UserInputSystem {
    /// Handle every pending event in delivery order; returns how many were handled
    pub fn run(world: &mut GameWorld, input: &mut impl InputSource) -> usize {
        if let Some(controls) = world.player_input_mut() {
            controls.shoot = false;
        }
        let events = input.poll_all();
        for &event in &events {
            Self::handle(world, event);
        }
        events.len()
    }

    /// Handle one event
    pub fn handle(world: &mut GameWorld, event: InputEvent) {
        match event {
            InputEvent::Closed => {
                log::info!("Window closed");
                world.running = false;
            }
            InputEvent::KeyPressed(KeyCode::Escape) => {
                log::debug!("Escape pressed");
                world.running = false;
            }
            InputEvent::KeyPressed(KeyCode::P) => {
                world.paused = !world.paused;
                log::debug!("P pressed, paused: {}", world.paused);
            }
            InputEvent::KeyPressed(key) => Self::set_control(world, key, true),
            InputEvent::KeyReleased(key) => Self::set_control(world, key, false),
            InputEvent::MouseButtonPressed { button, x, y } => {
                log::debug!("{:?} mouse button clicked at ({}, {})", button, x, y);
                let player = world.player;
                match button {
                    MouseButton::Left => {
                        if spawner::spawn_bullet(world, player, Vec2::new(x, y)).is_some() {
                            if let Some(controls) = world.player_input_mut() {
                                controls.shoot = true;
                            }
                        }
                    }
                    MouseButton::Right => {
                        spawner::spawn_special_weapon(world, player);
                    }
                    MouseButton::Middle => {}
                }
            }
        }
    }

    fn set_control(world: &mut GameWorld, key: KeyCode, held: bool) {
        let Some(input) = world.player_input_mut() else {
            return;
        };
        let flag = match key {
            KeyCode::W => &mut input.up,
            KeyCode::A => &mut input.left,
            KeyCode::S => &mut input.down,
            KeyCode::D => &mut input.right,
            _ => return,
        };
        *flag = held;
        log::debug!("{:?} {}", key, if held { "pressed" } else { "released" });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Input, Tag};
    use crate::config::GameConfig;
    use std::collections::VecDeque;

    fn world() -> GameWorld {
        let mut world = GameWorld::new(GameConfig::default(), (1280, 720), 11);
        world.entities.update();
        world
    }

    fn controls(world: &GameWorld) -> Input {
        world
            .entities
            .get(world.player)
            .and_then(|p| p.components.input)
            .unwrap()
    }

    #[test]
    fn test_keys_set_and_clear_controls() {
        let mut world = world();
        let mut events: VecDeque<_> = [
            InputEvent::KeyPressed(KeyCode::W),
            InputEvent::KeyPressed(KeyCode::D),
            InputEvent::KeyPressed(KeyCode::Other),
            InputEvent::KeyReleased(KeyCode::W),
        ]
        .into();

        assert_eq!(UserInputSystem::run(&mut world, &mut events), 4);
        assert_eq!(
            controls(&world),
            Input {
                right: true,
                ..Input::default()
            }
        );
    }

    #[test]
    fn test_shoot_flag_lasts_one_pass() {
        let mut world = world();
        let mut events: VecDeque<_> = [InputEvent::MouseButtonPressed {
            button: MouseButton::Left,
            x: 10.0,
            y: 10.0,
        }]
        .into();

        UserInputSystem::run(&mut world, &mut events);
        assert!(controls(&world).shoot);

        UserInputSystem::run(&mut world, &mut events);
        assert!(!controls(&world).shoot);
    }

    #[test]
    fn test_pause_toggles_on_press_only() {
        let mut world = world();
        UserInputSystem::handle(&mut world, InputEvent::KeyPressed(KeyCode::P));
        assert!(world.paused);
        UserInputSystem::handle(&mut world, InputEvent::KeyReleased(KeyCode::P));
        assert!(world.paused);
        UserInputSystem::handle(&mut world, InputEvent::KeyPressed(KeyCode::P));
        assert!(!world.paused);
    }

    #[test]
    fn test_close_stops_running() {
        let mut world = world();
        UserInputSystem::handle(&mut world, InputEvent::Closed);
        assert!(!world.running);

        let mut world = self::world();
        UserInputSystem::handle(&mut world, InputEvent::KeyPressed(KeyCode::Escape));
        assert!(!world.running);
    }

    #[test]
    fn test_clicks_queue_bullets() {
        let mut world = world();
        UserInputSystem::handle(
            &mut world,
            InputEvent::MouseButtonPressed {
                button: MouseButton::Left,
                x: 0.0,
                y: 0.0,
            },
        );
        assert_eq!(world.entities.pending_len(), 1);

        UserInputSystem::handle(
            &mut world,
            InputEvent::MouseButtonPressed {
                button: MouseButton::Right,
                x: 0.0,
                y: 0.0,
            },
        );
        world.entities.update();
        assert_eq!(world.entities.entities_by_tag(Tag::Bullet).len(), 16);

        let velocity = world.entities.get(world.player).unwrap().components.transform.unwrap().velocity;
        assert_eq!(velocity, Vec2::zeros());
    }
}
