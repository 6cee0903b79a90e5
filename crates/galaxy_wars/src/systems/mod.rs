//! Per-frame systems
//!
//! The simulation systems run as a [`Pipeline`] in a fixed order and are
//! skipped while the game is paused. Input and rendering talk to outside
//! collaborators, so the game loop calls them directly every frame.
//!
//! | System        | Reads                               | Writes                             |
//! |---------------|-------------------------------------|------------------------------------|
//! | lifespan      | lifespan                            | lifespan, shape alpha, active      |
//! | enemy spawner | frame counters                      | registry queue, last spawn frame   |
//! | movement      | input, transform                    | transform                          |
//! | collision     | transform, collision, score         | score, active, transform, queue    |
//! | user input    | input events                        | player input, paused, running      |
//! | render        | transform, shape, score             | surface                            |

pub mod collision;
pub mod enemy_spawner;
pub mod lifespan;
pub mod movement;
pub mod render;
pub mod user_input;

pub use collision::CollisionSystem;
pub use enemy_spawner::EnemySpawnerSystem;
pub use lifespan::LifespanSystem;
pub use movement::MovementSystem;
pub use render::RenderSystem;
pub use user_input::UserInputSystem;

use crate::world::GameWorld;
use arcade_engine::ecs::Pipeline;

/// Simulation systems in frame order
pub fn simulation_pipeline() -> Pipeline<GameWorld> {
    Pipeline::new()
        .with(LifespanSystem)
        .with(EnemySpawnerSystem)
        .with(MovementSystem)
        .with(CollisionSystem)
}
