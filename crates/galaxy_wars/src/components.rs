//! Game-specific components
//!
//! The component set is closed: every entity carries a [`Components`] record with
//! one optional slot per kind.

use arcade_engine::ecs::{Entity, EntityManager};
use arcade_engine::foundation::math::Vec2;
use arcade_engine::render::{Color, ShapeDraw};
use std::fmt;

/// Entity categories; each gets its own tag bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// The player ship
    Player,
    /// Large enemy that splits when shot
    Enemy,
    /// Fragment of a destroyed large enemy
    SmallEnemy,
    /// Player projectile
    Bullet,
}

impl Tag {
    /// Tag name as used in logs
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Player => "player",
            Tag::Enemy => "enemy",
            Tag::SmallEnemy => "smallEnemy",
            Tag::Bullet => "bullet",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position, velocity and spin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Center in surface pixels
    pub position: Vec2,
    /// Displacement per frame
    pub velocity: Vec2,
    /// Visual rotation in degrees
    pub angle: f32,
}

impl Transform {
    /// Create a transform with zero spin
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Self {
            position,
            velocity,
            angle: 0.0,
        }
    }
}

/// Visual polygon
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    /// Visual radius
    pub radius: f32,
    /// Vertex count
    pub point_count: u32,
    /// Fill color; alpha fades with lifespan
    pub fill: Color,
    /// Outline color; alpha fades with lifespan
    pub outline: Color,
    /// Outline thickness
    pub outline_thickness: f32,
}

impl Shape {
    /// Draw command for this shape placed by `transform`
    pub fn to_draw(&self, transform: &Transform) -> ShapeDraw {
        ShapeDraw {
            position: transform.position,
            rotation_degrees: transform.angle,
            radius: self.radius,
            point_count: self.point_count,
            fill: self.fill,
            outline: self.outline,
            outline_thickness: self.outline_thickness,
        }
    }
}

/// Collision circle, independent of the visual radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collision {
    /// Collision radius
    pub radius: f32,
}

/// Points awarded when this entity is shot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    /// Point value
    pub points: u32,
}

/// Frame countdown with fade-out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lifespan {
    /// Frames left; never exceeds `total`
    pub remaining: u32,
    /// Frames at creation
    pub total: u32,
}

impl Lifespan {
    /// Create a full lifespan
    pub fn new(total: u32) -> Self {
        Self {
            remaining: total,
            total,
        }
    }

    /// Count down one frame, stopping at zero
    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    /// Whether the countdown has run out
    pub fn expired(&self) -> bool {
        self.remaining == 0
    }

    /// Fraction of the lifespan left, in `0.0..=1.0`
    pub fn ratio(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.remaining as f32 / self.total as f32
        }
    }
}

/// Held controls of the player; written by input, read by movement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Input {
    /// Move up
    pub up: bool,
    /// Move down
    pub down: bool,
    /// Move left
    pub left: bool,
    /// Move right
    pub right: bool,
    /// Fired a bullet during the latest input pass
    pub shoot: bool,
}

/// Optional component slots attached to every entity
#[derive(Debug, Clone, Default)]
pub struct Components {
    /// Position/velocity/angle
    pub transform: Option<Transform>,
    /// Visual shape
    pub shape: Option<Shape>,
    /// Collision circle
    pub collision: Option<Collision>,
    /// Point value
    pub score: Option<Score>,
    /// Countdown to removal
    pub lifespan: Option<Lifespan>,
    /// Player controls
    pub input: Option<Input>,
}

/// Entity type used by the game
pub type GameEntity = Entity<Tag, Components>;

/// Entity registry used by the game
pub type Entities = EntityManager<Tag, Components>;
