//! Math utilities and types
//!
//! Provides the 2D vector type used for positions and velocities.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// Extension trait for Vec2 with game-oriented helpers
pub trait Vec2Ext {
    /// Euclidean distance to another point
    fn dist(&self, other: &Vec2) -> f32;

    /// Squared distance to another point (no square root)
    fn dist_sq(&self, other: &Vec2) -> f32;

    /// Unit-length copy of this vector, or zero if the vector has no length
    fn normalized_or_zero(&self) -> Vec2;

    /// Unit vector pointing at `degrees`, measured from +X towards +Y
    fn from_degrees(degrees: f32) -> Vec2;
}

impl Vec2Ext for Vec2 {
    fn dist(&self, other: &Vec2) -> f32 {
        self.dist_sq(other).sqrt()
    }

    fn dist_sq(&self, other: &Vec2) -> f32 {
        (*other - *self).norm_squared()
    }

    fn normalized_or_zero(&self) -> Vec2 {
        let length = self.norm();
        if length > 0.0 {
            *self / length
        } else {
            Vec2::zeros()
        }
    }

    fn from_degrees(degrees: f32) -> Vec2 {
        let radians = utils::deg_to_rad(degrees);
        Vec2::new(radians.cos(), radians.sin())
    }
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }
}
