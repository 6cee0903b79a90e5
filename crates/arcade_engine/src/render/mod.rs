//! Presentation surface abstraction
//!
//! Games push a complete frame into a [`Surface`] once per frame: clear, background,
//! shapes, text, then [`Surface::display`]. The only thing a game reads back is the
//! surface size.

pub mod headless;

pub use headless::{FrameRecord, HeadlessSurface};

use crate::foundation::math::Vec2;
use std::path::Path;
use thiserror::Error;

/// RGBA color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel (255 = opaque)
    pub a: u8,
}

impl Color {
    /// Opaque white
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Opaque black
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Create an opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with an explicit alpha
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color channels with a different alpha
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::rgb(r, g, b)
    }
}

/// A regular polygon (or circle approximation) to draw
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeDraw {
    /// Center in surface pixels
    pub position: Vec2,
    /// Rotation around the center in degrees
    pub rotation_degrees: f32,
    /// Circumscribed radius
    pub radius: f32,
    /// Number of polygon vertices
    pub point_count: u32,
    /// Fill color
    pub fill: Color,
    /// Outline color
    pub outline: Color,
    /// Outline thickness in pixels
    pub outline_thickness: f32,
}

/// Presentation resource errors
///
/// These are never fatal to a game: a failed load degrades presentation only.
#[derive(Error, Debug)]
pub enum SurfaceError {
    /// File not found or unreadable
    #[error("Missing resource: {0}")]
    Missing(String),

    /// File present but could not be decoded
    #[error("Could not decode {path}: {reason}")]
    Decode {
        /// Resource path
        path: String,
        /// Decoder message
        reason: String,
    },
}

/// A render target the game pushes frames into
pub trait Surface {
    /// Drawable size in pixels (width, height)
    fn size(&self) -> (u32, u32);

    /// Load a background image stretched over the whole surface
    fn load_background(&mut self, path: &Path) -> Result<(), SurfaceError>;

    /// Load the font used by [`Surface::draw_text`]
    fn load_font(&mut self, path: &Path, size: u32, color: Color) -> Result<(), SurfaceError>;

    /// Start a new frame
    fn clear(&mut self);

    /// Draw the background image, if one is loaded
    fn draw_background(&mut self);

    /// Draw one shape
    fn draw_shape(&mut self, shape: &ShapeDraw);

    /// Draw a line of text in the top-left corner
    fn draw_text(&mut self, text: &str);

    /// Present the finished frame
    fn display(&mut self);
}
