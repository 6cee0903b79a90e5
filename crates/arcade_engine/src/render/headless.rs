//! Window-less surface
//!
//! Records what each frame drew instead of rasterizing it. Used by the headless
//! binary and by tests that need to inspect presented frames.

use super::{Color, ShapeDraw, Surface, SurfaceError};
use crate::foundation::time::FrameLimiter;
use std::path::Path;

/// Everything drawn between one `clear` and the following `display`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameRecord {
    /// Whether `clear` started this frame
    pub cleared: bool,
    /// Whether a loaded background was drawn
    pub background: bool,
    /// Shapes in draw order
    pub shapes: Vec<ShapeDraw>,
    /// Text lines in draw order
    pub text: Vec<String>,
}

#[derive(Debug, Clone)]
struct Background {
    scale: (f32, f32),
}

#[derive(Debug, Clone)]
struct Font {
    size: u32,
    color: Color,
}

/// Surface that keeps the last presented frame in memory
pub struct HeadlessSurface {
    width: u32,
    height: u32,
    limiter: FrameLimiter,
    background: Option<Background>,
    font: Option<Font>,
    current: FrameRecord,
    last_presented: FrameRecord,
    presented: u64,
}

impl HeadlessSurface {
    /// Create an unpaced surface of the given size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            limiter: FrameLimiter::unlimited(),
            background: None,
            font: None,
            current: FrameRecord::default(),
            last_presented: FrameRecord::default(),
            presented: 0,
        }
    }

    /// Pace `display` calls to at most `frames_per_second` (0 = unlimited)
    #[must_use]
    pub fn with_frame_limit(mut self, frames_per_second: u32) -> Self {
        self.limiter = FrameLimiter::new(frames_per_second);
        self
    }

    /// The most recently presented frame
    pub fn last_frame(&self) -> &FrameRecord {
        &self.last_presented
    }

    /// Number of frames presented so far
    pub fn presented_frames(&self) -> u64 {
        self.presented
    }

    /// Background stretch factors, if a background is loaded
    pub fn background_scale(&self) -> Option<(f32, f32)> {
        self.background.as_ref().map(|bg| bg.scale)
    }

    /// Loaded font size and color, if any
    pub fn font(&self) -> Option<(u32, Color)> {
        self.font.as_ref().map(|font| (font.size, font.color))
    }
}

impl Surface for HeadlessSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn load_background(&mut self, path: &Path) -> Result<(), SurfaceError> {
        if !path.is_file() {
            return Err(SurfaceError::Missing(path.display().to_string()));
        }
        let (image_width, image_height) =
            image::image_dimensions(path).map_err(|e| SurfaceError::Decode {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        let scale = (
            self.width as f32 / image_width as f32,
            self.height as f32 / image_height as f32,
        );
        log::debug!(
            "HeadlessSurface: background {}x{} scaled by {:?}",
            image_width,
            image_height,
            scale
        );
        self.background = Some(Background { scale });
        Ok(())
    }

    fn load_font(&mut self, path: &Path, size: u32, color: Color) -> Result<(), SurfaceError> {
        std::fs::metadata(path)
            .ok()
            .filter(std::fs::Metadata::is_file)
            .ok_or_else(|| SurfaceError::Missing(path.display().to_string()))?;
        self.font = Some(Font { size, color });
        Ok(())
    }

    fn clear(&mut self) {
        self.current = FrameRecord {
            cleared: true,
            ..FrameRecord::default()
        };
    }

    fn draw_background(&mut self) {
        self.current.background = self.background.is_some();
    }

    fn draw_shape(&mut self, shape: &ShapeDraw) {
        self.current.shapes.push(shape.clone());
    }

    fn draw_text(&mut self, text: &str) {
        self.current.text.push(text.to_string());
    }

    fn display(&mut self) {
        self.last_presented = std::mem::take(&mut self.current);
        self.presented += 1;
        log::trace!(
            "HeadlessSurface: presented frame {} ({} shapes)",
            self.presented,
            self.last_presented.shapes.len()
        );
        self.limiter.wait();
    }
}
