pub mod imgui_surface;
pub mod projection;
#[cfg(test)]
pub mod recording;

pub use imgui_surface::{FontTable, ImguiSurface};
pub use projection::Projection;

use crate::core::Rgb;

/// Axis-aligned rectangle in canvas space (origin bottom-left, y grows upward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Rect {
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Rectangle whose bottom-left corner is `(x, y)`
    pub fn from_origin(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(x, x + width, y + height, y)
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }

    /// Edges are inclusive
    pub fn contains(&self, [x, y]: [f32; 2]) -> bool {
        self.left <= x && x <= self.right && self.bottom <= y && y <= self.top
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub bold: bool,
}

impl TextStyle {
    pub const fn regular(size: f32) -> Self {
        Self { size, bold: false }
    }

    pub const fn bold(size: f32) -> Self {
        Self { size, bold: true }
    }
}

/// Primitive drawing operations the scene is built from
///
/// Coordinates are canvas space. Text is anchored at its bottom-left corner.
pub trait DrawSurface {
    fn fill_rect(&mut self, rect: Rect, color: Rgb);

    fn line(&mut self, from: [f32; 2], to: [f32; 2], color: Rgb, width: f32);

    fn fill_circle(&mut self, center: [f32; 2], radius: f32, color: Rgb);

    fn text(&mut self, text: &str, at: [f32; 2], color: Rgb, style: TextStyle);
}
