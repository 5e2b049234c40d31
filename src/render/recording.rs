//! Surface that records draw calls, for scene tests

use crate::core::Rgb;
use crate::render::{DrawSurface, Rect, TextStyle};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Rect(Rect, Rgb),
    Line([f32; 2], [f32; 2], Rgb, f32),
    Circle([f32; 2], f32, Rgb),
    Text(String, [f32; 2], Rgb, TextStyle),
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn lines(&self) -> impl Iterator<Item = ([f32; 2], [f32; 2], Rgb, f32)> + '_ {
        self.calls.iter().filter_map(|call| match *call {
            DrawCall::Line(from, to, color, width) => Some((from, to, color, width)),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = ([f32; 2], f32, Rgb)> + '_ {
        self.calls.iter().filter_map(|call| match *call {
            DrawCall::Circle(center, radius, color) => Some((center, radius, color)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Text(text, ..) => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().any(|text| text.contains(needle))
    }
}

impl DrawSurface for RecordingSurface {
    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        self.calls.push(DrawCall::Rect(rect, color));
    }

    fn line(&mut self, from: [f32; 2], to: [f32; 2], color: Rgb, width: f32) {
        self.calls.push(DrawCall::Line(from, to, color, width));
    }

    fn fill_circle(&mut self, center: [f32; 2], radius: f32, color: Rgb) {
        self.calls.push(DrawCall::Circle(center, radius, color));
    }

    fn text(&mut self, text: &str, at: [f32; 2], color: Rgb, style: TextStyle) {
        self.calls.push(DrawCall::Text(text.to_string(), at, color, style));
    }
}
