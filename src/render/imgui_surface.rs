use crate::core::Rgb;
use crate::render::{DrawSurface, Rect, TextStyle};
use imgui::{DrawListMut, FontConfig, FontId, FontSource, Ui};

/// Default font rasterised at each size the scene asks for
#[derive(Debug, Clone, Default)]
pub struct FontTable {
    fonts: Vec<(f32, FontId)>,
}

impl FontTable {
    pub const SIZES: [f32; 5] = [10.0, 11.0, 12.0, 14.0, 26.0];

    /// Add one atlas font per size. Must run before the renderer builds the atlas.
    pub fn load(imgui: &mut imgui::Context, hidpi_factor: f64) -> Self {
        let fonts = Self::SIZES
            .iter()
            .map(|&size| {
                let id = imgui.fonts().add_font(&[FontSource::DefaultFontData {
                    config: Some(FontConfig {
                        size_pixels: (size as f64 * hidpi_factor) as f32,
                        ..FontConfig::default()
                    }),
                }]);
                (size, id)
            })
            .collect();
        Self { fonts }
    }

    pub fn nearest(&self, size: f32) -> Option<FontId> {
        self.fonts
            .iter()
            .min_by(|(a, _), (b, _)| (a - size).abs().total_cmp(&(b - size).abs()))
            .map(|&(_, id)| id)
    }
}

/// Draws into the imgui background list, flipping canvas space (y up) to
/// screen space (y down)
pub struct ImguiSurface<'ui> {
    ui: &'ui Ui,
    draw_list: DrawListMut<'ui>,
    fonts: &'ui FontTable,
    canvas_height: f32,
}

impl<'ui> ImguiSurface<'ui> {
    pub fn new(ui: &'ui Ui, fonts: &'ui FontTable, canvas_height: f32) -> Self {
        Self {
            ui,
            draw_list: ui.get_background_draw_list(),
            fonts,
            canvas_height,
        }
    }

    fn to_screen(&self, [x, y]: [f32; 2]) -> [f32; 2] {
        [x, self.canvas_height - y]
    }
}

impl DrawSurface for ImguiSurface<'_> {
    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        let min = self.to_screen([rect.left, rect.top]);
        let max = self.to_screen([rect.right, rect.bottom]);
        self.draw_list
            .add_rect(min, max, color.to_rgba())
            .filled(true)
            .build();
    }

    fn line(&mut self, from: [f32; 2], to: [f32; 2], color: Rgb, width: f32) {
        let from = self.to_screen(from);
        let to = self.to_screen(to);
        self.draw_list
            .add_line(from, to, color.to_rgba())
            .thickness(width)
            .build();
    }

    fn fill_circle(&mut self, center: [f32; 2], radius: f32, color: Rgb) {
        let center = self.to_screen(center);
        self.draw_list
            .add_circle(center, radius, color.to_rgba())
            .filled(true)
            .build();
    }

    fn text(&mut self, text: &str, [x, y]: [f32; 2], color: Rgb, style: TextStyle) {
        let _font = self.fonts.nearest(style.size).map(|id| self.ui.push_font(id));
        let pos = self.to_screen([x, y + style.size]);
        let rgba = color.to_rgba();

        self.draw_list.add_text(pos, rgba, text);
        if style.bold {
            // Double strike; the default font has no bold face
            self.draw_list.add_text([pos[0] + 1.0, pos[1]], rgba, text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table_has_no_font() {
        assert!(FontTable::default().nearest(12.0).is_none());
    }

    #[test]
    fn test_nearest_size() {
        let mut imgui = imgui::Context::create();
        let table = FontTable::load(&mut imgui, 1.0);

        assert_eq!(table.nearest(12.0), Some(table.fonts[2].1));
        assert_eq!(table.nearest(13.0), Some(table.fonts[2].1));
        assert_eq!(table.nearest(20.0), Some(table.fonts[3].1));
        assert_eq!(table.nearest(40.0), Some(table.fonts[4].1));
    }
}
