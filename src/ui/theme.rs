use crate::core::Rgb;

pub const BG: Rgb = Rgb::new(15, 15, 20);
pub const PANEL_BG: Rgb = Rgb::new(25, 25, 35);
pub const ACCENT: Rgb = Rgb::new(0, 255, 150);
pub const TEXT: Rgb = Rgb::new(220, 220, 220);
pub const GRID: Rgb = Rgb::new(60, 60, 70);

pub const TRACK: Rgb = Rgb::new(80, 80, 90);
pub const ROW_HIGHLIGHT: Rgb = Rgb::new(45, 45, 60);

pub const THROTTLE: Rgb = Rgb::new(90, 220, 120);
pub const BRAKE: Rgb = Rgb::new(240, 90, 90);
pub const GEAR: Rgb = Rgb::new(240, 200, 80);

/// Clear colour for the GL framebuffer
pub fn clear_color() -> [f32; 4] {
    BG.to_rgba()
}
