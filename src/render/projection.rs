use crate::core::Bounds;
use crate::render::Rect;

/// Uniform-scale mapping from raw track coordinates into a panel
///
/// One projection is shared by the track outline and every marker in a frame,
/// so all entities land in the same coordinate frame as the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    min_x: f64,
    min_y: f64,
    origin: [f64; 2],
    scale: f64,
}

impl Projection {
    /// Fit `bounds` inside `panel`, leaving `padding` on every side
    pub fn fit(bounds: Bounds, panel: Rect, padding: f32) -> Self {
        let padding = padding as f64;
        let scale_x = axis_scale(panel.width() as f64 - 2.0 * padding, bounds.width());
        let scale_y = axis_scale(panel.height() as f64 - 2.0 * padding, bounds.height());

        // A zero-extent axis places no constraint on the scale
        let scale = match (scale_x, scale_y) {
            (Some(x), Some(y)) => x.min(y),
            (Some(s), None) | (None, Some(s)) => s,
            (None, None) => 1.0,
        };

        Self {
            min_x: bounds.min_x,
            min_y: bounds.min_y,
            origin: [panel.left as f64 + padding, panel.bottom as f64 + padding],
            scale,
        }
    }

    pub fn project(&self, x: f64, y: f64) -> [f32; 2] {
        [
            (self.origin[0] + (x - self.min_x) * self.scale) as f32,
            (self.origin[1] + (y - self.min_y) * self.scale) as f32,
        ]
    }

    pub fn project_point(&self, [x, y]: [f64; 2]) -> [f32; 2] {
        self.project(x, y)
    }
}

fn axis_scale(available: f64, extent: f64) -> Option<f64> {
    (extent > 0.0 && extent.is_finite()).then(|| available / extent)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PANEL: Rect = Rect::new(300.0, 1_000.0, 760.0, 60.0);
    const PADDING: f32 = 60.0;

    fn bounds(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Bounds {
        Bounds {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    fn corners(b: Bounds) -> [[f64; 2]; 4] {
        [
            [b.min_x, b.min_y],
            [b.max_x, b.min_y],
            [b.min_x, b.max_y],
            [b.max_x, b.max_y],
        ]
    }

    #[test]
    fn test_corners_fit_inside_padded_panel() {
        for b in [
            bounds(-8_000.0, 9_000.0, -3_000.0, 2_500.0),
            bounds(0.0, 10.0, 0.0, 400.0),
            bounds(-1.0, 1.0, -1.0, 1.0),
        ] {
            let projection = Projection::fit(b, PANEL, PADDING);
            for corner in corners(b) {
                let [x, y] = projection.project_point(corner);
                assert!(x >= PANEL.left + PADDING - 1e-3 && x <= PANEL.right - PADDING + 1e-3);
                assert!(y >= PANEL.bottom + PADDING - 1e-3 && y <= PANEL.top - PADDING + 1e-3);
            }
        }
    }

    #[test]
    fn test_uses_smaller_axis_scale() {
        // x extent 2000 over 580px, y extent 1000 over 580px
        let projection = Projection::fit(bounds(0.0, 2_000.0, 0.0, 1_000.0), PANEL, PADDING);
        assert!((projection.scale - 0.29).abs() < 1e-9);

        let [x0, y0] = projection.project(0.0, 0.0);
        let [x1, y1] = projection.project(2_000.0, 1_000.0);
        let ratio = (x1 - x0) / (y1 - y0);
        assert!((ratio - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_min_corner_maps_to_padded_origin() {
        let projection = Projection::fit(bounds(-500.0, 500.0, 20.0, 80.0), PANEL, PADDING);
        assert_eq!(projection.project(-500.0, 20.0), [360.0, 120.0]);
    }

    #[test]
    fn test_zero_width_falls_back_to_height_scale() {
        let projection = Projection::fit(bounds(5.0, 5.0, 0.0, 58.0), PANEL, PADDING);
        assert!((projection.scale - 10.0).abs() < 1e-9);
        assert_eq!(projection.project(5.0, 58.0), [360.0, 700.0]);
    }

    #[test]
    fn test_zero_height_falls_back_to_width_scale() {
        let projection = Projection::fit(bounds(0.0, 290.0, 3.0, 3.0), PANEL, PADDING);
        assert!((projection.scale - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_point_uses_unit_scale() {
        let projection = Projection::fit(bounds(7.0, 7.0, 7.0, 7.0), PANEL, PADDING);
        assert_eq!(projection.scale, 1.0);
        assert_eq!(projection.project(7.0, 7.0), [360.0, 120.0]);
    }
}
