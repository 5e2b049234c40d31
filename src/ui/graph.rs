use crate::core::Rgb;
use crate::render::{DrawSurface, Rect, TextStyle};
use crate::ui::theme;
use std::collections::VecDeque;

/// History kept per chart by default, in steps
pub const DEFAULT_CAPACITY: usize = 120;

const GRIDLINES: usize = 4;

/// How a channel is labelled and scaled on screen
#[derive(Debug, Clone)]
pub struct ChannelStyle {
    pub label: String,
    pub color: Rgb,
    /// Value drawn at the top of the inner chart
    pub max_value: f64,
    pub unit: String,
}

impl ChannelStyle {
    pub fn new(label: &str, color: Rgb, max_value: f64, unit: &str) -> Self {
        Self {
            label: label.to_string(),
            color,
            max_value,
            unit: unit.to_string(),
        }
    }
}

/// Fixed-capacity history of one scalar, drawn as a strip chart
///
/// Values above `max_value` are plotted above the inner chart area rather
/// than clamped.
#[derive(Debug, Clone)]
pub struct RollingChannel {
    values: VecDeque<f64>,
    capacity: usize,
    style: ChannelStyle,
}

impl RollingChannel {
    pub fn new(style: ChannelStyle, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            values: VecDeque::with_capacity(capacity),
            capacity,
            style,
        }
    }

    /// Append a value, evicting the oldest once full
    pub fn push(&mut self, value: f64) {
        if self.values.len() == self.capacity {
            self.values.pop_front();
        }
        self.values.push_back(value);
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn latest(&self) -> Option<f64> {
        self.values.back().copied()
    }

    pub fn render(&self, surface: &mut dyn DrawSurface, rect: Rect) {
        let [x, y, w, h] = [rect.left, rect.bottom, rect.width(), rect.height()];
        let style = &self.style;

        surface.fill_rect(rect, theme::PANEL_BG);
        surface.text(&style.label, [x + 8.0, y + h - 22.0], theme::TEXT, TextStyle::bold(11.0));

        if let Some(latest) = self.latest() {
            surface.text(
                &format!("{:.0}{}", latest, style.unit),
                [x + w - 70.0, y + h - 22.0],
                style.color,
                TextStyle::bold(12.0),
            );
        }

        // Inner chart spans y+15 .. y+h-25
        let inner_h = h - 40.0;
        for i in 1..=GRIDLINES {
            let gy = y + 15.0 + inner_h * i as f32 / GRIDLINES as f32;
            surface.line([x + 8.0, gy], [x + w - 8.0, gy], theme::GRID, 1.0);
        }

        if self.values.len() < 2 || style.max_value <= 0.0 {
            return;
        }

        let len = self.values.len() as f32;
        let point = |i: usize, v: f64| {
            [
                x + 10.0 + (w - 20.0) * i as f32 / len,
                y + 15.0 + inner_h * (v / style.max_value) as f32,
            ]
        };

        let mut prev: Option<[f32; 2]> = None;
        for (i, v) in self.values.iter().copied().enumerate() {
            if !v.is_finite() {
                prev = None;
                continue;
            }
            let current = point(i, v);
            if let Some(p) = prev {
                surface.line(p, current, style.color, 2.5);
            }
            prev = Some(current);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::recording::{DrawCall, RecordingSurface};

    impl RollingChannel {
        pub(crate) fn len(&self) -> usize {
            self.values.len()
        }

        pub(crate) fn is_empty(&self) -> bool {
            self.values.is_empty()
        }

        /// Oldest first
        pub(crate) fn values(&self) -> impl Iterator<Item = f64> + '_ {
            self.values.iter().copied()
        }
    }

    fn speed_channel(capacity: usize) -> RollingChannel {
        RollingChannel::new(ChannelStyle::new("SPEED", theme::ACCENT, 360.0, " km/h"), capacity)
    }

    fn chart_lines(surface: &RecordingSurface) -> Vec<([f32; 2], [f32; 2])> {
        surface
            .lines()
            .filter(|&(_, _, color, _)| color == theme::ACCENT)
            .map(|(from, to, _, _)| (from, to))
            .collect()
    }

    #[test]
    fn test_keeps_last_capacity_values() {
        let mut channel = speed_channel(120);
        for v in 0..=150 {
            channel.push(v as f64);
        }

        let values: Vec<f64> = channel.values().collect();
        let expected: Vec<f64> = (31..=150).map(|v| v as f64).collect();
        assert_eq!(values.len(), 120);
        assert_eq!(values, expected);
    }

    #[test]
    fn test_length_is_min_of_pushes_and_capacity() {
        for k in [0, 1, 5, 9, 10, 11, 40] {
            let mut channel = speed_channel(10);
            for v in 0..k {
                channel.push(v as f64);
            }
            assert_eq!(channel.len(), k.min(10));
        }
    }

    #[test]
    fn test_overflow_contents_in_push_order() {
        let mut channel = speed_channel(4);
        for v in [1.0, 2.0, 3.0, 4.0, 5.0, 6.0] {
            channel.push(v);
        }
        assert_eq!(channel.values().collect::<Vec<_>>(), vec![3.0, 4.0, 5.0, 6.0]);
        assert_eq!(channel.latest(), Some(6.0));
    }

    #[test]
    fn test_clear_empties() {
        let mut channel = speed_channel(4);
        channel.push(1.0);
        channel.clear();
        assert!(channel.is_empty());
        assert_eq!(channel.latest(), None);
    }

    #[test]
    fn test_single_point_draws_no_polyline() {
        let mut channel = speed_channel(10);
        channel.push(100.0);

        let mut surface = RecordingSurface::default();
        channel.render(&mut surface, Rect::from_origin(15.0, 636.0, 260.0, 130.0));

        assert!(chart_lines(&surface).is_empty());
        assert_eq!(surface.lines().filter(|l| l.2 == theme::GRID).count(), GRIDLINES);
        assert!(surface.has_text("100 km/h"));
    }

    #[test]
    fn test_polyline_positions() {
        let mut channel = speed_channel(10);
        channel.push(0.0);
        channel.push(180.0);
        channel.push(360.0);

        let mut surface = RecordingSurface::default();
        let rect = Rect::from_origin(0.0, 0.0, 320.0, 140.0);
        channel.render(&mut surface, rect);

        // inner width 300 over 3 points, inner height 100
        let lines = chart_lines(&surface);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], ([10.0, 15.0], [110.0, 65.0]));
        assert_eq!(lines[1], ([110.0, 65.0], [210.0, 115.0]));
    }

    #[test]
    fn test_values_above_max_are_not_clamped() {
        let mut channel = speed_channel(10);
        channel.push(360.0);
        channel.push(720.0);

        let mut surface = RecordingSurface::default();
        let rect = Rect::from_origin(0.0, 0.0, 320.0, 140.0);
        channel.render(&mut surface, rect);

        let (_, end) = chart_lines(&surface)[0];
        assert_eq!(end[1], 215.0);
        assert!(end[1] > rect.top);
    }

    #[test]
    fn test_non_finite_values_break_the_line() {
        let mut channel = speed_channel(10);
        for v in [10.0, 20.0, f64::NAN, 30.0, 40.0] {
            channel.push(v);
        }

        let mut surface = RecordingSurface::default();
        channel.render(&mut surface, Rect::from_origin(0.0, 0.0, 320.0, 140.0));
        assert_eq!(chart_lines(&surface).len(), 2);
    }

    #[test]
    fn test_panel_drawn_first() {
        let channel = speed_channel(10);
        let mut surface = RecordingSurface::default();
        let rect = Rect::from_origin(15.0, 636.0, 260.0, 130.0);
        channel.render(&mut surface, rect);

        assert_eq!(surface.calls[0], DrawCall::Rect(rect, theme::PANEL_BG));
        assert!(surface.has_text("SPEED"));
    }
}
