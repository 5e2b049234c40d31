use crate::core::{Channel, Sample};
use crate::render::{DrawSurface, Rect};
use crate::ui::graph::{ChannelStyle, RollingChannel};
use crate::ui::theme;

/// The strip charts shown for the selected entity, top to bottom
#[derive(Debug, Clone)]
pub struct ChannelBank {
    charts: Vec<(Channel, RollingChannel)>,
}

impl ChannelBank {
    /// Speed, throttle, brake and gear
    pub fn standard(capacity: usize) -> Self {
        let chart = |label, color, max_value, unit| {
            RollingChannel::new(ChannelStyle::new(label, color, max_value, unit), capacity)
        };
        Self {
            charts: vec![
                (Channel::Speed, chart("SPEED", theme::ACCENT, 360.0, " km/h")),
                (Channel::Throttle, chart("THROTTLE", theme::THROTTLE, 100.0, "%")),
                (Channel::Brake, chart("BRAKE", theme::BRAKE, 100.0, "%")),
                (Channel::Gear, chart("GEAR", theme::GEAR, 8.0, "")),
            ],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &RollingChannel> + '_ {
        self.charts.iter().map(|(_, chart)| chart)
    }

    /// Feed one sample into every chart
    pub fn push_sample(&mut self, sample: &Sample) {
        for (channel, chart) in &mut self.charts {
            chart.push(sample.channel(*channel));
        }
    }

    pub fn clear_all(&mut self) {
        for (_, chart) in &mut self.charts {
            chart.clear();
        }
    }

    /// Draw chart `i` into `rects[i]`; extra charts or rects are ignored
    pub fn render(&self, surface: &mut dyn DrawSurface, rects: &[Rect]) {
        for (chart, rect) in self.iter().zip(rects) {
            chart.render(surface, *rect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::recording::RecordingSurface;

    impl ChannelBank {
        pub(crate) fn get(&self, channel: Channel) -> Option<&RollingChannel> {
            self.charts
                .iter()
                .find(|(c, _)| *c == channel)
                .map(|(_, chart)| chart)
        }
    }

    fn sample(speed: f64, gear: f64) -> Sample {
        Sample {
            speed,
            throttle: 80.0,
            brake: 0.0,
            gear,
            ..Sample::default()
        }
    }

    #[test]
    fn test_push_routes_each_channel() {
        let mut bank = ChannelBank::standard(10);
        bank.push_sample(&sample(250.0, 7.0));

        assert_eq!(bank.iter().count(), 4);
        assert_eq!(bank.get(Channel::Speed).unwrap().latest(), Some(250.0));
        assert_eq!(bank.get(Channel::Throttle).unwrap().latest(), Some(80.0));
        assert_eq!(bank.get(Channel::Brake).unwrap().latest(), Some(0.0));
        assert_eq!(bank.get(Channel::Gear).unwrap().latest(), Some(7.0));
        assert!(bank.get(Channel::X).is_none());
    }

    #[test]
    fn test_clear_all() {
        let mut bank = ChannelBank::standard(10);
        for i in 0..5 {
            bank.push_sample(&sample(i as f64, 3.0));
        }
        bank.clear_all();
        assert!(bank.iter().all(RollingChannel::is_empty));
    }

    #[test]
    fn test_render_one_panel_per_rect() {
        let bank = ChannelBank::standard(10);
        let rects = [
            Rect::from_origin(0.0, 0.0, 100.0, 100.0),
            Rect::from_origin(0.0, 200.0, 100.0, 100.0),
        ];

        let mut surface = RecordingSurface::default();
        bank.render(&mut surface, &rects);

        assert!(surface.has_text("SPEED"));
        assert!(surface.has_text("THROTTLE"));
        assert!(!surface.has_text("BRAKE"));
    }
}
