use crate::app::ReplayContext;
use crate::core::{Rgb, Sample};
use crate::render::{DrawSurface, Projection, Rect, TextStyle};
use crate::ui::leaderboard::Leaderboard;
use crate::ui::selection::HitRegionTable;
use crate::ui::theme;
use chrono::Duration;

const TRACK_PADDING: f32 = 60.0;
const TRACK_WIDTH: f32 = 4.0;

const CHART_WIDTH: f32 = 260.0;
const CHART_HEIGHT: f32 = 130.0;
const CHART_GAP: f32 = 14.0;
const CHART_LEFT: f32 = 15.0;
const CHART_COUNT: usize = 4;

/// Where each part of the scene goes on a canvas of a given size
#[derive(Debug, Clone, PartialEq)]
pub struct SceneLayout {
    pub width: f32,
    pub height: f32,
    pub track_panel: Rect,
    pub charts: Vec<Rect>,
    pub leaderboard: Leaderboard,
}

impl SceneLayout {
    pub fn for_canvas(width: f32, height: f32) -> Self {
        let top = height - 120.0;
        let charts = (1..=CHART_COUNT)
            .map(|i| {
                let y = top - (CHART_HEIGHT + CHART_GAP) * i as f32;
                Rect::from_origin(CHART_LEFT, y, CHART_WIDTH, CHART_HEIGHT)
            })
            .collect();

        let board_left = width - 370.0;
        let board_bottom = 60.0;

        Self {
            width,
            height,
            track_panel: Rect::from_origin(300.0, 60.0, width - 700.0, height - 200.0),
            charts,
            leaderboard: Leaderboard::new(
                Rect::from_origin(board_left, board_bottom, 340.0, height - 120.0),
                board_bottom + height - 200.0,
            ),
        }
    }
}

/// Draws one frame of the replay from a read-only context
pub struct SceneComposer {
    layout: SceneLayout,
    subtitle: String,
}

impl SceneComposer {
    pub fn new(layout: SceneLayout, subtitle: impl Into<String>) -> Self {
        Self {
            layout,
            subtitle: subtitle.into(),
        }
    }

    /// Returns the leaderboard hit regions for the next frame's input
    pub fn render(&self, ctx: &ReplayContext, surface: &mut dyn DrawSurface) -> HitRegionTable {
        let projection = Projection::fit(ctx.track_bounds(), self.layout.track_panel, TRACK_PADDING);

        self.draw_track(ctx, surface, &projection);
        self.draw_markers(ctx, surface, &projection);
        ctx.charts().render(surface, &self.layout.charts);

        let regions = self.layout.leaderboard.render(
            surface,
            ctx.registry(),
            ctx.selection().selected(),
        );

        self.draw_header(surface);
        self.draw_status(ctx, surface);
        regions
    }

    fn draw_track(&self, ctx: &ReplayContext, surface: &mut dyn DrawSurface, projection: &Projection) {
        surface.fill_rect(self.layout.track_panel, theme::PANEL_BG);

        let samples = ctx.selected_entity().series.samples();
        for pair in samples.windows(2) {
            if pair[0].has_position() && pair[1].has_position() {
                surface.line(
                    projection.project_point(pair[0].position()),
                    projection.project_point(pair[1].position()),
                    theme::TRACK,
                    TRACK_WIDTH,
                );
            }
        }
    }

    fn draw_markers(&self, ctx: &ReplayContext, surface: &mut dyn DrawSurface, projection: &Projection) {
        let step = ctx.clock().step();
        let selected = ctx.selection().selected();
        let position = |sample: Option<&Sample>| {
            sample
                .filter(|s| s.has_position())
                .map(|s| projection.project_point(s.position()))
        };

        for entity in ctx.registry().iter().filter(|e| e.key() != selected) {
            if let Some(center) = position(entity.series.sample_at(step)) {
                surface.fill_circle(center, 7.0, entity.meta.color);
            }
        }

        // Drawn last so it stays on top of the pack
        if let Some(center) = position(ctx.selected_entity().series.sample_at(step)) {
            surface.fill_circle(center, 14.0, Rgb::WHITE);
            surface.fill_circle(center, 10.0, theme::ACCENT);
        }
    }

    fn draw_header(&self, surface: &mut dyn DrawSurface) {
        let h = self.layout.height;
        surface.text("TRACKSIDE", [20.0, h - 45.0], theme::ACCENT, TextStyle::bold(26.0));
        surface.text(&self.subtitle, [20.0, h - 70.0], theme::TEXT, TextStyle::regular(12.0));
    }

    fn draw_status(&self, ctx: &ReplayContext, surface: &mut dyn DrawSurface) {
        let entity = ctx.selected_entity();
        surface.text(
            &format!("TRACKING: {} ({})", entity.meta.name, entity.key()),
            [300.0, 25.0],
            theme::ACCENT,
            TextStyle::bold(14.0),
        );

        let clock = ctx.clock();
        let mut status = format!("SPEED x{}", clock.speed());
        if !clock.is_running() {
            status.push_str("   PAUSED");
        }
        if let Some(elapsed) = entity.series.sample_clamped(clock.step()).elapsed {
            status.push_str("   ");
            status.push_str(&format_lap_time(elapsed));
        }
        surface.text(
            &status,
            [self.layout.leaderboard.panel.left, 25.0],
            theme::TEXT,
            TextStyle::regular(12.0),
        );
    }
}

/// `m:ss.mmm`
pub fn format_lap_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "-:--.---".to_string();
    }
    let time = Duration::milliseconds((seconds * 1_000.0).round() as i64);
    format!(
        "{}:{:02}.{:03}",
        time.num_minutes(),
        time.num_seconds() % 60,
        time.num_milliseconds() % 1_000
    )
}
