use crate::core::{EntityKey, EntityRegistry};
use crate::render::{DrawSurface, Rect, TextStyle};
use crate::ui::selection::HitRegionTable;
use crate::ui::theme;

const ROW_HEIGHT: f32 = 32.0;
const ROW_RISE: f32 = 22.0;
const ROW_DROP: f32 = 5.0;

/// Standings panel: one clickable row per entity in registry order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leaderboard {
    pub panel: Rect,
    /// Baseline of the first row
    pub first_row: f32,
}

impl Leaderboard {
    pub fn new(panel: Rect, first_row: f32) -> Self {
        Self { panel, first_row }
    }

    pub fn row_baseline(&self, index: usize) -> f32 {
        self.first_row - index as f32 * ROW_HEIGHT
    }

    /// Clickable area of row `index`
    pub fn row_region(&self, index: usize) -> Rect {
        let y = self.row_baseline(index);
        Rect::new(self.panel.left, self.panel.right, y + ROW_RISE, y - ROW_DROP)
    }

    pub fn render(
        &self,
        surface: &mut dyn DrawSurface,
        registry: &EntityRegistry,
        selected: &EntityKey,
    ) -> HitRegionTable {
        let left = self.panel.left;
        surface.fill_rect(self.panel, theme::PANEL_BG);
        surface.text(
            "STANDINGS",
            [left + 10.0, self.panel.top - 40.0],
            theme::TEXT,
            TextStyle::bold(14.0),
        );

        let mut regions = HitRegionTable::new();
        for (i, entity) in registry.iter().enumerate() {
            let y = self.row_baseline(i);
            let region = self.row_region(i);
            let is_selected = entity.key() == selected;

            if is_selected {
                surface.fill_rect(region, theme::ROW_HIGHLIGHT);
            }
            surface.text(
                entity.key().as_str(),
                [left + 15.0, y],
                if is_selected { theme::ACCENT } else { theme::TEXT },
                TextStyle::bold(12.0),
            );
            surface.text(&entity.meta.name, [left + 60.0, y], theme::TEXT, TextStyle::regular(10.0));

            regions.push(entity.key().clone(), region);
        }
        regions
    }
}
