use crate::core::EntityKey;
use crate::render::Rect;
use crate::ui::channels::ChannelBank;
use tracing::info;

/// Clickable screen regions recorded while drawing, in display order
#[derive(Debug, Clone, Default)]
pub struct HitRegionTable {
    regions: Vec<(EntityKey, Rect)>,
}

impl HitRegionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: EntityKey, rect: Rect) {
        self.regions.push((key, rect));
    }

    /// First region containing the point
    pub fn hit_test(&self, x: f32, y: f32) -> Option<&EntityKey> {
        self.regions
            .iter()
            .find(|(_, rect)| rect.contains([x, y]))
            .map(|(key, _)| key)
    }
}

/// Focused entity plus the regions that can change it
///
/// Regions come from the previous frame's render; a click is always tested
/// against what was on screen when the user clicked.
#[derive(Debug, Clone)]
pub struct SelectionController {
    selected: EntityKey,
    regions: HitRegionTable,
}

impl SelectionController {
    pub fn new(selected: EntityKey) -> Self {
        Self {
            selected,
            regions: HitRegionTable::new(),
        }
    }

    pub fn selected(&self) -> &EntityKey {
        &self.selected
    }

    pub fn set_regions(&mut self, regions: HitRegionTable) {
        self.regions = regions;
    }

    pub fn hit_test(&self, x: f32, y: f32) -> Option<&EntityKey> {
        self.regions.hit_test(x, y)
    }

    /// Focus `key`, clearing chart history. Returns false if it was already
    /// selected, in which case nothing changes.
    pub fn select(&mut self, key: &EntityKey, charts: &mut ChannelBank) -> bool {
        if *key == self.selected {
            return false;
        }

        info!("Selected {} (was {})", key, self.selected);
        self.selected = key.clone();
        charts.clear_all();
        true
    }
}
