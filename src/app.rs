use crate::core::{Bounds, Entity, EntityKey, EntityRegistry};
use crate::playback::{PlaybackClock, PlaybackState};
use crate::ui::graph::DEFAULT_CAPACITY;
use crate::ui::{ChannelBank, HitRegionTable, SelectionController};
use tracing::{debug, info, warn};

/// Input applied between frames
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    TogglePause,
    SpeedUp,
    SpeedDown,
    /// Left button press in canvas coordinates
    PointerPress { x: f32, y: f32 },
}

/// Everything the update and render passes share
///
/// `update` is the only place time advances and charts are fed; rendering
/// reads the context and hands back the hit regions it laid out.
pub struct ReplayContext {
    registry: EntityRegistry,
    clock: PlaybackClock,
    selection: SelectionController,
    charts: ChannelBank,
    track_bounds: Bounds,
}

impl ReplayContext {
    pub fn new(registry: EntityRegistry, preferred: &str) -> Self {
        let selected = registry.initial_selection(preferred);
        let track_bounds = registry
            .get(selected.as_str())
            .unwrap_or_else(|| registry.first())
            .series
            .bounds();
        info!("Tracking {}", selected);

        Self {
            clock: PlaybackClock::new(registry.max_len()),
            selection: SelectionController::new(selected),
            charts: ChannelBank::standard(DEFAULT_CAPACITY),
            track_bounds,
            registry,
        }
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    pub fn clock(&self) -> &PlaybackClock {
        &self.clock
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    pub fn charts(&self) -> &ChannelBank {
        &self.charts
    }

    /// Extent of the selected entity's full path
    pub fn track_bounds(&self) -> Bounds {
        self.track_bounds
    }

    pub fn selected_entity(&self) -> &Entity {
        self.registry
            .get(self.selection.selected().as_str())
            .unwrap_or_else(|| self.registry.first())
    }

    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::TogglePause => {
                let state = self.clock.toggle_pause();
                info!(
                    "Playback {} at step {}",
                    if state == PlaybackState::Paused { "paused" } else { "resumed" },
                    self.clock.step()
                );
            }
            InputEvent::SpeedUp => {
                let speed = self.clock.speed_up();
                debug!("Speed x{}", speed);
            }
            InputEvent::SpeedDown => {
                let speed = self.clock.speed_down();
                debug!("Speed x{}", speed);
            }
            InputEvent::PointerPress { x, y } => {
                if let Some(key) = self.selection.hit_test(x, y).cloned() {
                    self.select(&key);
                }
            }
        }
    }

    /// Focus another entity. Chart history restarts and the track is refit to
    /// the new entity's path.
    pub fn select(&mut self, key: &EntityKey) -> bool {
        let Some(entity) = self.registry.get(key.as_str()) else {
            debug_assert!(false, "selected unknown entity {key}");
            warn!("Ignoring selection of unknown entity {}", key);
            return false;
        };
        let bounds = entity.series.bounds();

        if !self.selection.select(key, &mut self.charts) {
            return false;
        }
        self.track_bounds = bounds;
        true
    }

    /// One frame of simulated time: advance the clock, then feed the charts
    /// from the selected entity at the new step
    pub fn update(&mut self) {
        let step = self.clock.tick();
        let sample = *self.selected_entity().series.sample_clamped(step);
        self.charts.push_sample(&sample);
    }

    /// Regions laid out by the last render, used by the next pointer press
    pub fn set_hit_regions(&mut self, regions: HitRegionTable) {
        self.selection.set_regions(regions);
    }
}
