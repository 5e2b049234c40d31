use crate::playback::{PlaybackState, DEFAULT_SPEED, MAX_SPEED, MIN_SPEED};
use tracing::debug;

/// Shared step index driving every series at once
///
/// The replay never ends: once the step reaches the longest series' length it
/// restarts from zero.
#[derive(Debug, Clone)]
pub struct PlaybackClock {
    step: usize,
    speed: u32,
    state: PlaybackState,
    max_len: usize,
}

impl PlaybackClock {
    pub fn new(max_len: usize) -> Self {
        Self {
            step: 0,
            speed: DEFAULT_SPEED,
            state: PlaybackState::Running,
            max_len,
        }
    }

    /// Get current step
    pub fn step(&self) -> usize {
        self.step
    }

    /// Get current speed multiplier
    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn is_running(&self) -> bool {
        self.state == PlaybackState::Running
    }

    /// Flip between running and paused
    pub fn toggle_pause(&mut self) -> PlaybackState {
        self.state = match self.state {
            PlaybackState::Running => PlaybackState::Paused,
            PlaybackState::Paused => PlaybackState::Running,
        };
        debug!("Playback {:?} at step {}", self.state, self.step);
        self.state
    }

    /// Set speed, clamped to the supported range
    pub fn set_speed(&mut self, speed: u32) {
        self.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
    }

    pub fn speed_up(&mut self) -> u32 {
        self.set_speed(self.speed.saturating_add(1));
        self.speed
    }

    pub fn speed_down(&mut self) -> u32 {
        self.set_speed(self.speed.saturating_sub(1));
        self.speed
    }

    /// Advance one simulated tick (call once per frame)
    pub fn tick(&mut self) -> usize {
        if self.state == PlaybackState::Running {
            self.step += self.speed as usize;
            if self.step >= self.max_len {
                self.step = 0;
            }
        }
        self.step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let clock = PlaybackClock::new(100);
        assert_eq!(clock.step(), 0);
        assert_eq!(clock.speed(), 3);
        assert!(clock.is_running());
    }

    #[test]
    fn test_wraps_to_zero_not_remainder() {
        let mut clock = PlaybackClock::new(10);
        let steps: Vec<usize> = (0..4).map(|_| clock.tick()).collect();
        assert_eq!(steps, vec![3, 6, 9, 0]);
    }

    #[test]
    fn test_step_stays_in_range() {
        for max_len in [1, 2, 7, 50, 333] {
            for speed in MIN_SPEED..=MAX_SPEED {
                let mut clock = PlaybackClock::new(max_len);
                clock.set_speed(speed);
                for _ in 0..1_000 {
                    let step = clock.tick();
                    assert!(step < max_len, "step {step} escaped max_len {max_len}");
                }
            }
        }
    }

    #[test]
    fn test_paused_clock_holds_step() {
        let mut clock = PlaybackClock::new(100);
        clock.tick();
        assert_eq!(clock.toggle_pause(), PlaybackState::Paused);
        assert_eq!(clock.tick(), 3);
        assert_eq!(clock.tick(), 3);

        assert_eq!(clock.toggle_pause(), PlaybackState::Running);
        assert_eq!(clock.tick(), 6);
    }

    #[test]
    fn test_speed_is_clamped() {
        let mut clock = PlaybackClock::new(100);
        for _ in 0..50 {
            clock.speed_up();
        }
        assert_eq!(clock.speed(), MAX_SPEED);

        for _ in 0..50 {
            clock.speed_down();
        }
        assert_eq!(clock.speed(), MIN_SPEED);

        clock.set_speed(0);
        assert_eq!(clock.speed(), MIN_SPEED);
    }

    #[test]
    fn test_speed_changes_while_paused() {
        let mut clock = PlaybackClock::new(100);
        clock.toggle_pause();
        assert_eq!(clock.speed_up(), 4);
        assert_eq!(clock.tick(), 0);
        clock.toggle_pause();
        assert_eq!(clock.tick(), 4);
    }
}
