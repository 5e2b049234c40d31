pub mod clock;
pub mod pacer;

pub use clock::PlaybackClock;
pub use pacer::FramePacer;

/// Playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Running,
    Paused,
}

/// Slowest speed multiplier, in steps per tick
pub const MIN_SPEED: u32 = 1;
/// Fastest speed multiplier, in steps per tick
pub const MAX_SPEED: u32 = 20;
pub const DEFAULT_SPEED: u32 = 3;
