use crate::core::LoadError;
use serde::{Deserialize, Serialize};

/// Scalar fields carried by every telemetry sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    X,
    Y,
    Speed,
    Throttle,
    Brake,
    Gear,
}

impl Channel {
    pub const ALL: [Channel; 6] = [
        Channel::X,
        Channel::Y,
        Channel::Speed,
        Channel::Throttle,
        Channel::Brake,
        Channel::Gear,
    ];

    /// Column name used by recorded telemetry tables
    pub fn column_name(self) -> &'static str {
        match self {
            Channel::X => "X",
            Channel::Y => "Y",
            Channel::Speed => "Speed",
            Channel::Throttle => "Throttle",
            Channel::Brake => "Brake",
            Channel::Gear => "nGear",
        }
    }
}

/// One telemetry record
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    pub speed: f64,
    pub throttle: f64,
    pub brake: f64,
    pub gear: f64,
    /// Seconds since the start of the recording, when the source has it
    pub elapsed: Option<f64>,
}

impl Sample {
    pub fn channel(&self, channel: Channel) -> f64 {
        match channel {
            Channel::X => self.x,
            Channel::Y => self.y,
            Channel::Speed => self.speed,
            Channel::Throttle => self.throttle,
            Channel::Brake => self.brake,
            Channel::Gear => self.gear,
        }
    }

    pub fn set_channel(&mut self, channel: Channel, value: f64) {
        match channel {
            Channel::X => self.x = value,
            Channel::Y => self.y = value,
            Channel::Speed => self.speed = value,
            Channel::Throttle => self.throttle = value,
            Channel::Brake => self.brake = value,
            Channel::Gear => self.gear = value,
        }
    }

    pub fn position(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    pub fn has_position(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Axis-aligned extent of a set of raw coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Extent of the finite points; `None` when there are none
    pub fn of_points(points: impl IntoIterator<Item = [f64; 2]>) -> Option<Self> {
        points
            .into_iter()
            .filter(|[x, y]| x.is_finite() && y.is_finite())
            .fold(None, |acc: Option<Bounds>, [x, y]| {
                Some(match acc {
                    None => Bounds {
                        min_x: x,
                        max_x: x,
                        min_y: y,
                        max_y: y,
                    },
                    Some(b) => Bounds {
                        min_x: b.min_x.min(x),
                        max_x: b.max_x.max(x),
                        min_y: b.min_y.min(y),
                        max_y: b.max_y.max(y),
                    },
                })
            })
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Ordered telemetry of one entity. Immutable once built, never empty.
#[derive(Debug, Clone)]
pub struct SampleSeries {
    samples: Vec<Sample>,
    bounds: Bounds,
}

impl SampleSeries {
    pub fn new(samples: Vec<Sample>) -> Result<Self, LoadError> {
        if samples.is_empty() {
            return Err(LoadError::EmptySeries);
        }
        let bounds = Bounds::of_points(samples.iter().map(Sample::position))
            .ok_or(LoadError::NoPositions)?;

        Ok(Self { samples, bounds })
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Sample at `step`; `None` past the end
    pub fn sample_at(&self, step: usize) -> Option<&Sample> {
        self.samples.get(step)
    }

    /// Sample at `step`, holding on the last one once the series has run out
    pub fn sample_clamped(&self, step: usize) -> &Sample {
        let last = self.samples.len() - 1;
        &self.samples[step.min(last)]
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Full-range extent of the finite positions
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}
