use crate::core::{Entity, EntityLoad, EntityMeta, LoadError, LoadFailure, Rgb, Sample};
use crate::input::{DataProvider, SessionRequest};
use std::f64::consts::TAU;

/// Samples in the fastest lap of the field
const BASE_SAMPLES: usize = 720;
/// Lap time matching `BASE_SAMPLES`, in seconds
const BASE_LAP_SECS: f64 = 88.0;

const GRID: &[(&str, &str, &str, f64)] = &[
    ("VER", "Max Verstappen", "3671C6", 1.000),
    ("NOR", "Lando Norris", "FF8000", 1.004),
    ("HAM", "Lewis Hamilton", "27F4D2", 1.007),
    ("PIA", "Oscar Piastri", "FF8000", 1.009),
    ("RUS", "George Russell", "27F4D2", 1.012),
    ("LEC", "Charles Leclerc", "E8002D", 1.015),
    ("SAI", "Carlos Sainz", "E8002D", 1.018),
    ("ALO", "Fernando Alonso", "229971", 1.024),
    ("ALB", "Alexander Albon", "64C4FF", 1.031),
    ("GAS", "Pierre Gasly", "FF87BC", 1.037),
];

/// Procedural session for running without recorded data
///
/// Every entity drives the same closed circuit starting from the line; slower
/// pace factors produce longer series, so the field spreads out and shorter
/// series finish before the replay wraps.
#[derive(Debug, Default)]
pub struct DemoProvider;

impl DemoProvider {
    pub fn new() -> Self {
        Self
    }
}

impl DataProvider for DemoProvider {
    fn name(&self) -> &str {
        "demo circuit"
    }

    fn load_session(&self, _request: &SessionRequest) -> Result<Vec<EntityLoad>, LoadError> {
        Ok(GRID
            .iter()
            .map(|&(key, name, color, pace)| {
                let meta = EntityMeta::new(key, name, Rgb::from_hex_or_white(color));
                Entity::new(meta, lap(pace)).map_err(|e| LoadFailure::new(key, e))
            })
            .collect())
    }
}

/// One lap at `pace` (1.0 = fastest)
fn lap(pace: f64) -> Vec<Sample> {
    let samples = (BASE_SAMPLES as f64 * pace).round() as usize;
    let dt = BASE_LAP_SECS * pace / samples as f64;

    (0..samples)
        .map(|i| {
            let t = i as f64 / samples as f64 * TAU;
            let [x, y] = circuit(t);
            let speed = corner_speed(t) / pace;
            let accelerating = corner_speed(t + 0.01) >= corner_speed(t);
            let throttle = if accelerating { 100.0 } else { (speed - 90.0).clamp(0.0, 60.0) };
            let brake = if accelerating { 0.0 } else { 100.0 };
            let gear = (speed / 42.0).ceil().clamp(1.0, 8.0);

            Sample {
                x,
                y,
                speed,
                throttle,
                brake,
                gear,
                elapsed: Some(i as f64 * dt),
            }
        })
        .collect()
}

/// Track position in raw (meter-like) coordinates
fn circuit(t: f64) -> [f64; 2] {
    let radius = 2_400.0 + 600.0 * (3.0 * t).sin() + 250.0 * (5.0 * t).cos();
    [1.4 * radius * t.cos(), radius * t.sin()]
}

fn corner_speed(t: f64) -> f64 {
    215.0 + 95.0 * (3.0 * t + 0.6).cos() + 25.0 * (5.0 * t).sin()
}
