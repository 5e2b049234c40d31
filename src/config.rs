use crate::input::{CsvProvider, DataProvider, DemoProvider, SessionRequest};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Where session data comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataSource {
    /// Built-in procedural session
    #[default]
    Demo,
    /// Directory tree of exported CSV tables
    Csv { root: PathBuf },
}

impl DataSource {
    pub fn provider(&self) -> Box<dyn DataProvider> {
        match self {
            DataSource::Demo => Box::new(DemoProvider::new()),
            DataSource::Csv { root } => Box::new(CsvProvider::new(root.clone())),
        }
    }
}

/// Smallest window the scene layout fits into
pub const MIN_WINDOW_WIDTH: f32 = 1200.0;
pub const MIN_WINDOW_HEIGHT: f32 = 760.0;

/// Persistent application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub window_width: f32,
    pub window_height: f32,
    /// Update and redraw rate, frames per second
    pub frame_rate: u32,
    /// Entity focused at startup, if it loads
    pub preferred_entity: String,
    pub session: SessionRequest,
    pub source: DataSource,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            window_width: 1400.0,
            window_height: 900.0,
            frame_rate: 60,
            preferred_entity: "HAM".to_string(),
            session: SessionRequest::default(),
            source: DataSource::default(),
        }
    }
}

impl AppSettings {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("trackside").join("settings.json"))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let settings: Self = serde_json::from_str(&contents)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(settings.clamped())
    }

    /// Raise the window size to the layout minimum
    fn clamped(mut self) -> Self {
        let width = at_least(self.window_width, MIN_WINDOW_WIDTH);
        let height = at_least(self.window_height, MIN_WINDOW_HEIGHT);
        if width != self.window_width || height != self.window_height {
            warn!(
                "Window {}x{} is below the minimum, using {}x{}",
                self.window_width, self.window_height, width, height
            );
        }
        self.window_width = width;
        self.window_height = height;
        self
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))
    }

    /// Settings from `path`, falling back to defaults. Defaults are written
    /// out when no file exists yet.
    pub fn load_or_init(path: &Path) -> Self {
        if !path.exists() {
            let settings = Self::default();
            match settings.save_to(path) {
                Ok(()) => info!("Wrote default settings to {}", path.display()),
                Err(e) => warn!("Could not write default settings: {:#}", e),
            }
            return settings;
        }

        Self::load_from(path).unwrap_or_else(|e| {
            warn!("Using default settings: {:#}", e);
            Self::default()
        })
    }

    /// Settings from the user config directory
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_or_init(&path),
            None => Self::default(),
        }
    }
}

// NaN compares false and falls back to the minimum
fn at_least(value: f32, min: f32) -> f32 {
    if value >= min {
        value
    } else {
        min
    }
}
