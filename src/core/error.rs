use crate::core::EntityKey;
use std::fmt;
use thiserror::Error;

/// Reasons an entity's telemetry cannot be turned into a series
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no telemetry source at {0}")]
    MissingTelemetry(String),

    #[error("missing column (expected one of {0:?})")]
    MissingColumn(&'static [&'static str]),

    #[error("row {row}: cannot parse {column} value {value:?}")]
    InvalidCell {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("telemetry contains no samples")]
    EmptySeries,

    #[error("telemetry contains no finite positions")]
    NoPositions,

    #[error("entity key already loaded")]
    DuplicateKey,

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// One entity that was left out of the registry, and why
#[derive(Debug)]
pub struct LoadFailure {
    pub key: EntityKey,
    pub reason: LoadError,
}

impl LoadFailure {
    pub fn new(key: impl Into<EntityKey>, reason: LoadError) -> Self {
        Self {
            key: key.into(),
            reason,
        }
    }
}

impl fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.reason)
    }
}

/// Errors that stop the replay before the frame loop starts
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("cannot read session {session}")]
    Session {
        session: String,
        #[source]
        source: LoadError,
    },

    #[error("no entity could be loaded ({} failed)", failures.len())]
    EmptyRegistry { failures: Vec<LoadFailure> },
}
