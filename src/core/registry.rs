use crate::core::{EntityKey, EntityMeta, LoadError, LoadFailure, ReplayError, Sample, SampleSeries};
use std::collections::HashMap;
use tracing::{info, warn};

/// A loaded entity: display identity plus its telemetry
#[derive(Debug, Clone)]
pub struct Entity {
    pub meta: EntityMeta,
    pub series: SampleSeries,
}

impl Entity {
    pub fn new(meta: EntityMeta, samples: Vec<Sample>) -> Result<Self, LoadError> {
        let series = SampleSeries::new(samples)?;
        Ok(Self { meta, series })
    }

    pub fn key(&self) -> &EntityKey {
        &self.meta.key
    }
}

/// Outcome of loading one entity from a provider
pub type EntityLoad = Result<Entity, LoadFailure>;

/// What happened during a session load
#[derive(Debug, Default)]
pub struct LoadReport {
    pub loaded: usize,
    pub failures: Vec<LoadFailure>,
}

impl LoadReport {
    pub fn log(&self) {
        for failure in &self.failures {
            warn!("Skipping {}: {}", failure.key, failure.reason);
        }
        info!(
            "Loaded {} entities ({} skipped)",
            self.loaded,
            self.failures.len()
        );
    }
}

/// Every successfully loaded entity, in provider order. Never empty.
#[derive(Debug)]
pub struct EntityRegistry {
    entities: Vec<Entity>,
    index: HashMap<EntityKey, usize>,
    max_len: usize,
}

impl EntityRegistry {
    /// Aggregate per-entity results. Failures are kept for the report; an
    /// empty outcome is fatal.
    pub fn from_loads(
        loads: impl IntoIterator<Item = EntityLoad>,
    ) -> Result<(Self, LoadReport), ReplayError> {
        let mut entities: Vec<Entity> = Vec::new();
        let mut index = HashMap::new();
        let mut failures = Vec::new();

        for load in loads {
            match load {
                Ok(entity) if index.contains_key(entity.key()) => {
                    failures.push(LoadFailure::new(entity.key().clone(), LoadError::DuplicateKey));
                }
                Ok(entity) => {
                    index.insert(entity.key().clone(), entities.len());
                    entities.push(entity);
                }
                Err(failure) => failures.push(failure),
            }
        }

        if entities.is_empty() {
            return Err(ReplayError::EmptyRegistry { failures });
        }

        let max_len = entities.iter().map(|e| e.series.len()).max().unwrap_or(0);
        let report = LoadReport {
            loaded: entities.len(),
            failures,
        };

        Ok((
            Self {
                entities,
                index,
                max_len,
            },
            report,
        ))
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Entities in display order
    pub fn iter(&self) -> std::slice::Iter<'_, Entity> {
        self.entities.iter()
    }

    pub fn get(&self, key: &str) -> Option<&Entity> {
        self.index.get(key).map(|&i| &self.entities[i])
    }

    pub fn first(&self) -> &Entity {
        &self.entities[0]
    }

    /// Length of the longest series; playback wraps here
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// `preferred` when it loaded, otherwise the first entity
    pub fn initial_selection(&self, preferred: &str) -> EntityKey {
        match self.get(preferred) {
            Some(entity) => entity.key().clone(),
            None => self.first().key().clone(),
        }
    }
}
