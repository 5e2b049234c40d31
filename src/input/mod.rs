pub mod csv;
pub mod demo;

pub use self::csv::CsvProvider;
pub use self::demo::DemoProvider;

use crate::core::{EntityLoad, EntityRegistry, LoadError, LoadReport, ReplayError};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

/// Identifies one recorded session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRequest {
    pub season: u16,
    pub event: String,
    /// Session type code, e.g. `R` for the race
    pub session: String,
}

impl Default for SessionRequest {
    fn default() -> Self {
        Self {
            season: 2023,
            event: "Silverstone".to_string(),
            session: "R".to_string(),
        }
    }
}

impl fmt::Display for SessionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.season, self.event, self.session)
    }
}

/// Source of recorded sessions
///
/// Implementations report per-entity failures inside the returned list; the
/// outer error is reserved for a session that cannot be read at all.
pub trait DataProvider {
    /// Human-readable name for logs
    fn name(&self) -> &str;

    /// Load every entity of the session, in display order
    fn load_session(&self, request: &SessionRequest) -> Result<Vec<EntityLoad>, LoadError>;
}

/// Blocking one-time load of a session into a registry
pub fn load_registry(
    provider: &dyn DataProvider,
    request: &SessionRequest,
) -> Result<(EntityRegistry, LoadReport), ReplayError> {
    info!("Loading session {} from {}", request, provider.name());

    let loads = provider
        .load_session(request)
        .map_err(|source| ReplayError::Session {
            session: request.to_string(),
            source,
        })?;

    let (registry, report) = EntityRegistry::from_loads(loads)?;
    report.log();
    Ok((registry, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Entity, EntityMeta, LoadFailure, Rgb, Sample};

    struct FixedProvider {
        fail_session: bool,
    }

    impl DataProvider for FixedProvider {
        fn name(&self) -> &str {
            "fixed"
        }

        fn load_session(&self, _request: &SessionRequest) -> Result<Vec<EntityLoad>, LoadError> {
            if self.fail_session {
                return Err(LoadError::MissingTelemetry("results.csv".to_string()));
            }
            let meta = EntityMeta::new("ALO", "Fernando Alonso", Rgb::new(0, 110, 80));
            Ok(vec![
                Entity::new(meta, vec![Sample::default()]).map_err(|e| LoadFailure::new("ALO", e)),
                Err(LoadFailure::new("STR", LoadError::EmptySeries)),
            ])
        }
    }

    #[test]
    fn test_load_registry_skips_failed_entities() {
        let provider = FixedProvider { fail_session: false };
        let (registry, report) = load_registry(&provider, &SessionRequest::default()).unwrap();

        assert_eq!(registry.len(), 1);
        assert!(registry.get("ALO").is_some());
        assert_eq!(report.failures.len(), 1);
    }

    #[test]
    fn test_unreadable_session_is_fatal() {
        let provider = FixedProvider { fail_session: true };
        let err = load_registry(&provider, &SessionRequest::default()).unwrap_err();

        assert!(matches!(err, ReplayError::Session { .. }));
        assert_eq!(err.to_string(), "cannot read session 2023 Silverstone R");
    }
}
