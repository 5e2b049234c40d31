pub mod entity;
pub mod error;
pub mod registry;
pub mod series;

pub use entity::{EntityKey, EntityMeta, Rgb};
pub use error::{LoadError, LoadFailure, ReplayError};
pub use registry::{Entity, EntityLoad, EntityRegistry, LoadReport};
pub use series::{Bounds, Channel, Sample, SampleSeries};
