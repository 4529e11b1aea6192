// Service exports
pub mod model;

pub use model::{ScoringFunction, LogisticPipeline, ColumnSpec, ModelError};
