//! Cricket Winprob - win-probability service for in-progress T20 chases
//!
//! Turns a raw match-state payload into win percentages for both sides:
//! validation, feature derivation, scoring against a loaded model, rounding.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Predictor, PredictionError, derive_features, handle_request};
pub use crate::models::{MatchState, FeatureVector, PredictionResult, FEATURE_COLUMNS};
pub use crate::services::{ScoringFunction, LogisticPipeline, ModelError};
