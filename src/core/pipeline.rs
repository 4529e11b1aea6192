use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use crate::core::{
    error::PredictionError,
    features::derive_features,
    scoring::score,
    validation::{parse_body, validate},
};
use crate::models::{MatchState, PredictionResult};
use crate::services::ScoringFunction;

/// Main prediction orchestrator
///
/// # Pipeline Stages
/// 1. Model availability check
/// 2. Payload validation and coercion
/// 3. Feature derivation
/// 4. Scoring and rounding
///
/// The model is injected once at startup and never replaced. Cloning shares it.
#[derive(Clone)]
pub struct Predictor {
    model: Option<Arc<dyn ScoringFunction>>,
}

impl fmt::Debug for Predictor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predictor")
            .field("model", &self.model.as_ref().map(|m| format!("{} {}", m.name(), m.version())))
            .finish()
    }
}

impl Predictor {
    pub fn new(model: Arc<dyn ScoringFunction>) -> Self {
        Self { model: Some(model) }
    }

    /// A predictor whose model failed to load; every prediction fails
    pub fn unavailable() -> Self {
        Self { model: None }
    }

    pub fn is_available(&self) -> bool {
        self.model.is_some()
    }

    pub fn model(&self) -> Option<&dyn ScoringFunction> {
        self.model.as_deref()
    }

    /// Predict from a raw request body
    pub fn predict_body(&self, body: &[u8]) -> Result<PredictionResult, PredictionError> {
        self.ensure_available()?;
        let payload = parse_body(body)?;
        self.predict(&payload)
    }

    /// Predict from an untyped JSON payload
    pub fn predict(&self, payload: &Value) -> Result<PredictionResult, PredictionError> {
        handle_request(payload, self.model())
    }

    /// Predict from an already validated match state
    pub fn predict_state(&self, state: &MatchState) -> Result<PredictionResult, PredictionError> {
        self.ensure_available()?;
        score(&derive_features(state), self.model())
    }

    fn ensure_available(&self) -> Result<(), PredictionError> {
        if self.is_available() {
            Ok(())
        } else {
            Err(PredictionError::ScoringUnavailable)
        }
    }
}

/// Run the whole pipeline for one payload, stopping at the first failure
///
/// A missing model is reported before the payload is even looked at.
pub fn handle_request(
    payload: &Value,
    model: Option<&dyn ScoringFunction>,
) -> Result<PredictionResult, PredictionError> {
    if model.is_none() {
        return Err(PredictionError::ScoringUnavailable);
    }

    let state = validate(payload)?;
    let features = derive_features(&state);
    score(&features, model)
}
