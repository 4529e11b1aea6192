use crate::core::error::PredictionError;
use crate::models::{FeatureVector, PredictionResult, BATTING_TEAM_CLASS, BOWLING_TEAM_CLASS};
use crate::services::ScoringFunction;

/// Score a feature vector with the loaded model
///
/// The features are handed over as a row in training-schema order. Class 1 of
/// the model output is the batting side, class 0 the bowling side.
pub fn score(
    features: &FeatureVector,
    model: Option<&dyn ScoringFunction>,
) -> Result<PredictionResult, PredictionError> {
    let model = model.ok_or(PredictionError::ScoringUnavailable)?;

    let probabilities = model
        .predict_proba(&features.to_row())
        .map_err(|e| PredictionError::ScoringFailure(e.to_string()))?;

    to_prediction(&probabilities)
}

/// Turn a two-class distribution into rounded percentages
pub fn to_prediction(probabilities: &[f64]) -> Result<PredictionResult, PredictionError> {
    if probabilities.len() != 2 {
        return Err(PredictionError::ScoringFailure(format!(
            "expected 2 class probabilities, model returned {}",
            probabilities.len()
        )));
    }
    if probabilities.iter().any(|p| !p.is_finite()) {
        return Err(PredictionError::ScoringFailure(
            "model returned a non-finite probability".to_string(),
        ));
    }

    Ok(PredictionResult {
        batting_team_prob: to_percent(probabilities[BATTING_TEAM_CLASS]),
        bowling_team_prob: to_percent(probabilities[BOWLING_TEAM_CLASS]),
    })
}

/// Probability to percent, rounded to two decimal places
#[inline]
pub fn to_percent(probability: f64) -> f64 {
    (probability * 100.0 * 100.0).round() / 100.0
}
