use serde::{Deserialize, Serialize};
use crate::models::domain::PredictionResult;

/// Response for the predict endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub batting_team_prob: f64,
    pub bowling_team_prob: f64,
}

impl From<PredictionResult> for PredictResponse {
    fn from(result: PredictionResult) -> Self {
        Self {
            batting_team_prob: result.batting_team_prob,
            bowling_team_prob: result.bowling_team_prob,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model_loaded: bool,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Description of the loaded scoring model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfoResponse {
    pub name: String,
    pub version: String,
    pub columns: Vec<String>,
}

/// Error response
///
/// `error` carries the human-readable message, `kind` the machine-readable
/// failure class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: String,
    pub status_code: u16,
}
