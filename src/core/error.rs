use thiserror::Error;

/// Failures of the prediction pipeline
///
/// The first five are caused by the caller, the last two by the server.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    #[error("No JSON data provided in the request body.")]
    MissingPayload,

    #[error("Request body exceeds the {0} byte limit.")]
    PayloadTooLarge(usize),

    #[error("Request body is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("Missing one or more required input fields: {}", .0.join(", "))]
    MissingField(Vec<String>),

    #[error("Invalid data type for numerical fields. Please provide valid numbers. (field: {0})")]
    TypeMismatch(String),

    #[error("Prediction model not loaded. Please check backend logs.")]
    ScoringUnavailable,

    #[error("An unexpected error occurred during prediction: {0}")]
    ScoringFailure(String),
}

impl PredictionError {
    /// Machine-readable failure class
    pub fn kind(&self) -> &'static str {
        match self {
            PredictionError::MissingPayload => "missing_payload",
            PredictionError::PayloadTooLarge(_) => "payload_too_large",
            PredictionError::InvalidJson(_) => "invalid_json",
            PredictionError::MissingField(_) => "missing_field",
            PredictionError::TypeMismatch(_) => "type_mismatch",
            PredictionError::ScoringUnavailable => "scoring_unavailable",
            PredictionError::ScoringFailure(_) => "scoring_failure",
        }
    }

    /// HTTP status equivalent
    pub fn status_code(&self) -> u16 {
        match self {
            PredictionError::PayloadTooLarge(_) => 413,
            e if e.is_client_error() => 400,
            _ => 500,
        }
    }

    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            PredictionError::MissingPayload
                | PredictionError::PayloadTooLarge(_)
                | PredictionError::InvalidJson(_)
                | PredictionError::MissingField(_)
                | PredictionError::TypeMismatch(_)
        )
    }
}
