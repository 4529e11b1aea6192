// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    MatchState, FeatureVector, FeatureRow, FeatureValue, PredictionResult,
    FEATURE_COLUMNS, BATTING_TEAM_CLASS, BOWLING_TEAM_CLASS, BALLS_PER_INNINGS, BALLS_PER_OVER,
};
pub use requests::{PredictRequest, REQUEST_FIELDS};
pub use responses::{PredictResponse, HealthResponse, ModelInfoResponse, ErrorResponse};
