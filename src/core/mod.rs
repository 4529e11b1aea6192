// Core pipeline exports
pub mod error;
pub mod features;
pub mod pipeline;
pub mod scoring;
pub mod validation;

pub use error::PredictionError;
pub use features::{derive_features, current_run_rate, required_run_rate};
pub use pipeline::{Predictor, handle_request};
pub use scoring::{score, to_prediction, to_percent};
pub use validation::{parse_body, validate, validate_body};
