use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use crate::core::{PredictionError, Predictor};
use crate::models::{ErrorResponse, HealthResponse, ModelInfoResponse, PredictResponse};

/// Application state shared across all handlers
#[derive(Clone, Debug)]
pub struct AppState {
    pub predictor: Predictor,
    /// Largest accepted prediction request body
    pub max_payload_bytes: usize,
}

impl AppState {
    pub fn new(predictor: Predictor, max_payload_bytes: usize) -> Self {
        Self {
            predictor,
            max_payload_bytes,
        }
    }
}

/// Configure prediction routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/model", web::get().to(model_info))
        .route("/predict", web::post().to(predict));
}

/// Health check endpoint
///
/// Reports `degraded` when the scoring model failed to load; the process keeps
/// serving either way.
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let model_loaded = state.predictor.is_available();
    let status = if model_loaded { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        model_loaded,
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Describe the loaded model
async fn model_info(state: web::Data<AppState>) -> impl Responder {
    match state.predictor.model() {
        Some(model) => HttpResponse::Ok().json(ModelInfoResponse {
            name: model.name().to_string(),
            version: model.version().to_string(),
            columns: model.columns(),
        }),
        None => error_response(&PredictionError::ScoringUnavailable),
    }
}

/// Predict endpoint
///
/// POST /predict
///
/// Request body:
/// ```json
/// {
///   "batting_team": "MI",
///   "bowling_team": "CSK",
///   "city": "Mumbai",
///   "target": 180,
///   "score": 120,
///   "wickets": 3,
///   "overs": 12.5
/// }
/// ```
///
/// The body is read here rather than by an extractor so that empty, malformed
/// and oversized payloads all get a JSON error body.
pub async fn predict(state: web::Data<AppState>, payload: web::Payload) -> impl Responder {
    let request_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("predict", %request_id);

    let result = match read_body(&state, payload).await {
        Ok(body) => state.predictor.predict_body(&body),
        Err(e) => Err(e),
    };

    let _guard = span.enter();
    match result {
        Ok(result) => {
            tracing::info!(
                "Prediction: batting {:.2}%, bowling {:.2}%",
                result.batting_team_prob,
                result.bowling_team_prob
            );
            HttpResponse::Ok().json(PredictResponse::from(result))
        }
        Err(e) => {
            if e.is_client_error() {
                tracing::info!("Rejected prediction request ({}): {}", e.kind(), e);
            } else {
                tracing::error!("Prediction failed ({}): {}", e.kind(), e);
            }
            error_response(&e)
        }
    }
}

/// Collect the request body up to the configured limit
///
/// A missing model is reported before the body is read.
async fn read_body(state: &AppState, payload: web::Payload) -> Result<web::Bytes, PredictionError> {
    if !state.predictor.is_available() {
        return Err(PredictionError::ScoringUnavailable);
    }

    match payload.to_bytes_limited(state.max_payload_bytes).await {
        Ok(Ok(body)) => Ok(body),
        Ok(Err(e)) => Err(PredictionError::InvalidJson(e.to_string())),
        Err(_) => Err(PredictionError::PayloadTooLarge(state.max_payload_bytes)),
    }
}

fn error_response(err: &PredictionError) -> HttpResponse {
    let body = ErrorResponse {
        error: err.to_string(),
        kind: err.kind().to_string(),
        status_code: err.status_code(),
    };

    HttpResponse::build(
        StatusCode::from_u16(body.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
    )
    .json(body)
}
