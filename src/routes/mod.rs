// Route exports
pub mod predict;

use actix_web::web;

pub use predict::AppState;

/// Versioned API under `/api/v1`, plus `/predict` at the root for existing
/// front-ends
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(predict::configure),
    )
    .route("/predict", web::post().to(predict::predict));
}
