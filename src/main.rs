use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use cricket_winprob::config::{LoggingSettings, Settings};
use cricket_winprob::core::Predictor;
use cricket_winprob::routes::{self, AppState};
use cricket_winprob::services::{LogisticPipeline, ScoringFunction};
use std::sync::Arc;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match logging.format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "json" => subscriber.json().init(),
        _ => subscriber.init(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            init_tracing(&LoggingSettings::default());
            error!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_tracing(&settings.logging);

    info!("Starting cricket win-probability service...");

    // A missing or corrupt artifact is not fatal: health checks keep working
    // and predictions fail with scoring_unavailable.
    let artifact_path = &settings.model.artifact_path;
    let predictor = match LogisticPipeline::load(artifact_path).await {
        Ok(model) => {
            info!(
                "Scoring model '{}' ({}) loaded from {}",
                model.name(),
                model.version(),
                artifact_path
            );
            Predictor::new(Arc::new(model))
        }
        Err(e) => {
            error!("Failed to load scoring model from {}: {}", artifact_path, e);
            error!("Predictions are disabled until the service is restarted with a valid artifact");
            Predictor::unavailable()
        }
    };

    let app_state = AppState::new(predictor, settings.server.max_payload_bytes);

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
