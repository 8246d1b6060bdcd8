use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use nutri_algo::config::Settings;
use nutri_algo::core::Recommender;
use nutri_algo::models::{RecommendationSettings, ScoringWeights};
use nutri_algo::routes::{self, handle_json_payload_error, recommend::AppState};
use nutri_algo::services::CatalogStore;
use std::sync::Arc;
use tracing::{info, error, warn};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }

    info!("Starting NutriAI recommendation service...");

    // Load configuration
    let settings = Settings::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("Configuration error: {}", e))
    })?;

    info!(
        "Configuration loaded successfully (logging.level={}, logging.format={})",
        settings.logging.level, settings.logging.format
    );

    // Catalog is loaded once and cached read-only
    let catalog = Arc::new(CatalogStore::new(
        settings.catalog.path.clone(),
        settings.catalog.cache_ttl_secs,
    ));

    match catalog.get().await {
        Ok(loaded) => info!("Food catalog ready ({} items)", loaded.len()),
        Err(e) => warn!("Food catalog not available at startup, will retry per request: {}", e),
    }

    // Initialize recommender with configured weights
    let weights = ScoringWeights::from(&settings.scoring.weights);
    let weight_sum = settings.scoring.weights.sum();
    if (weight_sum - 1.0).abs() > 1e-6 {
        warn!("Scoring weights sum to {:.3}, scores are clamped to [0, 1]", weight_sum);
    }
    let recommendation = RecommendationSettings::from(&settings.recommendation);

    let recommender = Recommender::new(weights, recommendation);

    info!("Recommender initialized with weights: {:?}, settings: {:?}", weights, recommendation);

    // Build application state
    let app_state = AppState {
        catalog,
        recommender,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
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
