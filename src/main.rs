use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use match_engine::config::{LoggingSettings, Settings};
use match_engine::core::MatchEngine;
use match_engine::error::{handle_json_payload_error, AppError};
use match_engine::models::{ScoringParams, ScoringWeights};
use match_engine::routes::{self, matches::AppState};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| logging.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| logging.format.clone());

    // RUST_LOG wins over LOG_LEVEL when both are set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let loaded = Settings::load().map_err(AppError::from);

    // Fall back to default log settings so a config error can still be reported
    match &loaded {
        Ok(settings) => init_logging(&settings.logging),
        Err(_) => init_logging(&LoggingSettings::default()),
    }

    info!("Starting match engine service...");

    let settings = match loaded {
        Ok(settings) => settings,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    info!("Configuration loaded successfully");

    let weights = ScoringWeights::from(&settings.scoring.weights);
    let params = ScoringParams::from(&settings.scoring.params);

    if (weights.sum() - 1.0).abs() > 1e-6 {
        warn!("Scoring weights sum to {:.3}, scores will not top out at 100", weights.sum());
    }

    let engine = MatchEngine::new(weights, params);

    info!("Match engine initialized with weights: {:?}, params: {:?}", weights, params);

    let app_state = AppState {
        engine,
        matching: settings.matching.clone(),
    };

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
