mod config;
mod core;
mod models;
mod routes;
mod services;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer, HttpResponse, middleware, error, http::StatusCode};
use crate::config::Settings;
use crate::core::{NameIndex, Predictor};
use crate::routes::predict::AppState;
use crate::services::{FighterStore, ScoringClient};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, error};

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .content_type("application/json")
            .body(serde_json::to_string(self).unwrap())
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level)),
        )
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Cageside prediction service...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Open the fighter store and run migrations
    let db_max_conn = settings.database.max_connections.unwrap_or(5);
    let db_min_conn = settings.database.min_connections.unwrap_or(1);

    let store = Arc::new(
        FighterStore::new(&settings.database.url, db_max_conn, db_min_conn)
            .await
            .unwrap_or_else(|e| {
                error!("Failed to open fighter store: {}", e);
                panic!("Fighter store error: {}", e);
            }),
    );

    info!("Fighter store opened (max: {} connections)", db_max_conn);

    // Load the roster once for autocomplete
    let names = match store.all_names().await {
        Ok(names) => names,
        Err(e) => {
            error!("Failed to load fighter roster: {}", e);
            panic!("Roster load error: {}", e);
        }
    };

    let name_index = Arc::new(NameIndex::new(names));

    info!("Roster loaded: {} fighters indexed", name_index.len());

    // Initialize the scoring oracle client
    let oracle = Arc::new(ScoringClient::new(
        settings.oracle.endpoint.clone(),
        Duration::from_secs(settings.oracle.timeout_secs),
    ));

    info!("Scoring oracle client initialized: {}", settings.oracle.endpoint);

    // Wire up the prediction pipeline
    let predictor = Predictor::new(Arc::clone(&store), Arc::clone(&oracle));

    // Build application state
    let app_state = AppState {
        store,
        oracle,
        predictor,
        names: name_index,
        search: settings.search.clone(),
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
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
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
