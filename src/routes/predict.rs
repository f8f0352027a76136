use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::SearchSettings;
use crate::core::{NameIndex, PredictError, Predictor};
use crate::models::{ErrorResponse, FighterDetailResponse, HealthResponse, PredictRequest, SearchQuery};
use crate::services::{FighterStore, ScoringClient};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<FighterStore>,
    pub oracle: Arc<ScoringClient>,
    pub predictor: Predictor,
    pub names: Arc<NameIndex>,
    pub search: SearchSettings,
}

/// Configure all prediction-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/predict", web::post().to(predict))
        .route("/fighters/search", web::get().to(search_fighters))
        .route("/fighters/{name}", web::get().to(get_fighter));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let store_healthy = state.store.health_check().await.unwrap_or(false);
    let oracle_healthy = state.oracle.health_check().await.unwrap_or(false);

    let status = if store_healthy && oracle_healthy {
        "healthy"
    } else {
        "degraded"
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        store: store_healthy,
        oracle: oracle_healthy,
    })
}

/// Predict endpoint
///
/// POST /api/v1/predict
///
/// Request body:
/// ```json
/// {
///   "fighter1": "string",
///   "fighter2": "string",
///   "autoSelectCorner": true
/// }
/// ```
async fn predict(
    state: web::Data<AppState>,
    req: web::Json<PredictRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for predict request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    tracing::info!(
        "Predicting matchup: {} vs {} (auto corner: {})",
        req.fighter1,
        req.fighter2,
        req.auto_select_corner
    );

    match state
        .predictor
        .predict(&req.fighter1, &req.fighter2, req.auto_select_corner)
        .await
    {
        Ok(prediction) => HttpResponse::Ok().json(prediction),
        Err(err) => predict_error_response(err),
    }
}

/// Map a pipeline failure to its HTTP representation
fn predict_error_response(err: PredictError) -> HttpResponse {
    let (status_code, error) = match &err {
        PredictError::IdenticalFighters => (400, "identical_fighters"),
        PredictError::UnknownFighter(_) => (404, "unknown_fighter"),
        PredictError::IncompleteRecord { .. } => (422, "incomplete_record"),
        PredictError::OracleUnavailable(_) => (502, "oracle_unavailable"),
        PredictError::Store(_) => (500, "store_error"),
    };

    if status_code >= 500 {
        tracing::error!("Prediction failed: {}", err);
    } else {
        tracing::info!("Prediction rejected: {}", err);
    }

    let body = ErrorResponse {
        error: error.to_string(),
        message: err.to_string(),
        status_code,
    };

    match status_code {
        400 => HttpResponse::BadRequest().json(body),
        404 => HttpResponse::NotFound().json(body),
        422 => HttpResponse::UnprocessableEntity().json(body),
        502 => HttpResponse::BadGateway().json(body),
        _ => HttpResponse::InternalServerError().json(body),
    }
}

/// Fighter name autocomplete endpoint
///
/// GET /api/v1/fighters/search?q={query}&limit={limit}
///
/// Returns a ranked list of roster names matching the query.
async fn search_fighters(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> impl Responder {
    let limit = query
        .limit
        .unwrap_or(state.search.default_limit)
        .min(state.search.max_limit);

    let results = state.names.search(&query.q, limit);

    tracing::debug!("Search '{}' returned {} names", query.q, results.len());

    HttpResponse::Ok().json(results)
}

/// Fighter detail endpoint
///
/// GET /api/v1/fighters/{name}
async fn get_fighter(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let name = path.into_inner();

    let record = match state.store.lookup(&name).await {
        Ok(Some(record)) => record,
        Ok(None) => {
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "unknown_fighter".to_string(),
                message: format!("unknown fighter: {}", name),
                status_code: 404,
            });
        }
        Err(err) => {
            tracing::error!("Failed to fetch fighter {}: {}", name, err);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "store_error".to_string(),
                message: err.to_string(),
                status_code: 500,
            });
        }
    };

    let weight_classes = match state.store.weight_classes(&name).await {
        Ok(classes) => classes,
        Err(err) => {
            tracing::warn!("Failed to fetch weight classes for {}: {}", name, err);
            vec![]
        }
    };

    HttpResponse::Ok().json(FighterDetailResponse {
        record,
        weight_classes,
    })
}
