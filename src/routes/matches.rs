use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::config::MatchingSettings;
use crate::core::MatchEngine;
use crate::error::AppError;
use crate::models::{
    FilterRequest, FilterResponse, HealthResponse, RecommendRequest, RecommendResponse,
    ScoreRequest,
};

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub engine: MatchEngine,
    pub matching: MatchingSettings,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/criteria/default", web::get().to(default_criteria))
        .route("/matches/score", web::post().to(score_candidate))
        .route("/matches/recommend", web::post().to(recommend))
        .route("/matches/filter", web::post().to(filter));
}

/// Health check endpoint
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// GET /api/v1/criteria/default
async fn default_criteria() -> HttpResponse {
    HttpResponse::Ok().json(MatchEngine::default_criteria())
}

/// Score a single candidate
///
/// POST /api/v1/matches/score
///
/// Request body:
/// ```json
/// {
///   "viewer": { "id": "string", "name": "string", "age": 25, ... },
///   "candidate": { ... },
///   "criteria": { "ageRange": [18, 35], "maxDistance": 50, ... }
/// }
/// ```
async fn score_candidate(
    state: web::Data<AppState>,
    req: web::Json<ScoreRequest>,
) -> Result<HttpResponse, AppError> {
    req.validate().map_err(|errors| {
        tracing::info!("Validation failed for score request: {}", errors);
        AppError::from(errors)
    })?;

    let req = req.into_inner();
    let criteria = req.criteria.unwrap_or_default();
    let score = state
        .engine
        .compute_match_score(&req.viewer, &req.candidate, &criteria);

    tracing::debug!(
        "Scored {} for {}: {} ({:?})",
        score.user_id,
        req.viewer.id,
        score.score,
        score.compatibility
    );

    Ok(HttpResponse::Ok().json(score))
}

/// Rank candidates for a viewer
///
/// POST /api/v1/matches/recommend
///
/// Request body:
/// ```json
/// {
///   "viewer": { ... },
///   "candidates": [{ ... }],
///   "criteria": { ... },
///   "limit": 10
/// }
/// ```
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> Result<HttpResponse, AppError> {
    req.validate().map_err(|errors| {
        tracing::info!("Validation failed for recommend request: {}", errors);
        AppError::from(errors)
    })?;

    let req = req.into_inner();
    let criteria = req.criteria.unwrap_or_default();
    let limit = state.matching.effective_limit(req.limit);

    tracing::info!(
        "Ranking {} candidates for viewer: {}, limit: {}",
        req.candidates.len(),
        req.viewer.id,
        limit
    );

    let result = state
        .engine
        .recommended_users(&req.viewer, &req.candidates, &criteria, limit);

    tracing::info!(
        "Returning {} matches for viewer {} (from {} candidates)",
        result.matches.len(),
        req.viewer.id,
        result.total_candidates
    );

    Ok(HttpResponse::Ok().json(RecommendResponse {
        matches: result.matches,
        total_candidates: result.total_candidates,
    }))
}

/// Filter candidates by criteria without scoring
///
/// POST /api/v1/matches/filter
async fn filter(
    state: web::Data<AppState>,
    req: web::Json<FilterRequest>,
) -> Result<HttpResponse, AppError> {
    req.validate().map_err(|errors| {
        tracing::info!("Validation failed for filter request: {}", errors);
        AppError::from(errors)
    })?;

    let req = req.into_inner();
    let criteria = req.criteria.unwrap_or_default();
    let users = state.engine.filtered_users(&req.candidates, &criteria);

    Ok(HttpResponse::Ok().json(FilterResponse {
        total_candidates: req.candidates.len(),
        users,
    }))
}
