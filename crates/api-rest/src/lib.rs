//! # API REST
//!
//! REST API implementation for Nexus.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, status codes)
//!
//! Uses `api-shared` for request/response types.

#![warn(rust_2018_idioms)]

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{
    FindMatchesReq, FindMatchesRes, GenerateLetterReq, GenerateLetterRes, HealthRes,
    HealthService, ListCasesRes,
};
use nexus_core::{
    CaseStore, InMemoryCaseStore, MinSimilarity, NexusError, PrecedentLetterService, SystemClock,
};

/// The service as wired for production: in-memory dataset, wall-clock dates.
pub type LetterService = PrecedentLetterService<InMemoryCaseStore, SystemClock>;

/// Application state shared across REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<LetterService>,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, list_cases, find_matches, generate_letter),
    components(schemas(
        HealthRes,
        ListCasesRes,
        FindMatchesReq,
        FindMatchesRes,
        GenerateLetterReq,
        GenerateLetterRes,
    ))
)]
pub struct ApiDoc;

/// Builds the REST router with Swagger UI mounted at `/swagger-ui`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/cases", get(list_cases))
        .route("/precedents/match", post(find_matches))
        .route("/letters", post(generate_letter))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Maps core errors to a status code; only faults are logged at error level.
fn error_response(context: &str, e: NexusError) -> (StatusCode, &'static str) {
    if e.is_input_error() {
        tracing::warn!("{} rejected: {}", context, e);
        (StatusCode::BAD_REQUEST, "Bad request")
    } else {
        tracing::error!("{} error: {:?}", context, e);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Reports liveness and how many historical cases the server holds.
#[axum::debug_handler]
async fn health(State(state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health(state.service.store().len()))
}

#[utoipa::path(
    get,
    path = "/cases",
    responses(
        (status = 200, description = "Historical cases in load order", body = ListCasesRes),
        (status = 500, description = "Internal server error")
    )
)]
#[axum::debug_handler]
async fn list_cases(
    State(state): State<AppState>,
) -> Result<Json<ListCasesRes>, (StatusCode, &'static str)> {
    let cases = state
        .service
        .store()
        .historical_cases()
        .map_err(|e| error_response("List cases", e))?;
    Ok(Json(ListCasesRes {
        cases: cases.to_vec(),
    }))
}

#[utoipa::path(
    post,
    path = "/precedents/match",
    request_body = FindMatchesReq,
    responses(
        (status = 200, description = "Ranked precedents, best first", body = FindMatchesRes),
        (status = 400, description = "Invalid threshold"),
        (status = 500, description = "Internal server error")
    )
)]
/// Rank historical precedents against report parameters
///
/// # Errors
/// Returns `400 Bad Request` if `minSimilarity` is not a fraction between 0 and 1, and
/// `500 Internal Server Error` if the case store fails.
#[axum::debug_handler]
async fn find_matches(
    State(state): State<AppState>,
    Json(req): Json<FindMatchesReq>,
) -> Result<Json<FindMatchesRes>, (StatusCode, &'static str)> {
    let min_similarity = match req.min_similarity {
        Some(fraction) => {
            MinSimilarity::from_fraction(fraction).map_err(|e| error_response("Match", e))?
        }
        None => state.service.min_similarity(),
    };

    let matches = state
        .service
        .find_matches_at(&req.parameters, min_similarity)
        .map_err(|e| error_response("Match", e))?;

    Ok(Json(FindMatchesRes {
        min_similarity: min_similarity.percent().value(),
        matches,
    }))
}

#[utoipa::path(
    post,
    path = "/letters",
    request_body = GenerateLetterReq,
    responses(
        (status = 200, description = "Generated letter", body = GenerateLetterRes),
        (status = 500, description = "Internal server error")
    )
)]
/// Generate an outreach letter
///
/// Evidence-based styles fall back to the formal letter when no precedent qualifies; the
/// response's `rendered` field shows which template was used.
#[axum::debug_handler]
async fn generate_letter(
    State(state): State<AppState>,
    Json(req): Json<GenerateLetterReq>,
) -> Result<Json<GenerateLetterRes>, (StatusCode, &'static str)> {
    let letter = state
        .service
        .generate_letter(&req.parameters, req.letter_type)
        .map_err(|e| error_response("Generate letter", e))?;
    Ok(Json(letter.into()))
}
