//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::service::{Field, PlanError};
use crate::stations::CatalogStats;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api_info))
        .route("/health", get(health))
        .route("/api/route", post(plan_route))
        .route("/api/stations/stats", get(station_stats))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// API name, version and endpoints.
async fn api_info() -> Json<ApiInfoResponse> {
    Json(ApiInfoResponse::current())
}

/// Station catalog counts.
async fn station_stats(State(state): State<AppState>) -> Json<CatalogStats> {
    Json(state.catalog.stats().await)
}

/// Plan fuel stops between two locations.
async fn plan_route(State(state): State<AppState>, body: Bytes) -> Result<Response, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: PlanRouteRequest = parse_body(&body)?;
    let (start, end) = required_locations(req)?;

    let response = state.routes.plan(&start, &end).await?;
    Ok(Json(response.as_ref()).into_response())
}

fn parse_body(body: &[u8]) -> Result<PlanRouteRequest, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(body), "invalid JSON body");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })
}

fn required_locations(req: PlanRouteRequest) -> Result<(String, String), AppError> {
    let missing = |field: Field, label: &str| AppError::BadRequest {
        message: format!("{field}: {label} location is required"),
    };

    let start = req
        .start_location
        .ok_or_else(|| missing(Field::StartLocation, "Start"))?;
    let end = req
        .end_location
        .ok_or_else(|| missing(Field::EndLocation, "End"))?;
    Ok((start, end))
}

/// Application error type.
///
/// Every planning failure is the caller's: routing problems fall back and
/// the catalog is read from memory, so there is no server-side error path.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
        };

        warn!(%status, %message, "request rejected");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
