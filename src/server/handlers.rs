use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

use crate::geocode::{format_coords, geocode_address, geocode_batch, GeocodedAddress, CENTER};

use super::state::AppState;

// ─── Error response ──────────────────────────────────────────────

#[derive(Serialize)]
struct ApiErrorBody {
    error: String,
    code: u16,
}

pub(super) struct ApiError(StatusCode, String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody {
            error: self.1,
            code: self.0.as_u16(),
        };
        (self.0, Json(body)).into_response()
    }
}

fn api_error(status: StatusCode, msg: impl Into<String>) -> ApiError {
    ApiError(status, msg.into())
}

// ─── GET /api/geocode ────────────────────────────────────────────

#[derive(Deserialize)]
pub struct GeocodeQuery {
    pub address: Option<String>,
}

pub(super) async fn resolve(Query(params): Query<GeocodeQuery>) -> Result<Json<GeocodedAddress>, ApiError> {
    let start = Instant::now();

    // An empty address is valid input; only a missing parameter is rejected.
    let address = params
        .address
        .ok_or_else(|| api_error(StatusCode::BAD_REQUEST, "Missing 'address' parameter"))?;

    let result = geocode_address(&address);

    tracing::info!(
        address = %result.address,
        hash = result.hash,
        coords = %result.formatted,
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "GET /api/geocode"
    );

    Ok(Json(result))
}

// ─── POST /api/geocode/batch ─────────────────────────────────────

#[derive(Deserialize)]
pub struct BatchRequest {
    pub addresses: Vec<String>,
}

pub(super) async fn resolve_batch(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BatchRequest>,
) -> Result<Json<Vec<GeocodedAddress>>, ApiError> {
    let start = Instant::now();

    if req.addresses.len() > state.max_batch {
        tracing::debug!(requested = req.addresses.len(), limit = state.max_batch, "batch rejected");
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            format!(
                "Batch of {} addresses exceeds the limit; send at most {}",
                req.addresses.len(),
                state.max_batch
            ),
        ));
    }

    let results = geocode_batch(&req.addresses);

    tracing::info!(
        count = results.len(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "POST /api/geocode/batch"
    );

    Ok(Json(results))
}

// ─── GET /api/center ─────────────────────────────────────────────

#[derive(Serialize)]
pub struct CenterResponse {
    pub lat: f64,
    pub lng: f64,
    pub formatted: String,
}

pub(super) async fn center() -> Json<CenterResponse> {
    Json(CenterResponse {
        lat: CENTER.lat,
        lng: CENTER.lng,
        formatted: format_coords(CENTER.lat, CENTER.lng),
    })
}
