//! Health and readiness probes.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::warn;

use super::AppState;

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

#[derive(Serialize)]
pub struct DegradedResponse {
    pub status: &'static str,
    pub details: String,
}

#[derive(Serialize)]
pub struct DownResponse {
    pub status: &'static str,
    pub error: String,
}

/// GET /health - Liveness check, independent of InfluxDB
pub async fn health() -> impl IntoResponse {
    Json(StatusResponse { status: "healthy" })
}

/// GET /ready - Readiness check against InfluxDB's health endpoint
pub async fn ready(State(state): State<AppState>) -> Response {
    match state.influx.health().await {
        Ok(report) if report.is_pass() => {
            (StatusCode::OK, Json(StatusResponse { status: "ready" })).into_response()
        }
        Ok(report) => {
            warn!("InfluxDB reports status {:?}", report.status);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(DegradedResponse {
                    status: "degraded",
                    details: report.message.unwrap_or_default(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            warn!("InfluxDB health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(DownResponse {
                    status: "down",
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
