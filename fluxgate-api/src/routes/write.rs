//! Line-protocol relay endpoint.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{error, info, warn};

use fluxgate_common::InfluxError;

use super::AppState;

#[derive(Serialize)]
pub struct WriteResponse {
    pub status: &'static str,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// POST /write-line-protocol - Forward a raw payload to InfluxDB
///
/// The body is never parsed here; it goes to InfluxDB byte for byte.
pub async fn write_line_protocol(State(state): State<AppState>, body: Bytes) -> Response {
    if body.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                detail: "No data provided".to_string(),
            }),
        )
            .into_response();
    }

    let size = body.len();

    match state.influx.write(body).await {
        Ok(()) => {
            info!("Accepted {} byte write", size);
            (StatusCode::OK, Json(WriteResponse { status: "success" })).into_response()
        }
        Err(InfluxError::Upstream { status, body }) => {
            warn!("InfluxDB rejected write: {} {}", status, body);
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            (status, Json(ErrorResponse { detail: body })).into_response()
        }
        Err(InfluxError::Transport(e)) => {
            error!("Failed to reach InfluxDB: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    detail: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
