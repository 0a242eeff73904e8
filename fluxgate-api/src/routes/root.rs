//! Service descriptor endpoint.

use axum::{response::IntoResponse, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct ServiceInfo {
    pub service: &'static str,
    pub status: &'static str,
    pub endpoints: Endpoints,
}

#[derive(Serialize)]
pub struct Endpoints {
    pub health: &'static str,
    pub ready: &'static str,
    pub write: &'static str,
}

/// GET / - Static service descriptor
pub async fn root() -> impl IntoResponse {
    Json(ServiceInfo {
        service: "fluxgate-api",
        status: "ok",
        endpoints: Endpoints {
            health: "/health",
            ready: "/ready",
            write: "/write-line-protocol",
        },
    })
}
