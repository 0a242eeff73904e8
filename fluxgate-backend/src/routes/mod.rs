//! HTTP route handlers.

pub mod write;

pub use write::write_line_protocol;

use fluxgate_common::InfluxClient;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub influx: InfluxClient,
}
