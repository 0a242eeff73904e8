//! HTTP route handlers.

pub mod health;
pub mod root;
pub mod write;

pub use health::{health, ready};
pub use root::root;
pub use write::write_line_protocol;

use fluxgate_common::InfluxClient;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub influx: InfluxClient,
}
