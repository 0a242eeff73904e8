//! Configuration for the Fluxgate services.
//!
//! All configuration is read from environment variables, with fixed
//! fallbacks so the services start without any of them set.

use std::env;
use std::fmt;

/// Service configuration
#[derive(Clone)]
pub struct Config {
    /// HTTP server host
    pub host: String,

    /// HTTP server port
    pub port: u16,

    /// InfluxDB base URL
    pub influx_url: String,

    /// InfluxDB API token
    pub influx_token: String,

    /// InfluxDB organization
    pub influx_org: String,

    /// InfluxDB bucket written to
    pub influx_bucket: String,

    /// Log level
    pub log_level: String,

    /// Enable JSON logging
    pub log_json: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            influx_url: env::var("INFLUXDB_URL")
                .unwrap_or_else(|_| "http://localhost:8086".to_string()),
            influx_token: env::var("INFLUXDB_TOKEN").unwrap_or_else(|_| "my-token".to_string()),
            influx_org: env::var("INFLUXDB_ORG").unwrap_or_else(|_| "my-org".to_string()),
            influx_bucket: env::var("INFLUXDB_BUCKET")
                .unwrap_or_else(|_| "my-bucket".to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            log_json: env::var("LOG_JSON")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        }
    }

    /// Get the full server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// Manual impl: the API token must never reach the logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("influx_url", &self.influx_url)
            .field("influx_token", &"<redacted>")
            .field("influx_org", &self.influx_org)
            .field("influx_bucket", &self.influx_bucket)
            .field("log_level", &self.log_level)
            .field("log_json", &self.log_json)
            .finish()
    }
}
