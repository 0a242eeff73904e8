//! InfluxDB v2 API client.
//!
//! A thin wrapper around the two upstream calls the services make: the
//! line-protocol write and the health probe. Every call builds its own
//! short-lived HTTP client, so no connection outlives the request that
//! opened it.

use bytes::Bytes;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::config::Config;

/// Errors from the write path
#[derive(Debug, Error)]
pub enum InfluxError {
    /// InfluxDB answered with something other than 204
    #[error("InfluxDB returned status {status}: {body}")]
    Upstream { status: u16, body: String },

    /// The request never got a response
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Health report returned by InfluxDB's `/health` endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct HealthCheck {
    pub status: String,

    #[serde(default)]
    pub message: Option<String>,
}

impl HealthCheck {
    /// True when InfluxDB reports itself healthy ("pass", any casing)
    pub fn is_pass(&self) -> bool {
        self.status.eq_ignore_ascii_case("pass")
    }
}

/// Client for the InfluxDB write and health endpoints
#[derive(Clone)]
pub struct InfluxClient {
    url: String,
    token: String,
    org: String,
    bucket: String,
}

impl InfluxClient {
    /// Create a client from the shared configuration
    pub fn new(config: &Config) -> Self {
        Self {
            url: config.influx_url.trim_end_matches('/').to_string(),
            token: config.influx_token.clone(),
            org: config.influx_org.clone(),
            bucket: config.influx_bucket.clone(),
        }
    }

    /// Forward a raw line-protocol payload to `/api/v2/write`.
    ///
    /// The payload is sent exactly as received; InfluxDB does the parsing.
    /// A 204 from InfluxDB means the write was accepted; any other status
    /// is surfaced as [`InfluxError::Upstream`] with the upstream's body.
    pub async fn write(&self, body: Bytes) -> Result<(), InfluxError> {
        debug!("POST {}/api/v2/write ({} bytes)", self.url, body.len());

        let client = reqwest::Client::new();

        let response = client
            .post(format!("{}/api/v2/write", self.url))
            .query(&[
                ("org", self.org.as_str()),
                ("bucket", self.bucket.as_str()),
                ("precision", "ns"),
            ])
            .header(AUTHORIZATION, format!("Token {}", self.token))
            .header(CONTENT_TYPE, "text/plain; charset=utf-8")
            .body(body)
            .send()
            .await?;

        match response.status() {
            StatusCode::NO_CONTENT => Ok(()),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(InfluxError::Upstream {
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }

    /// Query InfluxDB's `/health` endpoint.
    pub async fn health(&self) -> Result<HealthCheck, reqwest::Error> {
        debug!("GET {}/health", self.url);

        let client = reqwest::Client::new();

        let response = client.get(format!("{}/health", self.url)).send().await?;

        response.json::<HealthCheck>().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(url: &str) -> Config {
        Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            influx_url: url.to_string(),
            influx_token: "test-token".to_string(),
            influx_org: "test-org".to_string(),
            influx_bucket: "test-bucket".to_string(),
            log_level: "debug".to_string(),
            log_json: false,
        }
    }

    #[tokio::test]
    async fn test_write_forwards_payload_unchanged() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v2/write"))
            .and(query_param("org", "test-org"))
            .and(query_param("bucket", "test-bucket"))
            .and(query_param("precision", "ns"))
            .and(header("authorization", "Token test-token"))
            .and(header("content-type", "text/plain; charset=utf-8"))
            .and(body_string("cpu,host=a usage=0.5 1700000000000000000"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = InfluxClient::new(&test_config(&server.uri()));
        let result = client
            .write(Bytes::from_static(b"cpu,host=a usage=0.5 1700000000000000000"))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_write_surfaces_upstream_rejection() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v2/write"))
            .respond_with(ResponseTemplate::new(400).set_body_string("invalid line protocol"))
            .mount(&server)
            .await;

        let client = InfluxClient::new(&test_config(&server.uri()));
        let err = client
            .write(Bytes::from_static(b"not line protocol"))
            .await
            .unwrap_err();

        match err {
            InfluxError::Upstream { status, body } => {
                assert_eq!(status, 400);
                assert_eq!(body, "invalid line protocol");
            }
            other => panic!("expected upstream error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_write_maps_connection_failure_to_transport() {
        // Nothing listens on port 1
        let client = InfluxClient::new(&test_config("http://127.0.0.1:1"));
        let err = client
            .write(Bytes::from_static(b"cpu usage=1"))
            .await
            .unwrap_err();

        assert!(matches!(err, InfluxError::Transport(_)));
    }

    #[tokio::test]
    async fn test_health_parses_report() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "name": "influxdb",
                "status": "pass",
                "message": "ready for queries and writes",
            })))
            .mount(&server)
            .await;

        let client = InfluxClient::new(&test_config(&server.uri()));
        let report = client.health().await.unwrap();

        assert!(report.is_pass());
        assert_eq!(report.message.as_deref(), Some("ready for queries and writes"));
    }

    #[test]
    fn test_pass_status_matches_any_casing() {
        for status in ["pass", "PASS", "Pass"] {
            let report = HealthCheck {
                status: status.to_string(),
                message: None,
            };
            assert!(report.is_pass());
        }

        let report = HealthCheck {
            status: "fail".to_string(),
            message: None,
        };
        assert!(!report.is_pass());
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = InfluxClient::new(&test_config("http://localhost:8086/"));
        assert_eq!(client.url, "http://localhost:8086");
    }
}
