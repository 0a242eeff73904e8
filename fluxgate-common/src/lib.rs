//! Shared building blocks for the Fluxgate relay services.
//!
//! This crate contains the pieces shared between:
//! - fluxgate-api (line-protocol relay plus health/readiness probes)
//! - fluxgate-backend (line-protocol relay only)
//!
//! Both services resolve a [`Config`] from the environment once at startup
//! and talk to InfluxDB through an [`InfluxClient`].

pub mod config;
pub mod influx;

pub use config::Config;
pub use influx::{HealthCheck, InfluxClient, InfluxError};
