//! Fleet Mock Core Library
//!
//! A fixture-backed stand-in for the fleet dashboard's backend API.
//! The dashboard asks for a resource by tag (`vehicles`, `telemetry`, ...)
//! or by API path and gets back the same JSON shapes the real service
//! returns, with telemetry readings simulated on every call.
//!
//! # Modules
//!
//! - [`mock_data`] - Fixture store, telemetry simulation and the provider
//! - [`models`] - Fleet record types
//! - [`resource`] - Supported resource tags
//! - [`routes`] - Dashboard API path resolution
//! - [`config`] - Dashboard and mock backend configuration
//! - [`error`] - Error types

pub mod config;
pub mod error;
pub mod mock_data;
pub mod models;
pub mod resource;
pub mod routes;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{AppError, Result};
pub use mock_data::{
    FetchParams, FetchResponse, FixtureStore, LiveSource, MockDataProvider, SeededSource,
    TelemetryRanges, TelemetrySource,
};
pub use resource::ResourceType;
pub use routes::Route;
