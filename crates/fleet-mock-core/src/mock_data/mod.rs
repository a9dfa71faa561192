//! Mock backend for the fleet dashboard
//!
//! Serves fixture data in place of the real API so the dashboard can be
//! developed and demoed without a deployment:
//! - `fixtures`: the read-only dataset
//! - `source`: clock and randomness behind simulated telemetry
//! - `provider`: resource dispatch

mod fixtures;
mod provider;
mod source;

pub use fixtures::FixtureStore;
pub use provider::{FetchParams, FetchResponse, MockDataProvider};
pub use source::{LiveSource, SeededSource, TelemetryRanges, TelemetrySource};
