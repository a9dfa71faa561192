use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::error::{AppError, Result};
use crate::models::{
    Approval, Contract, FleetDashboard, Notification, Report, Telemetry, Vehicle,
};
use crate::resource::ResourceType;
use crate::routes::Route;

use super::fixtures::FixtureStore;
use super::source::{LiveSource, SeededSource, TelemetryRanges, TelemetrySource};

/// Optional retrieval parameters
///
/// Only existence is checked: an empty string counts as not supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchParams {
    /// Select a single vehicle (`vehicles`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Override the vehicle the telemetry frame reports for (`telemetry`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<String>,
    /// Keep only vehicles in this status (`vehicles` list)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl FetchParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_vehicle_id(mut self, vehicle_id: impl Into<String>) -> Self {
        self.vehicle_id = Some(vehicle_id.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// `id`, if supplied and non-empty
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    /// `vehicle_id`, if supplied and non-empty
    pub fn vehicle_id(&self) -> Option<&str> {
        self.vehicle_id.as_deref().filter(|id| !id.is_empty())
    }

    /// `status`, if supplied and non-empty
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref().filter(|status| !status.is_empty())
    }
}

/// Result of a retrieval
///
/// Fixture-backed variants borrow from the store; only telemetry is an
/// owned, simulated copy. Serializes to the exact JSON shape the dashboard
/// expects: bare records and lists, `null` for a missing vehicle, wrapper
/// objects for contracts and approvals, `{"error": ...}` for unknown types.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FetchResponse<'a> {
    Dashboard(&'a FleetDashboard),
    Vehicles(Vec<&'a Vehicle>),
    Vehicle(Option<&'a Vehicle>),
    Telemetry(Telemetry),
    Reports(&'a Report),
    Contracts { contracts: &'a [Contract] },
    Approvals { pending_approvals: &'a [Approval] },
    Notifications(&'a [Notification]),
    Error { error: String },
}

impl FetchResponse<'_> {
    pub fn error(err: AppError) -> Self {
        FetchResponse::Error {
            error: err.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, FetchResponse::Error { .. })
    }

    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Mock backend for the fleet dashboard
///
/// Stateless apart from the shared, read-only fixture store: each call is
/// independent and may run from any thread.
pub struct MockDataProvider {
    store: Arc<FixtureStore>,
    source: Box<dyn TelemetrySource>,
    ranges: TelemetryRanges,
}

impl MockDataProvider {
    /// Provider over the seed fixtures with live telemetry simulation
    pub fn new() -> Result<Self> {
        Ok(Self::from_store(FixtureStore::seed()?))
    }

    /// Provider over an explicit fixture store
    pub fn from_store(store: Arc<FixtureStore>) -> Self {
        Self {
            store,
            source: Box::new(LiveSource),
            ranges: TelemetryRanges::default(),
        }
    }

    /// Provider as described by the `mock` section of the configuration
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let store = match &config.mock.fixtures_path {
            Some(path) => Arc::new(FixtureStore::load(path)?),
            None => FixtureStore::seed()?,
        };

        let provider = Self::from_store(store).with_ranges(config.mock.telemetry_ranges()?);

        Ok(match config.mock.seed {
            Some(seed) => {
                tracing::debug!("Simulating telemetry with seed {seed}");
                provider.with_source(SeededSource::new(seed))
            }
            None => provider,
        })
    }

    /// Builder method for the telemetry clock/random source
    pub fn with_source<S: TelemetrySource + 'static>(mut self, source: S) -> Self {
        self.source = Box::new(source);
        self
    }

    /// Builder method for the simulated speed and rpm bounds
    pub fn with_ranges(mut self, ranges: TelemetryRanges) -> Self {
        self.ranges = ranges;
        self
    }

    pub fn store(&self) -> &FixtureStore {
        &self.store
    }

    /// Retrieve a resource by its string tag
    ///
    /// Unknown tags produce [`FetchResponse::Error`]; this never fails.
    pub fn fetch(&self, resource_type: &str, params: &FetchParams) -> FetchResponse<'_> {
        match resource_type.parse::<ResourceType>() {
            Ok(resource) => self.fetch_resource(resource, params),
            Err(err) => {
                tracing::warn!("Rejected fetch: {err}");
                FetchResponse::error(err)
            }
        }
    }

    /// Retrieve a resource by its dashboard API path, e.g. `/vehicles/VH001/telemetry`
    pub fn fetch_path(&self, path: &str) -> FetchResponse<'_> {
        match Route::resolve(path) {
            Ok(route) => self.fetch_resource(route.resource, &route.params),
            Err(err) => {
                tracing::warn!("Rejected fetch: {err}");
                FetchResponse::error(err)
            }
        }
    }

    /// Typed dispatch behind [`fetch`](Self::fetch)
    pub fn fetch_resource(&self, resource: ResourceType, params: &FetchParams) -> FetchResponse<'_> {
        tracing::debug!("Fetching {resource} with {params:?}");

        match resource {
            ResourceType::Dashboard => FetchResponse::Dashboard(self.store.dashboard()),
            ResourceType::Vehicles => match params.id() {
                Some(id) => FetchResponse::Vehicle(self.store.vehicle(id)),
                None => FetchResponse::Vehicles(
                    self.store
                        .vehicles()
                        .iter()
                        .filter(|vehicle| params.status().map_or(true, |s| vehicle.status == s))
                        .collect(),
                ),
            },
            ResourceType::Telemetry => FetchResponse::Telemetry(self.simulate_telemetry(params)),
            ResourceType::Reports => FetchResponse::Reports(self.store.reports()),
            ResourceType::Contracts => FetchResponse::Contracts {
                contracts: self.store.contracts(),
            },
            ResourceType::Approvals => FetchResponse::Approvals {
                pending_approvals: self.store.approvals(),
            },
            ResourceType::Notifications => {
                FetchResponse::Notifications(self.store.notifications())
            }
        }
    }

    /// Copy of the stored frame with fresh timestamp, speed and rpm
    fn simulate_telemetry(&self, params: &FetchParams) -> Telemetry {
        let mut frame = self.store.telemetry().clone();

        if let Some(vehicle_id) = params.vehicle_id() {
            frame.vehicle_id = vehicle_id.to_string();
        }
        frame.timestamp = self.source.now();
        frame.location.speed = self.source.sample(self.ranges.speed.clone());
        frame.engine.rpm = self.source.sample(self.ranges.rpm.clone());

        frame
    }
}
