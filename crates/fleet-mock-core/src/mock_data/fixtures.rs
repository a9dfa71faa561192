//! Fixture store backing the mock backend
//!
//! The seed dataset is embedded in the binary and parsed once per process.
//! Other fixture documents with the same shape can be loaded from disk.
//! A store is never written after construction; callers share it behind `Arc`.
//!
//! Counters and gauge readings (`fuel_level`, `mileage`, `rpm`, `speed`,
//! `temperature`, `oil_pressure`, ...) are whole numbers in fixture documents;
//! a fractional value there is a parse error. Coordinates, distances, fees
//! and efficiencies accept fractions.

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

use crate::error::Result;
use crate::models::{
    Approval, Contract, FleetDashboard, Notification, Report, Telemetry, Vehicle,
};

const SEED_DOCUMENT: &str = include_str!("../../fixtures/seed.json");

static SEED: OnceCell<Arc<FixtureStore>> = OnceCell::new();

/// Read-only fixture dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureStore {
    dashboard: FleetDashboard,
    vehicles: Vec<Vehicle>,
    telemetry: Telemetry,
    reports: Report,
    contracts: Vec<Contract>,
    approvals: Vec<Approval>,
    notifications: Vec<Notification>,
}

impl FixtureStore {
    /// Process-wide seed store, parsed on first use
    pub fn seed() -> Result<Arc<FixtureStore>> {
        SEED.get_or_try_init(|| {
            let store = Self::from_json(SEED_DOCUMENT)?;
            tracing::info!(
                "Loaded seed fixtures: {} vehicles, {} contracts, {} approvals, {} notifications",
                store.vehicles.len(),
                store.contracts.len(),
                store.approvals.len(),
                store.notifications.len()
            );
            Ok(Arc::new(store))
        })
        .map(Arc::clone)
    }

    /// Parse a fixture document
    ///
    /// Live timestamps missing from the document are stamped with the
    /// current time.
    pub fn from_json(document: &str) -> Result<Self> {
        Ok(serde_json::from_str(document)?)
    }

    /// Load a fixture document from disk
    pub fn load(path: &Path) -> Result<Self> {
        let document = std::fs::read_to_string(path)?;
        let store = Self::from_json(&document)?;
        tracing::info!("Loaded fixtures from {}", path.display());
        Ok(store)
    }

    pub fn dashboard(&self) -> &FleetDashboard {
        &self.dashboard
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Vehicle whose `vehicle_id` equals `id`
    pub fn vehicle(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|vehicle| vehicle.vehicle_id == id)
    }

    /// The stored telemetry frame, before any simulation
    pub fn telemetry(&self) -> &Telemetry {
        &self.telemetry
    }

    pub fn reports(&self) -> &Report {
        &self.reports
    }

    pub fn contracts(&self) -> &[Contract] {
        &self.contracts
    }

    pub fn approvals(&self) -> &[Approval] {
        &self.approvals
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }
}
