//! Fleet dashboard record types
//!
//! Plain data records matching the JSON the dashboard consumes. Fixture
//! timestamps are kept as the ISO-8601 strings they were authored with;
//! fields that are "live" (stamped at load or per call) are `DateTime<Utc>`.
//! Load-time stamps serialize with millisecond precision like a browser's
//! `toISOString`; per-call telemetry stamps carry nanoseconds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fleet overview shown on the dashboard landing page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetDashboard {
    pub summary: FleetSummary,
    pub recent_alerts: Vec<Alert>,
    pub vehicle_status_distribution: StatusDistribution,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetSummary {
    pub total_vehicles: u32,
    pub active_vehicles: u32,
    pub inactive_vehicles: u32,
    pub alerts_count: u32,
    /// Stamped with the fixture load time when the document omits it
    #[serde(default = "Utc::now", with = "iso_millis")]
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub vehicle_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    pub timestamp: String,
    pub severity: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusDistribution {
    pub active: u32,
    pub maintenance: u32,
    pub inactive: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub vehicle_id: String,
    pub make: String,
    pub model: String,
    pub year: u16,
    pub status: String,
    pub location: VehicleLocation,
    pub last_update: String,
    /// `None` while the vehicle has no assigned driver (e.g. in the workshop)
    pub driver: Option<String>,
    pub fuel_level: u32,
    pub mileage: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleLocation {
    pub lat: f64,
    pub lng: f64,
    pub address: String,
}

/// One telemetry frame as sent by a vehicle's tracking unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Telemetry {
    pub vehicle_id: String,
    /// Nanosecond precision so back-to-back frames stay distinguishable
    #[serde(default = "Utc::now", with = "iso_nanos")]
    pub timestamp: DateTime<Utc>,
    pub location: TelemetryLocation,
    pub engine: EngineReadings,
    pub diagnostics: Diagnostics,
    pub driver_behavior: DriverBehavior,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryLocation {
    pub lat: f64,
    pub lng: f64,
    /// km/h
    pub speed: u32,
    /// Degrees from north
    pub heading: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineReadings {
    pub rpm: u32,
    pub temperature: i32,
    pub oil_pressure: u32,
    pub fuel_level: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostics {
    pub engine_status: String,
    pub brake_status: String,
    pub transmission_status: String,
    pub battery_voltage: f64,
    pub odometer: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverBehavior {
    pub harsh_acceleration: u32,
    pub harsh_braking: u32,
    pub speeding_events: u32,
    /// Seconds
    pub idle_time: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub report_type: String,
    #[serde(default = "Utc::now", with = "iso_millis")]
    pub generated_at: DateTime<Utc>,
    pub period: ReportPeriod,
    pub summary: ReportSummary,
    pub top_vehicles: Vec<VehicleRanking>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportPeriod {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_distance: f64,
    pub total_fuel_consumed: f64,
    pub average_fuel_efficiency: f64,
    pub total_driving_time: f64,
    pub maintenance_alerts: u32,
    pub safety_incidents: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRanking {
    pub vehicle_id: String,
    pub distance: f64,
    pub fuel_efficiency: f64,
    pub driver_score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub id: String,
    pub client_name: String,
    pub client_id: String,
    pub vehicle_count: u32,
    pub contract_type: String,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
    pub monthly_fee: f64,
    pub services: Vec<String>,
    pub contact_person: ContactPerson,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactPerson {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// A change request on a contract waiting for a manager's decision
///
/// The optional fields depend on `kind`: vehicle counts for
/// modifications, plans for upgrades, end dates and discount for renewals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Approval {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub contract_id: String,
    pub client_name: String,
    pub requested_by: String,
    pub request_date: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_vehicles: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_vehicles: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_plan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_plan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_cost: Option<f64>,
    /// Percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_applied: Option<u32>,
    pub status: String,
    pub priority: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub message: String,
    pub timestamp: String,
    pub read: bool,
    pub priority: String,
    pub vehicle_id: Option<String>,
}

/// ISO-8601 with millisecond precision and a `Z` suffix, the format browsers emit
pub(crate) mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        super::parse_rfc3339(deserializer)
    }
}

/// ISO-8601 with nanosecond precision and a `Z` suffix
pub(crate) mod iso_nanos {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Nanos, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        super::parse_rfc3339(deserializer)
    }
}

fn parse_rfc3339<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(serde::de::Error::custom)
}
