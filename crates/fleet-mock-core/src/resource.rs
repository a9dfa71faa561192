//! Resource types served by the mock backend

use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Resource tag selecting which fixture (or transformation of it) to return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceType {
    /// Fleet overview: summary counters, recent alerts, status distribution
    Dashboard,
    /// Vehicle list, or a single vehicle when an `id` is given
    Vehicles,
    /// Simulated live telemetry for one vehicle
    Telemetry,
    /// Weekly fleet report
    Reports,
    /// Client contracts, wrapped under `contracts`
    Contracts,
    /// Pending approvals, wrapped under `pending_approvals`
    Approvals,
    /// User notifications
    Notifications,
}

impl ResourceType {
    /// Every supported resource, in dashboard menu order
    pub const ALL: [ResourceType; 7] = [
        ResourceType::Dashboard,
        ResourceType::Vehicles,
        ResourceType::Telemetry,
        ResourceType::Reports,
        ResourceType::Contracts,
        ResourceType::Approvals,
        ResourceType::Notifications,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Dashboard => "dashboard",
            ResourceType::Vehicles => "vehicles",
            ResourceType::Telemetry => "telemetry",
            ResourceType::Reports => "reports",
            ResourceType::Contracts => "contracts",
            ResourceType::Approvals => "approvals",
            ResourceType::Notifications => "notifications",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = AppError;

    /// Tags are matched exactly, the dashboard always sends lowercase
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceType::ALL
            .into_iter()
            .find(|resource| resource.as_str() == s)
            .ok_or_else(|| AppError::UnknownResourceType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_round_trips_through_from_str() {
        for resource in ResourceType::ALL {
            let parsed: ResourceType = resource.to_string().parse().unwrap();
            assert_eq!(parsed, resource);
        }
    }

    #[test]
    fn test_unknown_tag() {
        let err = "bogus".parse::<ResourceType>().unwrap_err();
        assert_eq!(err, AppError::UnknownResourceType("bogus".to_string()));
    }

    #[test]
    fn test_tags_are_case_sensitive() {
        assert!("Vehicles".parse::<ResourceType>().is_err());
        assert!("".parse::<ResourceType>().is_err());
    }
}
