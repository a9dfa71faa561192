//! Dashboard API paths
//!
//! Maps the REST paths the dashboard modules call onto a resource and its
//! parameters, so the provider can answer them directly.

use crate::error::{AppError, Result};
use crate::mock_data::FetchParams;
use crate::resource::ResourceType;

/// A resolved API path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub resource: ResourceType,
    pub params: FetchParams,
}

impl Route {
    fn new(resource: ResourceType) -> Self {
        Self {
            resource,
            params: FetchParams::default(),
        }
    }

    /// Resolve a path such as `/vehicles/VH001/telemetry`
    ///
    /// One leading and one trailing slash are optional. Template segments
    /// like `{id}` resolve as if the parameter were not supplied. Of the
    /// query string only `status` is honored, as a filter on `/vehicles`;
    /// other keys are ignored.
    pub fn resolve(path: &str) -> Result<Self> {
        let unknown = || AppError::UnknownEndpoint(path.to_string());

        let without_fragment = path.split('#').next().unwrap_or_default();
        let (path_part, query) = match without_fragment.split_once('?') {
            Some((path_part, query)) => (path_part, Some(query)),
            None => (without_fragment, None),
        };
        let trimmed = path_part.strip_prefix('/').unwrap_or(path_part);
        let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);

        let segments: Vec<&str> = trimmed.split('/').collect();
        if segments.iter().any(|segment| segment.is_empty()) {
            return Err(unknown());
        }

        let route = match segments.as_slice() {
            ["fleet", "dashboard"] => Self::new(ResourceType::Dashboard),
            ["vehicles"] => Self {
                resource: ResourceType::Vehicles,
                params: FetchParams {
                    status: query.and_then(|q| query_param(q, "status")),
                    ..FetchParams::default()
                },
            },
            ["vehicles", id] => Self {
                resource: ResourceType::Vehicles,
                params: FetchParams {
                    id: path_param(id),
                    ..FetchParams::default()
                },
            },
            ["vehicles", id, "telemetry"] => Self {
                resource: ResourceType::Telemetry,
                params: FetchParams {
                    vehicle_id: path_param(id),
                    ..FetchParams::default()
                },
            },
            ["reports"] => Self::new(ResourceType::Reports),
            ["contracts"] => Self::new(ResourceType::Contracts),
            ["approvals"] => Self::new(ResourceType::Approvals),
            ["notifications"] => Self::new(ResourceType::Notifications),
            _ => return Err(unknown()),
        };

        Ok(route)
    }
}

fn path_param(segment: &str) -> Option<String> {
    if segment.starts_with('{') && segment.ends_with('}') {
        None
    } else {
        Some(segment.to_string())
    }
}

/// First value of `key` in a `k=v&k=v` query string
fn query_param(query: &str, key: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .map(|(_, value)| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_paths() {
        let cases = [
            ("/fleet/dashboard", ResourceType::Dashboard),
            ("/vehicles", ResourceType::Vehicles),
            ("/reports", ResourceType::Reports),
            ("/contracts", ResourceType::Contracts),
            ("/approvals", ResourceType::Approvals),
            ("/notifications", ResourceType::Notifications),
        ];

        for (path, resource) in cases {
            let route = Route::resolve(path).unwrap();
            assert_eq!(route.resource, resource, "{path}");
            assert_eq!(route.params, FetchParams::default(), "{path}");
        }
    }

    #[test]
    fn test_vehicle_path() {
        let route = Route::resolve("/vehicles/VH001").unwrap();
        assert_eq!(route.resource, ResourceType::Vehicles);
        assert_eq!(route.params.id(), Some("VH001"));
    }

    #[test]
    fn test_telemetry_path() {
        let route = Route::resolve("/vehicles/VH032/telemetry").unwrap();
        assert_eq!(route.resource, ResourceType::Telemetry);
        assert_eq!(route.params.vehicle_id(), Some("VH032"));
        assert_eq!(route.params.id(), None);
    }

    #[test]
    fn test_template_placeholder_is_absent() {
        let route = Route::resolve("/vehicles/{id}/telemetry").unwrap();
        assert_eq!(route.resource, ResourceType::Telemetry);
        assert_eq!(route.params.vehicle_id(), None);
    }

    #[test]
    fn test_trailing_slash_and_query_ignored() {
        let route = Route::resolve("fleet/dashboard/").unwrap();
        assert_eq!(route.resource, ResourceType::Dashboard);

        let route = Route::resolve("/reports?from=2025-01-17#top").unwrap();
        assert_eq!(route.resource, ResourceType::Reports);
        assert_eq!(route.params, FetchParams::default());

        let route = Route::resolve("/contracts#pending").unwrap();
        assert_eq!(route.resource, ResourceType::Contracts);
    }

    #[test]
    fn test_status_query_filters_vehicles() {
        let route = Route::resolve("/vehicles/?page=2&status=active").unwrap();
        assert_eq!(route.resource, ResourceType::Vehicles);
        assert_eq!(route.params.id(), None);
        assert_eq!(route.params.status(), Some("active"));

        let route = Route::resolve("/vehicles?status=maintenance#list").unwrap();
        assert_eq!(route.params.status(), Some("maintenance"));

        let route = Route::resolve("/vehicles?page=2").unwrap();
        assert_eq!(route.params.status(), None);
    }

    #[test]
    fn test_status_query_ignored_elsewhere() {
        let route = Route::resolve("/vehicles/VH001?status=active").unwrap();
        assert_eq!(route.params.id(), Some("VH001"));
        assert_eq!(route.params.status(), None);
    }

    #[test]
    fn test_empty_interior_segments_rejected() {
        for path in ["/vehicles//telemetry", "//fleet///dashboard", "//vehicles", "/vehicles//"] {
            assert_eq!(
                Route::resolve(path).unwrap_err(),
                AppError::UnknownEndpoint(path.to_string()),
                "{path}"
            );
        }
    }

    #[test]
    fn test_unknown_paths() {
        for path in [
            "",
            "/",
            "/dashboard",
            "/vehicles/VH001/trips",
            "/invoices",
            "/vehicles//telemetry",
        ] {
            assert_eq!(
                Route::resolve(path).unwrap_err(),
                AppError::UnknownEndpoint(path.to_string())
            );
        }
    }
}
