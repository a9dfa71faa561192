use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Range;
use std::path::{Path, PathBuf};

use super::defaults;
use crate::error::{AppError, Result};
use crate::mock_data::TelemetryRanges;
use crate::routes::Route;

/// Application configuration
///
/// Provides centralized configuration management with:
/// - Serde support for loading from JSON files; every section is optional
/// - Builder pattern for customization
/// - Defaults matching the deployed dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// API endpoint and identity-provider settings
    pub aws: AwsConfig,

    /// Dashboard modules keyed by short name (`client`, `sales`)
    pub modules: BTreeMap<String, ModuleConfig>,

    /// UI behavior
    pub ui: UiConfig,

    /// Mock backend settings
    pub mock: MockConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AwsConfig {
    pub region: String,
    pub user_pool_id: String,
    pub client_id: String,
    pub api_base_url: String,
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self {
            region: defaults::DEFAULT_AWS_REGION.to_string(),
            user_pool_id: defaults::DEFAULT_USER_POOL_ID.to_string(),
            client_id: defaults::DEFAULT_CLIENT_ID.to_string(),
            api_base_url: defaults::DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

/// A dashboard area and the API paths it calls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleConfig {
    pub name: String,
    pub description: String,
    pub endpoints: Vec<String>,
}

impl ModuleConfig {
    fn new(name: &str, description: &str, endpoints: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            endpoints: endpoints.iter().map(|e| e.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub theme: String,
    pub auto_refresh: bool,
    pub refresh_interval_ms: u64,
    pub max_retries: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: defaults::DEFAULT_UI_THEME.to_string(),
            auto_refresh: defaults::DEFAULT_AUTO_REFRESH,
            refresh_interval_ms: defaults::DEFAULT_REFRESH_INTERVAL_MS,
            max_retries: defaults::DEFAULT_MAX_RETRIES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MockConfig {
    /// Fixture document to serve instead of the embedded seed data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixtures_path: Option<PathBuf>,

    /// Simulated speed bounds, km/h
    pub speed_range: Range<u32>,

    /// Simulated rpm bounds
    pub rpm_range: Range<u32>,

    /// Seed for reproducible telemetry; live randomness when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            fixtures_path: None,
            speed_range: defaults::DEFAULT_SPEED_RANGE,
            rpm_range: defaults::DEFAULT_RPM_RANGE,
            seed: None,
        }
    }
}

impl MockConfig {
    pub fn telemetry_ranges(&self) -> Result<TelemetryRanges> {
        TelemetryRanges::new(self.speed_range.clone(), self.rpm_range.clone())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let mut modules = BTreeMap::new();
        modules.insert(
            "client".to_string(),
            ModuleConfig::new(
                "Client Module",
                "Fleet management and monitoring for clients",
                &["/fleet/dashboard", "/vehicles", "/reports", "/notifications"],
            ),
        );
        modules.insert(
            "sales".to_string(),
            ModuleConfig::new(
                "Sales Module",
                "Inventory and sales contract management",
                &["/vehicles", "/vehicles/{id}/telemetry", "/contracts", "/approvals"],
            ),
        );

        Self {
            aws: AwsConfig::default(),
            modules,
            ui: UiConfig::default(),
            mock: MockConfig::default(),
        }
    }
}

impl AppConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method for UI configuration
    pub fn with_ui_config(mut self, config: UiConfig) -> Self {
        self.ui = config;
        self
    }

    /// Builder method for mock backend configuration
    pub fn with_mock_config(mut self, config: MockConfig) -> Self {
        self.mock = config;
        self
    }

    /// Parse and validate a JSON configuration document
    pub fn from_json(document: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(document)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let document = std::fs::read_to_string(path).map_err(|e| {
            AppError::ConfigError(format!("Failed to read {}: {e}", path.display()))
        })?;
        let config = Self::from_json(&document)?;
        tracing::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Per-user configuration file, e.g. `~/.config/fleet-mock/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| {
            dir.join(defaults::CONFIG_DIR_NAME)
                .join(defaults::CONFIG_FILE_NAME)
        })
    }

    /// Load from `path` if given, else from the default path if a file is
    /// there, else fall back to built-in defaults
    ///
    /// An explicitly given path must exist.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(default_path) if default_path.is_file() => Self::load(&default_path),
            _ => {
                tracing::debug!("No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Check values the rest of the crate relies on
    pub fn validate(&self) -> Result<()> {
        if !self.aws.api_base_url.starts_with("http://")
            && !self.aws.api_base_url.starts_with("https://")
        {
            return Err(AppError::ConfigError(format!(
                "api_base_url must be an http(s) URL, got '{}'",
                self.aws.api_base_url
            )));
        }

        if self.ui.auto_refresh && self.ui.refresh_interval_ms == 0 {
            return Err(AppError::ConfigError(
                "refresh_interval_ms must be positive when auto_refresh is on".to_string(),
            ));
        }

        self.mock.telemetry_ranges()?;
        Ok(())
    }

    /// Keys of the modules that list `endpoint`
    pub fn modules_for_endpoint(&self, endpoint: &str) -> Vec<&str> {
        self.modules
            .iter()
            .filter(|(_, module)| module.endpoints.iter().any(|e| e == endpoint))
            .map(|(key, _)| key.as_str())
            .collect()
    }

    /// Every configured endpoint paired with its resolution
    pub fn resolve_endpoints(&self) -> Vec<(&str, &str, Result<Route>)> {
        self.modules
            .iter()
            .flat_map(|(key, module)| {
                module
                    .endpoints
                    .iter()
                    .map(move |endpoint| (key.as_str(), endpoint.as_str(), Route::resolve(endpoint)))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::ResourceType;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::new();

        assert_eq!(config.aws.region, "us-east-1");
        assert!(config.aws.api_base_url.starts_with("https://"));
        assert_eq!(config.ui.theme, "modern");
        assert!(config.ui.auto_refresh);
        assert_eq!(config.ui.refresh_interval_ms, 30_000);
        assert_eq!(config.ui.max_retries, 3);
        assert_eq!(config.mock.speed_range, 20..100);
        assert_eq!(config.mock.rpm_range, 1500..3500);
        assert!(config.mock.fixtures_path.is_none());
        assert!(config.mock.seed.is_none());
        assert_eq!(config.modules.len(), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_every_default_endpoint_resolves() {
        let config = AppConfig::default();
        let resolved = config.resolve_endpoints();
        assert_eq!(resolved.len(), 8);

        for (module, endpoint, route) in resolved {
            assert!(route.is_ok(), "{module}: {endpoint} did not resolve");
        }
    }

    #[test]
    fn test_template_endpoint_resolves_to_telemetry() {
        let config = AppConfig::default();
        let (_, _, route) = config
            .resolve_endpoints()
            .into_iter()
            .find(|(_, endpoint, _)| *endpoint == "/vehicles/{id}/telemetry")
            .unwrap();
        assert_eq!(route.unwrap().resource, ResourceType::Telemetry);
    }

    #[test]
    fn test_modules_for_endpoint() {
        let config = AppConfig::default();

        assert_eq!(config.modules_for_endpoint("/vehicles"), vec!["client", "sales"]);
        assert_eq!(config.modules_for_endpoint("/contracts"), vec!["sales"]);
        assert!(config.modules_for_endpoint("/invoices").is_empty());
    }

    #[test]
    fn test_partial_document_fills_defaults() {
        let config =
            AppConfig::from_json(r#"{"ui":{"theme":"dark"},"mock":{"seed":5}}"#).unwrap();

        assert_eq!(config.ui.theme, "dark");
        assert_eq!(config.ui.refresh_interval_ms, 30_000);
        assert_eq!(config.mock.seed, Some(5));
        assert_eq!(config.mock.speed_range, 20..100);
        assert_eq!(config.aws, AwsConfig::default());
        assert_eq!(config.modules.len(), 2);
    }

    #[test]
    fn test_json_round_trip() {
        let config = AppConfig::default().with_mock_config(MockConfig {
            seed: Some(99),
            ..MockConfig::default()
        });

        let json = serde_json::to_string(&config).unwrap();
        let parsed = AppConfig::from_json(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.aws.api_base_url = "ftp://example.com".to_string();
        assert!(matches!(config.validate(), Err(AppError::ConfigError(_))));

        let config = AppConfig::default().with_ui_config(UiConfig {
            refresh_interval_ms: 0,
            ..UiConfig::default()
        });
        assert!(matches!(config.validate(), Err(AppError::ConfigError(_))));

        let err = AppConfig::from_json(r#"{"mock":{"speed_range":{"start":50,"end":10}}}"#)
            .unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"aws":{{"region":"eu-west-1"}}}}"#).unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.aws.region, "eu-west-1");
        assert_eq!(config.aws.client_id, defaults::DEFAULT_CLIENT_ID);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");

        let err = AppConfig::load_or_default(Some(&missing)).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }

    #[test]
    fn test_malformed_file_is_serialization_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, AppError::SerializationError(_)));
    }
}
