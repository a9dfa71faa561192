//! Application configuration
//!
//! This module defines configuration types and default values:
//! - `app_config`: Configuration structure and loading
//! - `defaults`: Default configuration values

pub mod app_config;
pub mod defaults;

// Re-export configuration types
pub use app_config::{AppConfig, AwsConfig, MockConfig, ModuleConfig, UiConfig};
