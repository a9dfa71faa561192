use std::ops::Range;

/// Region the dashboard stack is deployed to
pub const DEFAULT_AWS_REGION: &str = "us-east-1";

/// Identity-provider user pool
pub const DEFAULT_USER_POOL_ID: &str = "us-east-1_7bPnuc8m8";

/// Identity-provider app client
pub const DEFAULT_CLIENT_ID: &str = "66sq2g4tpeehsqi0im0lf32p4f";

/// Base URL of the fleet API
pub const DEFAULT_API_BASE_URL: &str = "https://qiaz9dfl08.execute-api.us-east-1.amazonaws.com/test-70v";

/// Default UI theme
pub const DEFAULT_UI_THEME: &str = "modern";

/// Whether dashboard views refresh on their own
pub const DEFAULT_AUTO_REFRESH: bool = true;

/// Dashboard refresh interval (milliseconds)
pub const DEFAULT_REFRESH_INTERVAL_MS: u64 = 30_000;

/// Retries for a failed API call before the UI gives up
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Simulated vehicle speed, km/h, half-open
pub const DEFAULT_SPEED_RANGE: Range<u32> = 20..100;

/// Simulated engine rpm, half-open
pub const DEFAULT_RPM_RANGE: Range<u32> = 1500..3500;

/// Directory under the platform config dir holding our files
pub const CONFIG_DIR_NAME: &str = "fleet-mock";

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "config.json";
