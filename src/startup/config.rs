//! Dashboard configuration.
//!
//! Values come from the environment via [`DashboardConfig::from_env`]; the
//! layout and resize tunables are only adjustable through the builder.

use std::path::PathBuf;
use std::time::Duration;

/// Remote endpoint used when `CHEMDASH_API_ENDPOINT` is not set.
pub const DEFAULT_API_ENDPOINT: &str = "https://api.jsonbin.io/v3/b/68918782f7e7a370d1f4029d";

/// Terminal width (columns) at or above which the layout is "desktop".
pub const DEFAULT_DESKTOP_BREAKPOINT: u16 = 100;

/// Quiet period before a resize signal fires.
pub const DEFAULT_RESIZE_DEBOUNCE: Duration = Duration::from_millis(100);

/// Minimum spacing between two resize signals.
pub const DEFAULT_RESIZE_RATE_FLOOR: Duration = Duration::from_millis(100);

pub const ENV_API_ENDPOINT: &str = "CHEMDASH_API_ENDPOINT";
pub const ENV_FALLBACK_PATH: &str = "CHEMDASH_FALLBACK_PATH";
pub const ENV_SHOW_DATA_SOURCE: &str = "CHEMDASH_SHOW_DATA_SOURCE";
pub const ENV_LOG: &str = "CHEMDASH_LOG";

/// Runtime configuration for the dashboard.
///
/// # Example
///
/// ```ignore
/// use chemdash::startup::DashboardConfig;
///
/// let config = DashboardConfig::default()
///     .with_api_endpoint("http://localhost:8080/b/1")
///     .with_desktop_breakpoint(120);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Remote data endpoint
    pub api_endpoint: String,
    /// Read the fallback snapshot from this file instead of the bundled one
    pub fallback_path: Option<PathBuf>,
    /// Show where the data came from in the header
    pub show_data_source: bool,
    /// Tracing filter directive
    pub log_filter: String,
    pub desktop_breakpoint: u16,
    pub resize_debounce: Duration,
    pub resize_rate_floor: Duration,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            fallback_path: None,
            show_data_source: false,
            log_filter: "info".to_string(),
            desktop_breakpoint: DEFAULT_DESKTOP_BREAKPOINT,
            resize_debounce: DEFAULT_RESIZE_DEBOUNCE,
            resize_rate_floor: DEFAULT_RESIZE_RATE_FLOOR,
        }
    }
}

impl DashboardConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.api_endpoint = endpoint.into();
        self
    }

    pub fn with_fallback_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.fallback_path = Some(path.into());
        self
    }

    pub fn with_show_data_source(mut self, show: bool) -> Self {
        self.show_data_source = show;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_desktop_breakpoint(mut self, columns: u16) -> Self {
        self.desktop_breakpoint = columns;
        self
    }

    pub fn with_resize_debounce(mut self, debounce: Duration) -> Self {
        self.resize_debounce = debounce;
        self
    }

    pub fn with_resize_rate_floor(mut self, floor: Duration) -> Self {
        self.resize_rate_floor = floor;
        self
    }

    /// Build a config from `CHEMDASH_*` environment variables.
    ///
    /// Empty values are treated as unset.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(endpoint) = env_non_empty(ENV_API_ENDPOINT) {
            config = config.with_api_endpoint(endpoint);
        }
        if let Some(path) = env_non_empty(ENV_FALLBACK_PATH) {
            config = config.with_fallback_path(path);
        }
        if let Some(flag) = env_non_empty(ENV_SHOW_DATA_SOURCE) {
            config = config.with_show_data_source(parse_flag(&flag));
        }
        if let Some(filter) = env_non_empty(ENV_LOG) {
            config = config.with_log_filter(filter);
        }

        config
    }
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
