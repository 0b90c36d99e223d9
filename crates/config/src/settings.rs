//! Configuration settings structures

use std::time::Duration;

use serde::{Deserialize, Serialize};

use bridge_service::{ApprovalStrategy, PollingConfig};

/// Main application settings
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
	pub api: ApiSettings,
	pub polling: PollingSettings,
	pub approval: ApprovalSettings,
	pub logging: LoggingSettings,
}

/// Aggregation API client configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ApiSettings {
	/// Base URL of the aggregation service
	pub endpoint: String,
	/// Request timeout for HTTP calls
	pub request_timeout_ms: u64,
}

impl Default for ApiSettings {
	fn default() -> Self {
		Self {
			endpoint: "https://li.quest/v1".to_string(),
			request_timeout_ms: 10_000,
		}
	}
}

/// Status polling configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct PollingSettings {
	/// Delay between status calls in milliseconds
	pub interval_ms: u64,
	/// Ceiling on total status calls; omit to poll forever
	pub max_attempts: Option<u32>,
	/// Consecutive failed status calls tolerated before giving up
	pub max_consecutive_failures: u32,
}

impl Default for PollingSettings {
	fn default() -> Self {
		let defaults = PollingConfig::default();
		Self {
			interval_ms: defaults.interval.as_millis() as u64,
			max_attempts: defaults.max_attempts,
			max_consecutive_failures: defaults.max_consecutive_failures,
		}
	}
}

impl From<PollingSettings> for PollingConfig {
	fn from(settings: PollingSettings) -> Self {
		Self {
			interval: Duration::from_millis(settings.interval_ms),
			max_attempts: settings.max_attempts,
			max_consecutive_failures: settings.max_consecutive_failures,
		}
	}
}

/// Token approval policy configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ApprovalSettings {
	pub strategy: ApprovalStrategy,
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
	pub structured: bool,
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Pretty,
			structured: false,
		}
	}
}

/// Log format options
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	Compact,
}

impl Settings {
	/// The polling config these settings describe
	pub fn polling_config(&self) -> PollingConfig {
		self.polling.clone().into()
	}

	/// The request timeout these settings describe
	pub fn request_timeout(&self) -> Duration {
		Duration::from_millis(self.api.request_timeout_ms)
	}
}
