//! Bridge Configuration
//!
//! File-based configuration for the bridge orchestrator: aggregation
//! endpoint, polling limits, approval policy and logging.

pub mod loader;
pub mod settings;

pub use loader::load_config;
pub use settings::{
	ApiSettings, ApprovalSettings, LogFormat, LoggingSettings, PollingSettings, Settings,
};
