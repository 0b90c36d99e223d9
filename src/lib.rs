//! Bridge Orchestrator Library
//!
//! Client-side orchestration of cross-chain token swaps over a LiFi-style
//! aggregation API: chain and token discovery, quoting, allowance handling,
//! transaction submission and bounded status polling.

use std::sync::Arc;

use tracing::info;

// Core domain types - the most commonly used types
pub use bridge_types::{
	chrono,
	// External dependencies for convenience
	serde_json,
	AggregationApi,
	AllowanceState,
	AmountError,
	// Error types
	ApiError,
	ApiResult,
	Chain,
	Connection,
	ConnectionsResponse,
	// Primary domain entities
	Quote,
	QuoteRequest,
	StatusRequest,
	StatusResponse,
	Token,
	TransactionRequest,
	TxStatus,
	U256,
	// Wallet seam
	WalletConnector,
	WalletError,
	NATIVE_TOKEN_ADDRESS,
};

// Client layer
pub use bridge_client::{LifiClient, DEFAULT_ENDPOINT};

// Service layer
pub use bridge_service::{
	ApprovalStrategy, PollHandle, PollingConfig, PollingError, SequencerError, SwapPhase,
	SwapSequencer, SwapState,
};

// Config
pub use bridge_config::{load_config, LoggingSettings, Settings};

// Module aliases for direct access to each layer
pub mod models {
	pub use bridge_types::*;
}

pub mod client {
	pub use bridge_client::*;
}

pub mod service {
	pub use bridge_service::*;
}

pub mod config {
	pub use bridge_config::*;
}

pub mod mocks;

// Re-export external dependencies for downstream use
pub use async_trait;
pub use reqwest;

/// Builder wiring settings, API client and wallet into a [`SwapSequencer`]
pub struct OrchestratorBuilder {
	settings: Option<Settings>,
	api: Option<Arc<dyn AggregationApi>>,
	wallet: Option<Arc<dyn WalletConnector>>,
}

impl OrchestratorBuilder {
	pub fn new() -> Self {
		Self {
			settings: None,
			api: None,
			wallet: None,
		}
	}

	/// Create a builder from loaded configuration
	pub fn from_config(settings: Settings) -> Self {
		Self {
			settings: Some(settings),
			api: None,
			wallet: None,
		}
	}

	/// Set custom settings
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Use a custom aggregation API implementation instead of the HTTP client
	pub fn with_api(mut self, api: Arc<dyn AggregationApi>) -> Self {
		self.api = Some(api);
		self
	}

	/// Set the wallet connector the sequencer signs through
	pub fn with_wallet(mut self, wallet: Arc<dyn WalletConnector>) -> Self {
		self.wallet = Some(wallet);
		self
	}

	/// Get the current settings
	pub fn settings(&self) -> Option<&Settings> {
		self.settings.as_ref()
	}

	/// Build the sequencer
	///
	/// A wallet connector is required. Without a custom API implementation a
	/// [`LifiClient`] is built against the configured endpoint.
	pub fn build(self) -> Result<SwapSequencer, Box<dyn std::error::Error>> {
		let settings = self.settings.unwrap_or_default();

		let api = match self.api {
			Some(api) => api,
			None => Arc::new(LifiClient::new(
				settings.api.endpoint.clone(),
				settings.api.request_timeout_ms,
			)?),
		};
		let wallet = self
			.wallet
			.ok_or("a wallet connector is required to build the orchestrator")?;

		info!(
			endpoint = %settings.api.endpoint,
			strategy = ?settings.approval.strategy,
			"orchestrator configured"
		);

		Ok(SwapSequencer::new(
			api,
			wallet,
			settings.approval.strategy,
			settings.polling_config(),
		))
	}
}

impl Default for OrchestratorBuilder {
	fn default() -> Self {
		Self::new()
	}
}

/// Initialize tracing with configuration-based settings
pub fn init_tracing(settings: &LoggingSettings) {
	use bridge_config::LogFormat;

	// An env-var filter wins over the configured level
	let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&settings.level));

	match settings.format {
		LogFormat::Json => {
			let subscriber = tracing_subscriber::fmt().json().with_env_filter(env_filter);
			if settings.structured {
				subscriber.with_target(true).with_thread_ids(true).init();
			} else {
				subscriber.init();
			}
		},
		LogFormat::Pretty => {
			let subscriber = tracing_subscriber::fmt()
				.pretty()
				.with_env_filter(env_filter);
			if settings.structured {
				subscriber.with_target(true).with_thread_ids(true).init();
			} else {
				subscriber.init();
			}
		},
		LogFormat::Compact => {
			let subscriber = tracing_subscriber::fmt()
				.compact()
				.with_env_filter(env_filter);
			if settings.structured {
				subscriber.with_target(true).with_thread_ids(true).init();
			} else {
				subscriber.init();
			}
		},
	}

	info!(
		"Logging configuration applied: level={}, format={:?}, structured={}",
		settings.level, settings.format, settings.structured
	);
}
