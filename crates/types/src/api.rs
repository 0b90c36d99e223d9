//! Aggregation API trait and error taxonomy
//!
//! The service layer depends on this seam rather than a concrete HTTP client
//! so tests can script responses without a network.

use async_trait::async_trait;
use thiserror::Error;

use crate::connections::ConnectionsResponse;
use crate::models::Chain;
use crate::quotes::{Quote, QuoteRequest};
use crate::status::{StatusRequest, StatusResponse};

/// Result type for aggregation API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors from talking to the aggregation service
///
/// Nothing here is retried automatically: transport and HTTP failures are
/// propagated for display, and a missing route is captured as displayable
/// state rather than aborting the session.
#[derive(Error, Debug)]
pub enum ApiError {
	#[error("transport error: {0}")]
	Network(#[from] reqwest::Error),

	#[error("aggregation endpoint returned status {status}")]
	Http { status: u16 },

	#[error("no viable route: {message}")]
	QuoteUnavailable { message: String },

	#[error("invalid response: {reason}")]
	InvalidResponse { reason: String },
}

impl ApiError {
	/// Whether this error should be captured as displayable quote state
	/// instead of propagating
	pub fn is_quote_unavailable(&self) -> bool {
		matches!(self, ApiError::QuoteUnavailable { .. })
	}
}

/// Typed interface to a LiFi-style swap-aggregation service
///
/// All operations are network-bound, stateless and uncached; every call hits
/// the remote service.
#[async_trait]
pub trait AggregationApi: Send + Sync {
	/// Fetch all supported chains
	async fn list_chains(&self) -> ApiResult<Vec<Chain>>;

	/// Fetch the token lists valid for one (from, to) chain pair
	///
	/// A pair with zero routes yields an empty connections list, not an
	/// error.
	async fn list_connections(
		&self,
		from_chain: u64,
		to_chain: u64,
	) -> ApiResult<ConnectionsResponse>;

	/// Request an executable quote for the given parameters
	///
	/// A no-route response maps to [`ApiError::QuoteUnavailable`].
	async fn request_quote(&self, request: &QuoteRequest) -> ApiResult<Quote>;

	/// Look up the lifecycle status of a submitted transaction
	///
	/// An unrecognized or pending transaction yields a non-terminal status
	/// object, not an error.
	async fn get_status(&self, request: &StatusRequest) -> ApiResult<StatusResponse>;
}
