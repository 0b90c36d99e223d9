//! LiFi aggregation API client
//!
//! Typed GET requests against the LiFi-style endpoints. No local caching and
//! no automatic retries: every call hits the remote service once and maps the
//! outcome into the shared error taxonomy.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
	header::{HeaderMap, HeaderValue},
	Client, Response, StatusCode,
};
use serde::Deserialize;
use tracing::{debug, warn};

use bridge_types::{
	AggregationApi, ApiError, ApiResult, Chain, ChainsResponse, ConnectionsResponse, Quote,
	QuoteRequest, StatusRequest, StatusResponse,
};

/// Default public endpoint of the LiFi aggregation service
pub const DEFAULT_ENDPOINT: &str = "https://li.quest/v1";

/// Error body shape the service uses for route failures
#[derive(Debug, Deserialize)]
struct ErrorBody {
	message: String,
}

/// HTTP client for the aggregation service
#[derive(Debug, Clone)]
pub struct LifiClient {
	endpoint: String,
	client: Client,
}

impl LifiClient {
	/// Create a client for the given endpoint with the given request timeout
	pub fn new(endpoint: impl Into<String>, timeout_ms: u64) -> ApiResult<Self> {
		let mut headers = HeaderMap::new();
		headers.insert("Accept", HeaderValue::from_static("application/json"));
		headers.insert(
			"User-Agent",
			HeaderValue::from_static("bridge-orchestrator/0.1"),
		);

		let client = Client::builder()
			.default_headers(headers)
			.timeout(Duration::from_millis(timeout_ms))
			.build()
			.map_err(ApiError::Network)?;

		Ok(Self {
			endpoint: endpoint.into(),
			client,
		})
	}

	/// Create a client against the public LiFi endpoint
	pub fn with_default_endpoint(timeout_ms: u64) -> ApiResult<Self> {
		Self::new(DEFAULT_ENDPOINT, timeout_ms)
	}

	/// The configured base endpoint
	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}

	fn url(&self, path: &str) -> String {
		format!("{}/{}", self.endpoint.trim_end_matches('/'), path)
	}

	/// Decode a successful response body, mapping decode failures to
	/// `InvalidResponse`
	async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> ApiResult<T> {
		response
			.json::<T>()
			.await
			.map_err(|e| ApiError::InvalidResponse {
				reason: format!("failed to parse response body: {}", e),
			})
	}
}

#[async_trait]
impl AggregationApi for LifiClient {
	async fn list_chains(&self) -> ApiResult<Vec<Chain>> {
		let url = self.url("chains");
		debug!(%url, "fetching supported chains");

		let response = self
			.client
			.get(&url)
			.send()
			.await
			.map_err(ApiError::Network)?;

		if !response.status().is_success() {
			return Err(ApiError::Http {
				status: response.status().as_u16(),
			});
		}

		let body: ChainsResponse = Self::decode(response).await?;
		debug!(count = body.chains.len(), "fetched chains");
		Ok(body.chains)
	}

	async fn list_connections(
		&self,
		from_chain: u64,
		to_chain: u64,
	) -> ApiResult<ConnectionsResponse> {
		let url = self.url("connections");
		debug!(%url, from_chain, to_chain, "fetching connections");

		let response = self
			.client
			.get(&url)
			.query(&[
				("fromChain", from_chain.to_string()),
				("toChain", to_chain.to_string()),
			])
			.send()
			.await
			.map_err(ApiError::Network)?;

		if !response.status().is_success() {
			return Err(ApiError::Http {
				status: response.status().as_u16(),
			});
		}

		let body: ConnectionsResponse = Self::decode(response).await?;
		debug!(
			connections = body.connections.len(),
			from_chain, to_chain, "fetched connections"
		);
		Ok(body)
	}

	async fn request_quote(&self, request: &QuoteRequest) -> ApiResult<Quote> {
		let url = self.url("quote");
		debug!(
			%url,
			from_chain = request.from_chain,
			to_chain = request.to_chain,
			from_token = %request.from_token,
			to_token = %request.to_token,
			from_amount = %request.from_amount,
			"requesting quote"
		);

		let response = self
			.client
			.get(&url)
			.query(&[
				("fromChain", request.from_chain.to_string()),
				("toChain", request.to_chain.to_string()),
				("fromToken", request.from_token.clone()),
				("toToken", request.to_token.clone()),
				("fromAmount", request.from_amount.to_string()),
				("fromAddress", request.from_address.clone()),
			])
			.send()
			.await
			.map_err(ApiError::Network)?;

		let status = response.status();
		if !status.is_success() {
			// Route failures come back as 4xx with a JSON message body;
			// surface those as displayable quote errors.
			if status.is_client_error() {
				let message = response
					.json::<ErrorBody>()
					.await
					.map(|body| body.message)
					.unwrap_or_else(|_| format!("quote endpoint returned status {}", status));
				warn!(%message, "no viable route for quote request");
				return Err(ApiError::QuoteUnavailable { message });
			}
			return Err(ApiError::Http {
				status: status.as_u16(),
			});
		}

		let quote: Quote = Self::decode(response).await?;
		debug!(
			quote_id = %quote.id,
			tool = %quote.tool,
			to_amount = %quote.estimate.to_amount,
			"received quote"
		);
		Ok(quote)
	}

	async fn get_status(&self, request: &StatusRequest) -> ApiResult<StatusResponse> {
		let url = self.url("status");
		debug!(
			%url,
			bridge = %request.bridge,
			tx_hash = %request.tx_hash,
			"fetching transaction status"
		);

		let response = self
			.client
			.get(&url)
			.query(&[
				("bridge", request.bridge.clone()),
				("fromChain", request.from_chain.to_string()),
				("toChain", request.to_chain.to_string()),
				("txHash", request.tx_hash.clone()),
			])
			.send()
			.await
			.map_err(ApiError::Network)?;

		// The service reports unknown transactions through a NOT_FOUND
		// status body, so only transport-level failures are errors here.
		if !response.status().is_success() && response.status() != StatusCode::NOT_FOUND {
			return Err(ApiError::Http {
				status: response.status().as_u16(),
			});
		}

		let status: StatusResponse = Self::decode(response).await?;
		debug!(status = ?status.status, tx_hash = %request.tx_hash, "fetched status");
		Ok(status)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_client_construction() {
		let client = LifiClient::new("https://li.quest/v1", 5000).unwrap();
		assert_eq!(client.endpoint(), "https://li.quest/v1");

		let client = LifiClient::with_default_endpoint(5000).unwrap();
		assert_eq!(client.endpoint(), DEFAULT_ENDPOINT);
	}

	#[test]
	fn test_url_construction_strips_trailing_slash() {
		let client = LifiClient::new("https://li.quest/v1/", 5000).unwrap();
		assert_eq!(client.url("chains"), "https://li.quest/v1/chains");
		assert_eq!(client.url("status"), "https://li.quest/v1/status");
	}

	#[test]
	fn test_error_body_shape() {
		let body: ErrorBody =
			serde_json::from_str(r#"{"message": "No available quotes for the requested transfer"}"#)
				.unwrap();
		assert!(body.message.contains("No available quotes"));
	}
}
