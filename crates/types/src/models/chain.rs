//! Blockchain network models

use serde::{Deserialize, Serialize};

/// A network supported by the aggregation service
///
/// Fetched wholesale from the `/chains` endpoint at startup and treated as
/// immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Chain {
	/// Chain ID (e.g., 1 for Ethereum mainnet, 137 for Polygon)
	pub id: u64,
	/// Human-readable name (e.g., "Ethereum", "Polygon")
	pub name: String,
	/// Short key used by the aggregation service (e.g., "eth", "pol")
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub key: Option<String>,
	/// Native coin symbol (e.g., "ETH", "MATIC")
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub coin: Option<String>,
	/// Whether this is a mainnet chain
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub mainnet: Option<bool>,
	#[serde(
		default,
		rename = "logoURI",
		skip_serializing_if = "Option::is_none"
	)]
	pub logo_uri: Option<String>,
}

impl Chain {
	pub fn new(id: u64, name: String) -> Self {
		Self {
			id,
			name,
			key: None,
			coin: None,
			mainnet: None,
			logo_uri: None,
		}
	}
}

/// Envelope returned by the `/chains` endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChainsResponse {
	pub chains: Vec<Chain>,
}
