//! Connection models for chain-pair token availability

use serde::{Deserialize, Serialize};

use crate::models::Token;

/// Tokens valid as source and destination for one (from, to) chain pair
///
/// Recomputed whenever either chain selection changes; a fresh response
/// always replaces the previous one wholesale, never merges into it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
	pub from_chain_id: u64,
	pub to_chain_id: u64,
	pub from_tokens: Vec<Token>,
	pub to_tokens: Vec<Token>,
}

/// Envelope returned by the `/connections` endpoint
///
/// A pair with zero routes yields an empty `connections` list, not an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ConnectionsResponse {
	pub connections: Vec<Connection>,
}

impl ConnectionsResponse {
	/// The first connection, which carries the token lists the selectors use
	pub fn first(&self) -> Option<&Connection> {
		self.connections.first()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_empty_connections_deserialize() {
		let json = r#"{"connections": []}"#;
		let response: ConnectionsResponse = serde_json::from_str(json).unwrap();

		assert!(response.connections.is_empty());
		assert!(response.first().is_none());
	}

	#[test]
	fn test_connection_token_lists() {
		let json = r#"{
			"connections": [{
				"fromChainId": 1,
				"toChainId": 137,
				"fromTokens": [{
					"address": "0x0000000000000000000000000000000000000000",
					"chainId": 1,
					"symbol": "ETH",
					"decimals": 18,
					"name": "Ethereum"
				}],
				"toTokens": [{
					"address": "0x2791bca1f2de4661ed88a30c99a7a9449aa84174",
					"chainId": 137,
					"symbol": "USDC",
					"decimals": 6,
					"name": "USD Coin"
				}]
			}]
		}"#;
		let response: ConnectionsResponse = serde_json::from_str(json).unwrap();
		let connection = response.first().unwrap();

		assert_eq!(connection.from_chain_id, 1);
		assert_eq!(connection.to_chain_id, 137);
		assert_eq!(connection.from_tokens[0].symbol, "ETH");
		assert_eq!(connection.to_tokens[0].symbol, "USDC");
	}
}
