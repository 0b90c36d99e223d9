//! Blockchain asset/token models

use serde::{Deserialize, Serialize};

/// Sentinel address used by the aggregation service for native assets
pub const NATIVE_TOKEN_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// A fungible asset on a specific chain
///
/// Identified by a lowercase hexadecimal contract address (or the zero-address
/// sentinel for the native asset) plus chain ID. Immutable once fetched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Token {
	/// Contract address (zero address for native tokens)
	pub address: String,
	/// Chain ID where this token exists
	pub chain_id: u64,
	/// Token symbol (e.g., "ETH", "USDC")
	pub symbol: String,
	/// Number of decimal places
	pub decimals: u8,
	/// Human-readable name (e.g., "USD Coin")
	pub name: String,
	/// USD price as reported by the aggregation service
	#[serde(
		default,
		rename = "priceUSD",
		skip_serializing_if = "Option::is_none"
	)]
	pub price_usd: Option<String>,
	/// Identifier used by the service's token selectors
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub coin_key: Option<String>,
	#[serde(
		default,
		rename = "logoURI",
		skip_serializing_if = "Option::is_none"
	)]
	pub logo_uri: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub tags: Option<Vec<String>>,
}

impl Token {
	pub fn new(address: String, chain_id: u64, symbol: String, decimals: u8, name: String) -> Self {
		Self {
			address,
			chain_id,
			symbol,
			decimals,
			name,
			price_usd: None,
			coin_key: None,
			logo_uri: None,
			tags: None,
		}
	}

	/// Whether this token is the chain's native asset
	pub fn is_native(&self) -> bool {
		self.address == NATIVE_TOKEN_ADDRESS
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_native_detection() {
		let eth = Token::new(
			NATIVE_TOKEN_ADDRESS.to_string(),
			1,
			"ETH".to_string(),
			18,
			"Ethereum".to_string(),
		);
		let usdc = Token::new(
			"0x2791bca1f2de4661ed88a30c99a7a9449aa84174".to_string(),
			137,
			"USDC".to_string(),
			6,
			"USD Coin".to_string(),
		);

		assert!(eth.is_native());
		assert!(!usdc.is_native());
	}

	#[test]
	fn test_token_wire_format() {
		let json = r#"{
			"address": "0x2791bca1f2de4661ed88a30c99a7a9449aa84174",
			"chainId": 137,
			"symbol": "USDC",
			"decimals": 6,
			"name": "USD Coin",
			"priceUSD": "1.00",
			"coinKey": "USDC"
		}"#;
		let token: Token = serde_json::from_str(json).unwrap();

		assert_eq!(token.chain_id, 137);
		assert_eq!(token.decimals, 6);
		assert_eq!(token.price_usd.as_deref(), Some("1.00"));
		assert_eq!(token.coin_key.as_deref(), Some("USDC"));
	}
}
