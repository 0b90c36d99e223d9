//! Quote domain model
//!
//! A quote is a priced, executable swap plan returned by the aggregation API
//! for a concrete (chains, tokens, amount, sender) tuple. It is immutable once
//! received and carries the transaction payload used verbatim for submission.

use serde::{Deserialize, Serialize};

use crate::models::{Token, U256};

/// Parameters for the `/quote` endpoint
///
/// `from_amount` is a base-unit integer string, already scaled by the source
/// token's decimals. Scaling is the caller's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
	pub from_chain: u64,
	pub to_chain: u64,
	pub from_token: String,
	pub to_token: String,
	pub from_amount: U256,
	pub from_address: String,
}

/// A priced, executable swap plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
	pub id: String,
	/// Bridge/exchange tool the route runs through, also the key for the
	/// `/status` endpoint
	pub tool: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub tool_details: Option<ToolDetails>,
	pub action: QuoteAction,
	pub estimate: QuoteEstimate,
	/// Ready-to-submit transaction payload; submitted verbatim with no
	/// client-side re-derivation of any field
	pub transaction_request: TransactionRequest,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub integrator: Option<String>,
}

/// The swap the quote prices
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteAction {
	pub from_chain_id: u64,
	pub from_amount: U256,
	pub from_token: Token,
	pub to_chain_id: u64,
	pub to_token: Token,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub slippage: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub from_address: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub to_address: Option<String>,
}

/// Cost and output estimates for the quoted route
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteEstimate {
	pub from_amount: U256,
	pub to_amount: U256,
	pub to_amount_min: U256,
	/// Spender the user must grant an allowance to before the swap can move
	/// their tokens
	pub approval_address: String,
	/// Estimated execution time in seconds
	pub execution_duration: f64,
	#[serde(default)]
	pub fee_costs: Vec<FeeCost>,
	#[serde(default)]
	pub gas_costs: Vec<GasCost>,
	#[serde(
		default,
		rename = "fromAmountUSD",
		skip_serializing_if = "Option::is_none"
	)]
	pub from_amount_usd: Option<String>,
	#[serde(
		default,
		rename = "toAmountUSD",
		skip_serializing_if = "Option::is_none"
	)]
	pub to_amount_usd: Option<String>,
}

/// One fee line item in a quote estimate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeeCost {
	pub name: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	pub amount: U256,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub percentage: Option<String>,
	pub token: Token,
	#[serde(
		default,
		rename = "amountUSD",
		skip_serializing_if = "Option::is_none"
	)]
	pub amount_usd: Option<String>,
}

/// One gas line item in a quote estimate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GasCost {
	#[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
	pub cost_type: Option<String>,
	pub amount: U256,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub price: Option<U256>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub estimate: Option<U256>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub limit: Option<U256>,
	pub token: Token,
	#[serde(
		default,
		rename = "amountUSD",
		skip_serializing_if = "Option::is_none"
	)]
	pub amount_usd: Option<String>,
}

/// Details about the tool the route runs through
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ToolDetails {
	pub key: String,
	pub name: String,
	#[serde(
		default,
		rename = "logoURI",
		skip_serializing_if = "Option::is_none"
	)]
	pub logo_uri: Option<String>,
}

/// The transaction payload the wallet signs and broadcasts
///
/// Numeric fields stay in the hex-string form the service returns them in so
/// the payload reaches the wallet byte-for-byte unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
	pub to: String,
	pub value: String,
	pub data: String,
	pub gas_price: String,
	pub gas_limit: String,
	pub chain_id: u64,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub from: Option<String>,
}
