//! Transaction status models
//!
//! Lifecycle state of a submitted swap as reported by the aggregation API's
//! `/status` endpoint. Polled until the terminal `DONE` value is observed.

use serde::{Deserialize, Serialize};

use crate::models::Token;

/// Parameters for the `/status` endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatusRequest {
	/// Tool identifier from the quote (named `bridge` on the wire)
	pub bridge: String,
	pub from_chain: u64,
	pub to_chain: u64,
	pub tx_hash: String,
}

/// Overall status code for a tracked transaction
///
/// Only `Done` is terminal: every other value, including `Failed`, keeps the
/// poll loop alive so a temporarily mis-reported transaction is not abandoned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TxStatus {
	NotFound,
	Invalid,
	Pending,
	Done,
	Failed,
	#[serde(other)]
	Unknown,
}

impl TxStatus {
	/// Whether this status ends polling
	pub fn is_terminal(&self) -> bool {
		matches!(self, TxStatus::Done)
	}
}

/// One side (sending or receiving) of a tracked transaction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatusSide {
	pub chain_id: u64,
	pub tx_hash: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub tx_link: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub amount: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub token: Option<Token>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub gas_price: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub gas_used: Option<String>,
}

/// Response from the `/status` endpoint
///
/// An unrecognized or still-pending transaction is reported through a
/// non-terminal `status`, never as an HTTP error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
	pub status: TxStatus,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub substatus: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub tool: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub sending: Option<StatusSide>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub receiving: Option<StatusSide>,
}

impl StatusResponse {
	/// Whether this response ends polling
	pub fn is_terminal(&self) -> bool {
		self.status.is_terminal()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_only_done_is_terminal() {
		assert!(TxStatus::Done.is_terminal());
		assert!(!TxStatus::Pending.is_terminal());
		assert!(!TxStatus::NotFound.is_terminal());
		assert!(!TxStatus::Invalid.is_terminal());
		assert!(!TxStatus::Failed.is_terminal());
		assert!(!TxStatus::Unknown.is_terminal());
	}

	#[test]
	fn test_status_wire_format() {
		let json = r#"{
			"status": "PENDING",
			"substatus": "WAIT_DESTINATION_TRANSACTION",
			"tool": "hop",
			"sending": {
				"chainId": 1,
				"txHash": "0xabc",
				"amount": "1500000000000000000",
				"gasUsed": "21000"
			}
		}"#;
		let status: StatusResponse = serde_json::from_str(json).unwrap();

		assert_eq!(status.status, TxStatus::Pending);
		assert!(!status.is_terminal());
		assert_eq!(status.sending.unwrap().tx_hash, "0xabc");
	}

	#[test]
	fn test_unknown_status_value() {
		let json = r#"{"status": "SOMETHING_NEW"}"#;
		let status: StatusResponse = serde_json::from_str(json).unwrap();

		assert_eq!(status.status, TxStatus::Unknown);
		assert!(!status.is_terminal());
	}
}
