//! Wire-format fixtures for the mock aggregation server

use serde_json::{json, Value};

pub const SENDER: &str = "0x552008c0f6870c2f77e5cc1d2eb9bdff03e30ea0";
pub const APPROVAL_ADDRESS: &str = "0x362fa9d0bca5d19f743db50738345ce2b40ec99f";
pub const USDC_MAINNET: &str = "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48";
pub const USDC_POLYGON: &str = "0x2791bca1f2de4661ed88a30c99a7a9449aa84174";

pub fn chains_body() -> Value {
	json!({
		"chains": [
			{"id": 1, "name": "Ethereum", "key": "eth", "coin": "ETH", "mainnet": true},
			{"id": 137, "name": "Polygon", "key": "pol", "coin": "MATIC", "mainnet": true}
		]
	})
}

fn usdc_mainnet() -> Value {
	json!({
		"address": USDC_MAINNET,
		"chainId": 1,
		"symbol": "USDC",
		"decimals": 6,
		"name": "USD Coin"
	})
}

fn usdc_polygon() -> Value {
	json!({
		"address": USDC_POLYGON,
		"chainId": 137,
		"symbol": "USDC",
		"decimals": 6,
		"name": "USD Coin (PoS)"
	})
}

pub fn connections_body() -> Value {
	json!({
		"connections": [
			{
				"fromChainId": 1,
				"toChainId": 137,
				"fromTokens": [usdc_mainnet()],
				"toTokens": [usdc_polygon()]
			}
		]
	})
}

pub fn empty_connections_body() -> Value {
	json!({ "connections": [] })
}

/// A quote for `from_amount` base units of mainnet USDC bridged to Polygon
pub fn quote_body(from_amount: &str) -> Value {
	json!({
		"id": "0x5a6b...e1f2",
		"tool": "hop",
		"toolDetails": {"key": "hop", "name": "Hop"},
		"action": {
			"fromChainId": 1,
			"fromAmount": from_amount,
			"fromToken": usdc_mainnet(),
			"toChainId": 137,
			"toToken": usdc_polygon(),
			"slippage": 0.003,
			"fromAddress": SENDER
		},
		"estimate": {
			"fromAmount": from_amount,
			"toAmount": "1495000",
			"toAmountMin": "1490515",
			"approvalAddress": APPROVAL_ADDRESS,
			"executionDuration": 300,
			"feeCosts": [],
			"gasCosts": []
		},
		"transactionRequest": {
			"to": APPROVAL_ADDRESS,
			"value": "0x0",
			"data": "0xdeadbeef",
			"gasPrice": "0x77359400",
			"gasLimit": "0x7a120",
			"chainId": 1
		}
	})
}

pub fn no_route_body() -> Value {
	json!({ "message": "No available quotes for the requested transfer" })
}

pub fn status_body(status: &str) -> Value {
	json!({
		"status": status,
		"substatus": if status == "DONE" { "COMPLETED" } else { "WAIT_DESTINATION_TRANSACTION" },
		"tool": "hop",
		"sending": {
			"chainId": 1,
			"txHash": "0x5e4d00000000",
			"amount": "1500000"
		}
	})
}
