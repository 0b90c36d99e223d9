//! Canned chains and tokens shared by the unit tests in this crate

use bridge_types::{Chain, Token, NATIVE_TOKEN_ADDRESS};

pub(crate) fn ethereum() -> Chain {
	Chain::new(1, "Ethereum".to_string())
}

pub(crate) fn polygon() -> Chain {
	Chain::new(137, "Polygon".to_string())
}

pub(crate) fn eth() -> Token {
	Token::new(
		NATIVE_TOKEN_ADDRESS.to_string(),
		1,
		"ETH".to_string(),
		18,
		"Ethereum".to_string(),
	)
}

pub(crate) fn usdc_polygon() -> Token {
	Token::new(
		"0x2791bca1f2de4661ed88a30c99a7a9449aa84174".to_string(),
		137,
		"USDC".to_string(),
		6,
		"USD Coin".to_string(),
	)
}
