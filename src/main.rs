//! Bridge Orchestrator
//!
//! Read-only discovery walk against the configured aggregation endpoint:
//! lists supported chains, the token lists for an Ethereum to Polygon
//! transfer, and a sample quote for the first available route. Submission
//! needs a wallet connector and is driven through
//! [`bridge_orchestrator::OrchestratorBuilder`] by embedding code.

use bridge_orchestrator::{
	init_tracing, load_config, AggregationApi, LifiClient, QuoteRequest, U256,
};
use tracing::{info, warn};

const DEMO_ADDRESS: &str = "0x552008c0f6870c2f77e5cc1d2eb9bdff03e30ea0";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	// Load .env file if it exists
	dotenvy::dotenv().ok();

	let settings = load_config().unwrap_or_default();
	init_tracing(&settings.logging);

	info!(endpoint = %settings.api.endpoint, "querying aggregation service");
	let client = LifiClient::new(settings.api.endpoint.clone(), settings.api.request_timeout_ms)?;

	let chains = client.list_chains().await?;
	info!("Supported chains: {}", chains.len());
	for chain in chains.iter().take(10) {
		info!("  - {} (id {})", chain.name, chain.id);
	}

	let connections = client.list_connections(1, 137).await?;
	let connection = match connections.first() {
		Some(connection) => connection,
		None => {
			info!("Ethereum -> Polygon: no routes available");
			return Ok(());
		},
	};
	info!(
		"Ethereum -> Polygon: {} source tokens, {} destination tokens",
		connection.from_tokens.len(),
		connection.to_tokens.len()
	);

	let (from_token, to_token) = match (connection.from_tokens.first(), connection.to_tokens.first())
	{
		(Some(from), Some(to)) => (from, to),
		_ => {
			info!("route has no selectable tokens, skipping quote");
			return Ok(());
		},
	};

	let request = QuoteRequest {
		from_chain: from_token.chain_id,
		to_chain: to_token.chain_id,
		from_token: from_token.address.clone(),
		to_token: to_token.address.clone(),
		from_amount: U256::parse_units("1", from_token.decimals)?,
		from_address: DEMO_ADDRESS.to_string(),
	};

	info!(
		"Requesting sample quote: 1 {} -> {}",
		from_token.symbol, to_token.symbol
	);
	match client.request_quote(&request).await {
		Ok(quote) => {
			info!(
				"Quote via {}: receive {} {} (min {}), ~{}s",
				quote.tool,
				quote.estimate.to_amount.format_units(to_token.decimals),
				to_token.symbol,
				quote.estimate.to_amount_min.format_units(to_token.decimals),
				quote.estimate.execution_duration
			);
		},
		Err(err) if err.is_quote_unavailable() => {
			warn!("No viable route: {}", err);
		},
		Err(err) => return Err(err.into()),
	}

	Ok(())
}
