//! HTTP client tests against the in-process mock aggregation server

mod mocks;

use bridge_orchestrator::{AggregationApi, ApiError, LifiClient, QuoteRequest, TxStatus, U256};
use mocks::fixtures;
use mocks::test_server::{ServerState, TestServer};

fn client_for(server: &TestServer) -> LifiClient {
	LifiClient::new(server.base_url.clone(), 2_000).expect("client construction")
}

fn quote_request() -> QuoteRequest {
	QuoteRequest {
		from_chain: 1,
		to_chain: 137,
		from_token: fixtures::USDC_MAINNET.to_string(),
		to_token: fixtures::USDC_POLYGON.to_string(),
		from_amount: U256::from("1500000"),
		from_address: fixtures::SENDER.to_string(),
	}
}

#[tokio::test]
async fn test_list_chains() {
	let server = TestServer::spawn().await;
	let client = client_for(&server);

	let chains = client.list_chains().await.unwrap();

	assert_eq!(chains.len(), 2);
	assert_eq!(chains[0].id, 1);
	assert_eq!(chains[0].name, "Ethereum");
	assert_eq!(chains[1].id, 137);
}

#[tokio::test]
async fn test_list_connections() {
	let server = TestServer::spawn().await;
	let client = client_for(&server);

	let connections = client.list_connections(1, 137).await.unwrap();
	let connection = connections.first().unwrap();

	assert_eq!(connection.from_chain_id, 1);
	assert_eq!(connection.to_chain_id, 137);
	assert_eq!(connection.from_tokens[0].address, fixtures::USDC_MAINNET);
	assert_eq!(connection.from_tokens[0].decimals, 6);
}

#[tokio::test]
async fn test_empty_connections_is_not_an_error() {
	let server = TestServer::spawn_with(ServerState {
		empty_connections: true,
		..Default::default()
	})
	.await;
	let client = client_for(&server);

	let connections = client.list_connections(1, 99999).await.unwrap();

	assert!(connections.first().is_none());
	assert!(connections.connections.is_empty());
}

#[tokio::test]
async fn test_request_quote_sends_wire_parameters() {
	let server = TestServer::spawn().await;
	let client = client_for(&server);

	let quote = client.request_quote(&quote_request()).await.unwrap();

	assert_eq!(quote.tool, "hop");
	assert_eq!(quote.estimate.approval_address, fixtures::APPROVAL_ADDRESS);
	assert_eq!(quote.action.from_amount.as_str(), "1500000");

	let query = server.state.last_quote_query().unwrap();
	assert_eq!(query.get("fromChain").map(String::as_str), Some("1"));
	assert_eq!(query.get("toChain").map(String::as_str), Some("137"));
	assert_eq!(
		query.get("fromToken").map(String::as_str),
		Some(fixtures::USDC_MAINNET)
	);
	assert_eq!(
		query.get("fromAmount").map(String::as_str),
		Some("1500000")
	);
	assert_eq!(
		query.get("fromAddress").map(String::as_str),
		Some(fixtures::SENDER)
	);
}

#[tokio::test]
async fn test_no_route_maps_to_quote_unavailable() {
	let server = TestServer::spawn_with(ServerState {
		quote_available: false,
		..Default::default()
	})
	.await;
	let client = client_for(&server);

	let err = client.request_quote(&quote_request()).await.unwrap_err();

	assert!(err.is_quote_unavailable());
	assert!(err.to_string().contains("No available quotes"));
}

#[tokio::test]
async fn test_get_status() {
	let server = TestServer::spawn().await;
	let client = client_for(&server);

	let status = client
		.get_status(&bridge_orchestrator::StatusRequest {
			bridge: "hop".to_string(),
			from_chain: 1,
			to_chain: 137,
			tx_hash: "0x5e4d00000000".to_string(),
		})
		.await
		.unwrap();

	assert_eq!(status.status, TxStatus::Done);
	assert!(status.is_terminal());
}

#[tokio::test]
async fn test_reexported_http_client_reaches_the_server() {
	// Downstream code building on the facade uses its re-exported reqwest
	let server = TestServer::spawn().await;

	let body: bridge_orchestrator::serde_json::Value = bridge_orchestrator::reqwest::Client::new()
		.get(format!("{}/chains", server.base_url))
		.send()
		.await
		.unwrap()
		.json()
		.await
		.unwrap();

	assert_eq!(body["chains"][0]["id"], 1);
}

#[tokio::test]
async fn test_server_error_maps_to_http() {
	let server = TestServer::spawn_with(ServerState {
		status_failing: true,
		..Default::default()
	})
	.await;
	let client = client_for(&server);

	let err = client
		.get_status(&bridge_orchestrator::StatusRequest {
			bridge: "hop".to_string(),
			from_chain: 1,
			to_chain: 137,
			tx_hash: "0x5e4d00000000".to_string(),
		})
		.await
		.unwrap_err();

	assert!(matches!(err, ApiError::Http { status: 500 }));
}
