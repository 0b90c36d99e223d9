//! In-process mock of the aggregation service
//!
//! Serves the four endpoints the orchestrator uses with scriptable behavior:
//! connection emptiness, quote availability, how many PENDING status replies
//! precede DONE, and hard status failures.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use tokio::task::JoinHandle;

use super::fixtures;

/// Scriptable behavior knobs, shared with the running server
pub struct ServerState {
	pub empty_connections: bool,
	pub quote_available: bool,
	pub status_failing: bool,
	/// PENDING replies returned before the first DONE
	pub pending_before_done: u32,
	pub status_calls: AtomicU32,
	pub last_quote_query: Mutex<Option<HashMap<String, String>>>,
}

impl Default for ServerState {
	fn default() -> Self {
		Self {
			empty_connections: false,
			quote_available: true,
			status_failing: false,
			pending_before_done: 0,
			status_calls: AtomicU32::new(0),
			last_quote_query: Mutex::new(None),
		}
	}
}

impl ServerState {
	/// Total calls the `/status` endpoint has received
	pub fn status_calls(&self) -> u32 {
		self.status_calls.load(Ordering::SeqCst)
	}

	/// Query parameters of the most recent `/quote` call
	pub fn last_quote_query(&self) -> Option<HashMap<String, String>> {
		self.last_quote_query.lock().unwrap().clone()
	}
}

/// Mock aggregation server bound to an ephemeral port
pub struct TestServer {
	pub base_url: String,
	pub state: Arc<ServerState>,
	handle: JoinHandle<()>,
}

impl TestServer {
	/// Spawn a server with default behavior (routes exist, quote available,
	/// first status reply is DONE)
	#[allow(dead_code)]
	pub async fn spawn() -> Self {
		Self::spawn_with(ServerState::default()).await
	}

	/// Spawn a server with the given behavior
	pub async fn spawn_with(state: ServerState) -> Self {
		let state = Arc::new(state);
		let app = Router::new()
			.route("/chains", get(get_chains))
			.route("/connections", get(get_connections))
			.route("/quote", get(get_quote))
			.route("/status", get(get_status))
			.with_state(state.clone());

		let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
			.await
			.expect("bind test port");
		let addr = listener.local_addr().unwrap();
		let base_url = format!("http://{}", addr);

		let handle = tokio::spawn(async move {
			let _ = axum::serve(listener, app).await;
		});

		// Give server time to start
		tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

		Self {
			base_url,
			state,
			handle,
		}
	}

	#[allow(dead_code)]
	pub fn abort(self) {
		self.handle.abort();
	}
}

async fn get_chains(State(_): State<Arc<ServerState>>) -> impl IntoResponse {
	Json(fixtures::chains_body())
}

async fn get_connections(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
	if state.empty_connections {
		Json(fixtures::empty_connections_body())
	} else {
		Json(fixtures::connections_body())
	}
}

async fn get_quote(
	State(state): State<Arc<ServerState>>,
	Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
	let from_amount = params
		.get("fromAmount")
		.cloned()
		.unwrap_or_else(|| "0".to_string());
	*state.last_quote_query.lock().unwrap() = Some(params);

	if state.quote_available {
		(StatusCode::OK, Json(fixtures::quote_body(&from_amount)))
	} else {
		(StatusCode::NOT_FOUND, Json(fixtures::no_route_body()))
	}
}

async fn get_status(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
	let call = state.status_calls.fetch_add(1, Ordering::SeqCst);

	if state.status_failing {
		return (
			StatusCode::INTERNAL_SERVER_ERROR,
			Json(serde_json::json!({"message": "internal error"})),
		);
	}

	if call < state.pending_before_done {
		(StatusCode::OK, Json(fixtures::status_body("PENDING")))
	} else {
		(StatusCode::OK, Json(fixtures::status_body("DONE")))
	}
}
