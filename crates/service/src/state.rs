//! Swap orchestration state
//!
//! A plain value container for the user's current selections and the results
//! of each aggregation-API call. Mutated only through explicit setters so the
//! invariants around chain changes and stale responses live in one place.

use tracing::debug;

use bridge_types::{Chain, ConnectionsResponse, Quote, StatusResponse, Token};

/// Tracing target for structured logging
const TRACING_TARGET: &str = "bridge_orchestrator::swap_state";

/// Selection and fetch-result state for one swap session
#[derive(Debug, Default)]
pub struct SwapState {
	// Current selections
	from_chain: Option<u64>,
	to_chain: Option<u64>,
	from_token: Option<Token>,
	to_token: Option<Token>,
	from_amount: String,

	// Last-fetched results
	chains: Vec<Chain>,
	connections: Option<ConnectionsResponse>,
	from_tokens: Vec<Token>,
	to_tokens: Vec<Token>,
	quote: Option<Quote>,
	quote_error: Option<String>,
	status: Option<StatusResponse>,

	// Monotonically increasing connection-fetch generation. Responses
	// carrying an older generation are stale and must be discarded.
	generation: u64,
}

impl SwapState {
	pub fn new() -> Self {
		Self::default()
	}

	// Selections

	pub fn from_chain(&self) -> Option<u64> {
		self.from_chain
	}

	pub fn to_chain(&self) -> Option<u64> {
		self.to_chain
	}

	pub fn from_token(&self) -> Option<&Token> {
		self.from_token.as_ref()
	}

	pub fn to_token(&self) -> Option<&Token> {
		self.to_token.as_ref()
	}

	pub fn from_amount(&self) -> &str {
		&self.from_amount
	}

	// Fetched results

	pub fn chains(&self) -> &[Chain] {
		&self.chains
	}

	pub fn connections(&self) -> Option<&ConnectionsResponse> {
		self.connections.as_ref()
	}

	pub fn from_tokens(&self) -> &[Token] {
		&self.from_tokens
	}

	pub fn to_tokens(&self) -> &[Token] {
		&self.to_tokens
	}

	pub fn quote(&self) -> Option<&Quote> {
		self.quote.as_ref()
	}

	pub fn quote_error(&self) -> Option<&str> {
		self.quote_error.as_deref()
	}

	pub fn status(&self) -> Option<&StatusResponse> {
		self.status.as_ref()
	}

	/// The generation the next connection response must carry to be applied
	pub fn current_generation(&self) -> u64 {
		self.generation
	}

	// Setters

	pub fn set_chains(&mut self, chains: Vec<Chain>) {
		self.chains = chains;
	}

	/// Select the source chain, returning the generation for the connection
	/// refetch this selection requires
	pub fn select_from_chain(&mut self, chain_id: u64) -> u64 {
		self.from_chain = Some(chain_id);
		self.invalidate_quote();
		self.bump_generation()
	}

	/// Select the destination chain, returning the generation for the
	/// connection refetch this selection requires
	pub fn select_to_chain(&mut self, chain_id: u64) -> u64 {
		self.to_chain = Some(chain_id);
		self.invalidate_quote();
		self.bump_generation()
	}

	/// Apply a connection response fetched under `generation`
	///
	/// Stale responses (older generation) are dropped so a slow response for
	/// an earlier chain pair cannot overwrite newer state. Token selections
	/// absent from the fresh lists are cleared. Returns whether the response
	/// was applied.
	pub fn apply_connections(&mut self, generation: u64, response: ConnectionsResponse) -> bool {
		if generation != self.generation {
			debug!(
				target: TRACING_TARGET,
				stale_generation = generation,
				current_generation = self.generation,
				"discarding stale connection response"
			);
			return false;
		}

		match response.first() {
			Some(connection) => {
				self.from_tokens = connection.from_tokens.clone();
				self.to_tokens = connection.to_tokens.clone();
			},
			None => {
				self.from_tokens.clear();
				self.to_tokens.clear();
			},
		}
		self.connections = Some(response);

		// Selections must stay within the fresh token lists
		if let Some(token) = &self.from_token {
			if !Self::contains_address(&self.from_tokens, &token.address) {
				debug!(
					target: TRACING_TARGET,
					address = %token.address,
					"clearing source token no longer present in connection"
				);
				self.from_token = None;
			}
		}
		if let Some(token) = &self.to_token {
			if !Self::contains_address(&self.to_tokens, &token.address) {
				debug!(
					target: TRACING_TARGET,
					address = %token.address,
					"clearing destination token no longer present in connection"
				);
				self.to_token = None;
			}
		}

		true
	}

	/// Select a source token from the fetched list by address
	///
	/// Returns false when the address is not in the current list.
	pub fn select_from_token(&mut self, address: &str) -> bool {
		match self.from_tokens.iter().find(|t| t.address == address) {
			Some(token) => {
				self.from_token = Some(token.clone());
				self.invalidate_quote();
				true
			},
			None => false,
		}
	}

	/// Select a destination token from the fetched list by address
	pub fn select_to_token(&mut self, address: &str) -> bool {
		match self.to_tokens.iter().find(|t| t.address == address) {
			Some(token) => {
				self.to_token = Some(token.clone());
				self.invalidate_quote();
				true
			},
			None => false,
		}
	}

	/// Set the human-readable source amount (e.g. "1.5")
	pub fn set_from_amount(&mut self, amount: impl Into<String>) {
		self.from_amount = amount.into();
		self.invalidate_quote();
	}

	/// Whether the quote action is available: both tokens selected and a
	/// non-empty amount entered
	pub fn ready_for_quote(&self) -> bool {
		self.from_token.is_some() && self.to_token.is_some() && !self.from_amount.is_empty()
	}

	pub fn set_quote(&mut self, quote: Quote) {
		self.quote = Some(quote);
		self.quote_error = None;
	}

	pub fn set_quote_error(&mut self, message: impl Into<String>) {
		self.quote_error = Some(message.into());
		self.quote = None;
	}

	/// Clear the quote and quote error
	///
	/// An already-active status poll from a previously submitted transaction
	/// is unrelated state and stays untouched.
	pub fn reset_quote(&mut self) {
		self.quote = None;
		self.quote_error = None;
	}

	pub fn set_status(&mut self, status: StatusResponse) {
		self.status = Some(status);
	}

	fn invalidate_quote(&mut self) {
		if self.quote.is_some() || self.quote_error.is_some() {
			debug!(target: TRACING_TARGET, "selection changed, discarding quote");
		}
		self.quote = None;
		self.quote_error = None;
	}

	fn bump_generation(&mut self) -> u64 {
		self.generation += 1;
		self.generation
	}

	fn contains_address(tokens: &[Token], address: &str) -> bool {
		tokens.iter().any(|t| t.address == address)
	}
}
