//! Swap attempt sequencer
//!
//! Drives one swap attempt through its phases: quote, allowance check,
//! optional approval, transaction submission and status polling. The wallet
//! and the aggregation API are injected as trait objects; the sequencer never
//! reaches for ambient context.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

use bridge_types::{
	AggregationApi, AllowanceState, AmountError, ApiError, QuoteRequest, StatusRequest,
	StatusResponse, U256, WalletConnector, WalletError,
};

use crate::approval::ApprovalStrategy;
use crate::poller::{PollHandle, PollingConfig, PollingError, StatusPoller};
use crate::state::SwapState;

/// Tracing target for structured logging
const TRACING_TARGET: &str = "bridge_orchestrator::swap_sequencer";

/// Result type for sequencer operations
pub type SequencerResult<T> = Result<T, SequencerError>;

/// Errors produced while driving a swap attempt
#[derive(Error, Debug)]
pub enum SequencerError {
	#[error("operation not valid in phase {phase:?}")]
	WrongPhase { phase: SwapPhase },

	#[error("selections incomplete: both tokens and a non-empty amount are required")]
	SelectionIncomplete,

	#[error("no quote available to act on")]
	NoQuote,

	#[error(transparent)]
	Amount(#[from] AmountError),

	#[error(transparent)]
	Api(#[from] ApiError),

	#[error(transparent)]
	Wallet(#[from] WalletError),

	#[error(transparent)]
	Polling(#[from] PollingError),
}

/// Lifecycle phase of one swap attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapPhase {
	Idle,
	QuoteRequested,
	QuoteReady,
	ApprovalChecked,
	TxPrepared,
	TxSubmitted,
	StatusPolling,
	Done,
	Failed,
}

/// Sequencer for one swap attempt
///
/// Owns the selection state and steps a single quote through approval,
/// submission and polling. A new quote restarts the phase machine from
/// `QuoteReady`; an active poll from an earlier submission is independent
/// state and survives `reset_quote`.
pub struct SwapSequencer {
	attempt_id: Uuid,
	created_at: DateTime<Utc>,
	api: Arc<dyn AggregationApi>,
	wallet: Arc<dyn WalletConnector>,
	approval_strategy: ApprovalStrategy,
	polling: PollingConfig,
	state: SwapState,
	phase: SwapPhase,
	allowance: Option<AllowanceState>,
	tx_hash: Option<String>,
}

impl SwapSequencer {
	pub fn new(
		api: Arc<dyn AggregationApi>,
		wallet: Arc<dyn WalletConnector>,
		approval_strategy: ApprovalStrategy,
		polling: PollingConfig,
	) -> Self {
		Self {
			attempt_id: Uuid::new_v4(),
			created_at: Utc::now(),
			api,
			wallet,
			approval_strategy,
			polling,
			state: SwapState::new(),
			phase: SwapPhase::Idle,
			allowance: None,
			tx_hash: None,
		}
	}

	pub fn attempt_id(&self) -> Uuid {
		self.attempt_id
	}

	pub fn created_at(&self) -> DateTime<Utc> {
		self.created_at
	}

	pub fn phase(&self) -> SwapPhase {
		self.phase
	}

	pub fn state(&self) -> &SwapState {
		&self.state
	}

	pub fn state_mut(&mut self) -> &mut SwapState {
		&mut self.state
	}

	/// The last-read allowance, if a quote triggered a read
	pub fn allowance(&self) -> Option<&AllowanceState> {
		self.allowance.as_ref()
	}

	/// Hash of the submitted swap transaction, once broadcast
	pub fn tx_hash(&self) -> Option<&str> {
		self.tx_hash.as_deref()
	}

	/// Fetch the supported chains into state
	pub async fn load_chains(&mut self) -> SequencerResult<()> {
		let chains = self.api.list_chains().await?;
		info!(
			target: TRACING_TARGET,
			attempt_id = %self.attempt_id,
			count = chains.len(),
			"chains loaded"
		);
		self.state.set_chains(chains);
		Ok(())
	}

	/// Refetch connections for the currently selected chain pair
	///
	/// Uses the state's generation counter so a response that was overtaken
	/// by a newer chain selection is dropped rather than applied.
	pub async fn refresh_connections(&mut self) -> SequencerResult<bool> {
		let (from_chain, to_chain) = match (self.state.from_chain(), self.state.to_chain()) {
			(Some(from), Some(to)) => (from, to),
			_ => return Err(SequencerError::SelectionIncomplete),
		};
		let generation = self.state.current_generation();

		let response = self.api.list_connections(from_chain, to_chain).await?;
		Ok(self.state.apply_connections(generation, response))
	}

	/// Request a quote for the current selections
	///
	/// A no-route answer is captured as displayable state and returns the
	/// sequencer to `Idle`; every other failure propagates. On success the
	/// allowance for the quote's approval address is refreshed.
	pub async fn request_quote(&mut self) -> SequencerResult<()> {
		if !self.state.ready_for_quote() {
			return Err(SequencerError::SelectionIncomplete);
		}

		// ready_for_quote guarantees both tokens
		let (from_token, to_token) = match (self.state.from_token(), self.state.to_token()) {
			(Some(from), Some(to)) => (from.clone(), to.clone()),
			_ => return Err(SequencerError::SelectionIncomplete),
		};

		// 1. Scale the human-readable amount by the source token's decimals
		let from_amount = U256::parse_units(self.state.from_amount(), from_token.decimals)?;

		let request = QuoteRequest {
			from_chain: from_token.chain_id,
			to_chain: to_token.chain_id,
			from_token: from_token.address.clone(),
			to_token: to_token.address.clone(),
			from_amount,
			from_address: self.wallet.address(),
		};

		self.phase = SwapPhase::QuoteRequested;
		debug!(
			target: TRACING_TARGET,
			attempt_id = %self.attempt_id,
			from_chain = request.from_chain,
			to_chain = request.to_chain,
			from_amount = %request.from_amount,
			"requesting quote"
		);

		// 2. A missing route is state to display, not a failure to propagate
		let quote = match self.api.request_quote(&request).await {
			Ok(quote) => quote,
			Err(err) if err.is_quote_unavailable() => {
				info!(
					target: TRACING_TARGET,
					attempt_id = %self.attempt_id,
					error = %err,
					"no viable route for selection"
				);
				self.state.set_quote_error(err.to_string());
				self.phase = SwapPhase::Idle;
				return Ok(());
			},
			Err(err) => {
				self.phase = SwapPhase::Idle;
				return Err(err.into());
			},
		};

		info!(
			target: TRACING_TARGET,
			attempt_id = %self.attempt_id,
			quote_id = %quote.id,
			tool = %quote.tool,
			to_amount = %quote.estimate.to_amount,
			"quote received"
		);
		self.state.set_quote(quote);
		self.phase = SwapPhase::QuoteReady;

		// 3. Every new quote triggers a fresh allowance read
		self.refresh_allowance().await;
		self.phase = SwapPhase::ApprovalChecked;

		Ok(())
	}

	/// Read the current allowance for the active quote's approval address
	///
	/// Native-token swaps need no allowance. A failed read is logged and
	/// leaves the stored allowance empty; it never blocks the attempt.
	async fn refresh_allowance(&mut self) {
		let quote = match self.state.quote() {
			Some(quote) => quote,
			None => return,
		};
		if quote.action.from_token.is_native() {
			debug!(
				target: TRACING_TARGET,
				attempt_id = %self.attempt_id,
				"native source token, no allowance needed"
			);
			self.allowance = None;
			return;
		}

		let token = quote.action.from_token.address.clone();
		let spender = quote.estimate.approval_address.clone();

		match self.wallet.allowance(&token, &spender).await {
			Ok(amount) => {
				debug!(
					target: TRACING_TARGET,
					attempt_id = %self.attempt_id,
					token = %token,
					spender = %spender,
					amount = %amount,
					"allowance read"
				);
				self.allowance = Some(AllowanceState::new(
					self.wallet.address(),
					spender,
					token,
					amount,
				));
			},
			Err(err) => {
				warn!(
					target: TRACING_TARGET,
					attempt_id = %self.attempt_id,
					token = %token,
					error = %err,
					"allowance read failed"
				);
				self.allowance = None;
			},
		}
	}

	/// Send an approval transaction when the current allowance does not
	/// cover the quoted amount
	///
	/// Returns the approval transaction hash when one was sent. The amount is
	/// chosen by the configured [`ApprovalStrategy`]; the allowance is
	/// re-read after the approval lands.
	pub async fn ensure_allowance(&mut self) -> SequencerResult<Option<String>> {
		if self.phase != SwapPhase::ApprovalChecked {
			return Err(SequencerError::WrongPhase { phase: self.phase });
		}
		let quote = self.state.quote().ok_or(SequencerError::NoQuote)?;

		if quote.action.from_token.is_native() {
			return Ok(None);
		}
		let required = quote.action.from_amount.clone();
		if let Some(allowance) = &self.allowance {
			if allowance.covers(&required) {
				debug!(
					target: TRACING_TARGET,
					attempt_id = %self.attempt_id,
					granted = %allowance.amount,
					required = %required,
					"allowance already covers quote"
				);
				return Ok(None);
			}
		}

		let token = quote.action.from_token.address.clone();
		let spender = quote.estimate.approval_address.clone();
		let amount = self.approval_strategy.approval_amount(quote);

		info!(
			target: TRACING_TARGET,
			attempt_id = %self.attempt_id,
			token = %token,
			spender = %spender,
			amount = %amount,
			strategy = ?self.approval_strategy,
			"sending approval transaction"
		);
		let hash = self.wallet.approve(&token, &spender, &amount).await?;

		self.refresh_allowance().await;
		Ok(Some(hash))
	}

	/// Broadcast the quote's transaction payload verbatim
	///
	/// The wallet must be connected to the payload's chain. A returned hash
	/// is broadcast acceptance, not confirmation; the sequencer moves
	/// straight on to polling.
	pub async fn submit(&mut self) -> SequencerResult<String> {
		if self.phase != SwapPhase::ApprovalChecked {
			return Err(SequencerError::WrongPhase { phase: self.phase });
		}
		let quote = self.state.quote().ok_or(SequencerError::NoQuote)?;
		let tx = quote.transaction_request.clone();

		let connected = self.wallet.chain_id();
		if connected != tx.chain_id {
			return Err(WalletError::WrongChain {
				connected,
				expected: tx.chain_id,
			}
			.into());
		}

		self.phase = SwapPhase::TxPrepared;
		info!(
			target: TRACING_TARGET,
			attempt_id = %self.attempt_id,
			to = %tx.to,
			chain_id = tx.chain_id,
			"submitting swap transaction"
		);

		let hash = match self.wallet.send_transaction(&tx).await {
			Ok(hash) => hash,
			Err(err) => {
				self.phase = SwapPhase::Failed;
				return Err(err.into());
			},
		};

		info!(
			target: TRACING_TARGET,
			attempt_id = %self.attempt_id,
			tx_hash = %hash,
			"transaction accepted for broadcast"
		);
		self.tx_hash = Some(hash.clone());
		self.phase = SwapPhase::TxSubmitted;
		Ok(hash)
	}

	/// Start the status poll loop for the submitted transaction
	pub fn start_polling(&mut self) -> SequencerResult<PollHandle> {
		if self.phase != SwapPhase::TxSubmitted {
			return Err(SequencerError::WrongPhase { phase: self.phase });
		}
		let quote = self.state.quote().ok_or(SequencerError::NoQuote)?;
		let tx_hash = match &self.tx_hash {
			Some(hash) => hash.clone(),
			None => return Err(SequencerError::WrongPhase { phase: self.phase }),
		};

		let request = StatusRequest {
			bridge: quote.tool.clone(),
			from_chain: quote.action.from_chain_id,
			to_chain: quote.action.to_chain_id,
			tx_hash,
		};

		self.phase = SwapPhase::StatusPolling;
		Ok(StatusPoller::new(self.api.clone(), request, self.polling.clone()).spawn())
	}

	/// Wait for the poll loop and record the terminal outcome
	pub async fn finish_polling(&mut self, handle: PollHandle) -> SequencerResult<StatusResponse> {
		if self.phase != SwapPhase::StatusPolling {
			return Err(SequencerError::WrongPhase { phase: self.phase });
		}

		match handle.join().await {
			Ok(status) => {
				info!(
					target: TRACING_TARGET,
					attempt_id = %self.attempt_id,
					"swap completed"
				);
				self.state.set_status(status.clone());
				self.phase = SwapPhase::Done;
				Ok(status)
			},
			Err(err) => {
				warn!(
					target: TRACING_TARGET,
					attempt_id = %self.attempt_id,
					error = %err,
					"polling terminated without completion"
				);
				self.phase = SwapPhase::Failed;
				Err(err.into())
			},
		}
	}

	/// Discard the active quote and return to `Idle`
	///
	/// Leaves the recorded status and any running poll loop untouched.
	pub fn reset_quote(&mut self) {
		self.state.reset_quote();
		self.allowance = None;
		self.phase = SwapPhase::Idle;
	}
}
