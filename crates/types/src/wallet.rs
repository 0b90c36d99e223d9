//! Wallet-connector trait seam
//!
//! Wallet connection, signing and broadcasting belong to an external
//! wallet-connector library. The orchestration flow only needs this narrow
//! interface, passed in explicitly rather than looked up from ambient
//! context.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::U256;
use crate::quotes::TransactionRequest;

/// Result type for wallet operations
pub type WalletResult<T> = Result<T, WalletError>;

/// Errors surfaced by the external wallet connector
#[derive(Error, Debug)]
pub enum WalletError {
	#[error("allowance read failed for token {token}: {reason}")]
	AllowanceRead { token: String, reason: String },

	#[error("approval transaction rejected: {reason}")]
	ApprovalRejected { reason: String },

	#[error("transaction broadcast failed: {reason}")]
	BroadcastFailed { reason: String },

	#[error("wallet is connected to chain {connected}, expected {expected}")]
	WrongChain { connected: u64, expected: u64 },
}

/// The on-chain spending allowance granted to a quote's approval address
///
/// Refetched after every new quote; never derived locally.
#[derive(Debug, Clone, PartialEq)]
pub struct AllowanceState {
	/// Token owner (the connected address)
	pub owner: String,
	/// Spender the allowance is granted to
	pub spender: String,
	/// Source token contract address
	pub token: String,
	/// Currently granted amount in base units
	pub amount: U256,
	/// When the allowance was read
	pub fetched_at: DateTime<Utc>,
}

impl AllowanceState {
	pub fn new(owner: String, spender: String, token: String, amount: U256) -> Self {
		Self {
			owner,
			spender,
			token,
			amount,
			fetched_at: Utc::now(),
		}
	}

	/// Whether the granted amount covers the given swap amount
	pub fn covers(&self, required: &U256) -> bool {
		self.amount.covers(required)
	}
}

/// External wallet connector the sequencer delegates signing to
///
/// Broadcast acceptance (a returned hash) is enough to move on to status
/// polling; implementations must not wait for block confirmation.
#[async_trait]
pub trait WalletConnector: Send + Sync {
	/// The connected account address
	fn address(&self) -> String;

	/// The chain the wallet is currently connected to
	fn chain_id(&self) -> u64;

	/// Read the current ERC-20 allowance granted by the connected address
	/// to `spender` on `token`
	async fn allowance(&self, token: &str, spender: &str) -> WalletResult<U256>;

	/// Send an approval transaction granting `spender` the given amount on
	/// `token`, returning the transaction hash
	async fn approve(&self, token: &str, spender: &str, amount: &U256) -> WalletResult<String>;

	/// Sign and broadcast the prepared transaction, returning its hash on
	/// broadcast acceptance
	async fn send_transaction(&self, tx: &TransactionRequest) -> WalletResult<String>;
}
