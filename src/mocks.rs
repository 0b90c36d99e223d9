//! Mock wallet connector for examples and testing
//!
//! A scriptable in-memory [`WalletConnector`] so the swap flow can be driven
//! end to end without a browser wallet or a live chain.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use bridge_types::{TransactionRequest, U256, WalletConnector, WalletError, WalletResult};

/// In-memory wallet with scriptable allowances and recorded transactions
#[derive(Debug)]
pub struct MockWallet {
	address: String,
	chain_id: u64,
	// Keyed by (token, spender)
	allowances: Mutex<HashMap<(String, String), U256>>,
	approvals: Mutex<Vec<(String, String, U256)>>,
	sent: Mutex<Vec<TransactionRequest>>,
	tx_counter: AtomicU64,
	fail_allowance: AtomicBool,
	fail_broadcast: AtomicBool,
}

impl MockWallet {
	/// Create a wallet connected to the given chain
	pub fn new(address: impl Into<String>, chain_id: u64) -> Self {
		Self {
			address: address.into(),
			chain_id,
			allowances: Mutex::new(HashMap::new()),
			approvals: Mutex::new(Vec::new()),
			sent: Mutex::new(Vec::new()),
			tx_counter: AtomicU64::new(0),
			fail_allowance: AtomicBool::new(false),
			fail_broadcast: AtomicBool::new(false),
		}
	}

	/// Preset the allowance granted to `spender` on `token`
	pub fn set_allowance(&self, token: &str, spender: &str, amount: U256) {
		self.allowances
			.lock()
			.unwrap()
			.insert((token.to_string(), spender.to_string()), amount);
	}

	/// Make subsequent allowance reads fail
	pub fn fail_allowance_reads(&self) {
		self.fail_allowance.store(true, Ordering::SeqCst);
	}

	/// Make subsequent broadcasts fail
	pub fn fail_broadcasts(&self) {
		self.fail_broadcast.store(true, Ordering::SeqCst);
	}

	/// Every approval sent through this wallet, in order
	pub fn approvals(&self) -> Vec<(String, String, U256)> {
		self.approvals.lock().unwrap().clone()
	}

	/// Every swap transaction sent through this wallet, in order
	pub fn sent_transactions(&self) -> Vec<TransactionRequest> {
		self.sent.lock().unwrap().clone()
	}

	fn next_hash(&self, prefix: &str) -> String {
		let n = self.tx_counter.fetch_add(1, Ordering::SeqCst);
		format!("0x{prefix}{n:08x}")
	}
}

impl Default for MockWallet {
	fn default() -> Self {
		Self::new("0x552008c0f6870c2f77e5cc1d2eb9bdff03e30ea0", 1)
	}
}

#[async_trait]
impl WalletConnector for MockWallet {
	fn address(&self) -> String {
		self.address.clone()
	}

	fn chain_id(&self) -> u64 {
		self.chain_id
	}

	async fn allowance(&self, token: &str, spender: &str) -> WalletResult<U256> {
		if self.fail_allowance.load(Ordering::SeqCst) {
			return Err(WalletError::AllowanceRead {
				token: token.to_string(),
				reason: "scripted failure".to_string(),
			});
		}
		let allowances = self.allowances.lock().unwrap();
		Ok(allowances
			.get(&(token.to_string(), spender.to_string()))
			.cloned()
			.unwrap_or_else(|| U256::from("0")))
	}

	async fn approve(&self, token: &str, spender: &str, amount: &U256) -> WalletResult<String> {
		self.approvals
			.lock()
			.unwrap()
			.push((token.to_string(), spender.to_string(), amount.clone()));
		self.set_allowance(token, spender, amount.clone());
		Ok(self.next_hash("a99707a1"))
	}

	async fn send_transaction(&self, tx: &TransactionRequest) -> WalletResult<String> {
		if self.fail_broadcast.load(Ordering::SeqCst) {
			return Err(WalletError::BroadcastFailed {
				reason: "scripted failure".to_string(),
			});
		}
		self.sent.lock().unwrap().push(tx.clone());
		Ok(self.next_hash("5e4d"))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn test_approve_updates_allowance() {
		let wallet = MockWallet::default();
		let token = "0x2791bca1f2de4661ed88a30c99a7a9449aa84174";
		let spender = "0x362fa9d0bca5d19f743db50738345ce2b40ec99f";

		assert!(wallet.allowance(token, spender).await.unwrap().is_zero());

		wallet
			.approve(token, spender, &U256::from("1000000"))
			.await
			.unwrap();

		assert_eq!(
			wallet.allowance(token, spender).await.unwrap().as_str(),
			"1000000"
		);
		assert_eq!(wallet.approvals().len(), 1);
	}

	#[tokio::test]
	async fn test_hashes_are_unique() {
		let wallet = MockWallet::default();
		let tx = TransactionRequest {
			to: "0x362fa9d0bca5d19f743db50738345ce2b40ec99f".to_string(),
			value: "0x0".to_string(),
			data: "0x".to_string(),
			gas_price: "0x0".to_string(),
			gas_limit: "0x0".to_string(),
			chain_id: 1,
			from: None,
		};

		let first = wallet.send_transaction(&tx).await.unwrap();
		let second = wallet.send_transaction(&tx).await.unwrap();

		assert_ne!(first, second);
		assert_eq!(wallet.sent_transactions().len(), 2);
	}
}
