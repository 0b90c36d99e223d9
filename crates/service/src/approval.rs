//! Approval amount policy
//!
//! How much spending allowance to request when the current allowance does
//! not cover a quote. `Unlimited` grants the maximum once so repeat swaps of
//! the same token skip the approval transaction; `Exact` grants only the
//! quoted amount.

use serde::{Deserialize, Serialize};

use bridge_types::{Quote, U256};

/// Policy for sizing approval transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStrategy {
	/// Approve exactly the quoted input amount
	Exact,
	/// Approve the maximum value once
	#[default]
	Unlimited,
}

impl ApprovalStrategy {
	/// The amount to approve for the given quote
	pub fn approval_amount(&self, quote: &Quote) -> U256 {
		match self {
			ApprovalStrategy::Exact => quote.action.from_amount.clone(),
			ApprovalStrategy::Unlimited => U256::max_value(),
		}
	}
}
