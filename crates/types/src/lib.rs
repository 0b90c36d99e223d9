//! Bridge Types
//!
//! Shared models and traits for the cross-chain swap orchestrator.
//! This crate contains the aggregation-API wire models, the amount
//! representation, and the trait seams the service layer depends on.

pub mod api;
pub mod connections;
pub mod models;
pub mod quotes;
pub mod status;
pub mod wallet;

// Re-export chrono and serde_json for convenience
pub use chrono;
pub use serde_json;

// Re-export commonly used types for convenience
pub use api::{AggregationApi, ApiError, ApiResult};

pub use models::{AmountError, Chain, ChainsResponse, Token, U256, NATIVE_TOKEN_ADDRESS};

pub use connections::{Connection, ConnectionsResponse};

pub use quotes::{
	FeeCost, GasCost, Quote, QuoteAction, QuoteEstimate, QuoteRequest, ToolDetails,
	TransactionRequest,
};

pub use status::{StatusRequest, StatusResponse, StatusSide, TxStatus};

pub use wallet::{AllowanceState, WalletConnector, WalletError, WalletResult};
