//! Shared domain models

pub mod chain;
pub mod token;
pub mod u256;

pub use chain::{Chain, ChainsResponse};
pub use token::{Token, NATIVE_TOKEN_ADDRESS};
pub use u256::{AmountError, U256};
