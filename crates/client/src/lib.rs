//! Bridge Client
//!
//! Reqwest implementation of the aggregation API seam.

pub mod lifi;

pub use bridge_types::{AggregationApi, ApiError, ApiResult};
pub use lifi::{LifiClient, DEFAULT_ENDPOINT};
