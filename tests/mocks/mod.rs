//! Centralized mocks and fixtures for testing
//!
//! Reusable aggregation-service fixtures and an in-process mock server so
//! integration tests never touch the public endpoint.

pub mod fixtures;
pub mod test_server;

#[allow(unused_imports)]
pub use test_server::TestServer;
