//! Bounded transaction status polling
//!
//! Polls the aggregation API's status endpoint on a fixed interval until the
//! terminal `DONE` value is observed. Unlike a blind reschedule loop, a
//! failed status call is distinguished from a pending transaction: too many
//! consecutive failures terminate the poll with an explicit unreachable
//! error, and an optional attempt ceiling bounds the loop overall.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use bridge_types::{AggregationApi, ApiResult, StatusRequest, StatusResponse};

/// Tracing target for structured logging
const TRACING_TARGET: &str = "bridge_orchestrator::status_poller";

/// Configuration for status polling behavior
#[derive(Debug, Clone)]
pub struct PollingConfig {
	/// Delay between status calls
	pub interval: Duration,
	/// Ceiling on total status calls before giving up (None polls forever)
	pub max_attempts: Option<u32>,
	/// Consecutive failed status calls tolerated before the endpoint is
	/// declared unreachable
	pub max_consecutive_failures: u32,
}

impl Default for PollingConfig {
	fn default() -> Self {
		Self {
			interval: Duration::from_secs(10),
			// 30 minutes at the default interval
			max_attempts: Some(180),
			max_consecutive_failures: 6,
		}
	}
}

/// Terminal polling failures
#[derive(Error, Debug, PartialEq)]
pub enum PollingError {
	#[error("status endpoint unreachable after {consecutive_failures} consecutive failures")]
	Unreachable { consecutive_failures: u32 },

	#[error("no terminal status after {attempts} attempts")]
	AttemptsExhausted { attempts: u32 },

	#[error("polling cancelled")]
	Cancelled,
}

/// Classification of a single status call
#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome {
	/// Terminal status observed, polling stops
	Completed(StatusResponse),
	/// Non-terminal status, poll again after the interval
	Pending(StatusResponse),
	/// The status call itself failed; not the same as a pending transaction
	Unreachable,
}

impl PollOutcome {
	/// Classify one status-call result
	pub fn classify(result: ApiResult<StatusResponse>) -> Self {
		match result {
			Ok(status) if status.is_terminal() => PollOutcome::Completed(status),
			Ok(status) => PollOutcome::Pending(status),
			Err(_) => PollOutcome::Unreachable,
		}
	}
}

/// Handle to a running poll loop
///
/// Holds a live receiver for intermediate status updates plus the means to
/// cancel or join the loop. Exactly one loop exists per submitted
/// transaction; reaching the terminal status ends it.
pub struct PollHandle {
	updates: watch::Receiver<Option<StatusResponse>>,
	cancel: Option<oneshot::Sender<()>>,
	task: JoinHandle<Result<StatusResponse, PollingError>>,
}

impl PollHandle {
	/// The most recent status response, if any call has succeeded yet
	pub fn latest(&self) -> Option<StatusResponse> {
		self.updates.borrow().clone()
	}

	/// A receiver that observes every status update
	pub fn updates(&self) -> watch::Receiver<Option<StatusResponse>> {
		self.updates.clone()
	}

	/// Stop the loop without waiting for a terminal status
	pub fn cancel(mut self) {
		if let Some(cancel) = self.cancel.take() {
			let _ = cancel.send(());
		}
		self.task.abort();
	}

	/// Wait for the loop to finish and return the terminal status
	pub async fn join(self) -> Result<StatusResponse, PollingError> {
		self.task.await.unwrap_or(Err(PollingError::Cancelled))
	}
}

/// Poll loop over the aggregation API's status endpoint
pub struct StatusPoller {
	api: Arc<dyn AggregationApi>,
	request: StatusRequest,
	config: PollingConfig,
}

impl StatusPoller {
	pub fn new(api: Arc<dyn AggregationApi>, request: StatusRequest, config: PollingConfig) -> Self {
		Self {
			api,
			request,
			config,
		}
	}

	/// Spawn the poll loop as a background task
	pub fn spawn(self) -> PollHandle {
		let (update_tx, update_rx) = watch::channel(None);
		let (cancel_tx, cancel_rx) = oneshot::channel();

		let task = tokio::spawn(self.run(update_tx, cancel_rx));

		PollHandle {
			updates: update_rx,
			cancel: Some(cancel_tx),
			task,
		}
	}

	/// Run the poll loop to completion
	///
	/// Each successful response replaces the published status. The loop ends
	/// with the terminal response, an unreachable/exhausted error, or
	/// cancellation; after the terminal status no further call is issued.
	async fn run(
		self,
		updates: watch::Sender<Option<StatusResponse>>,
		mut cancel: oneshot::Receiver<()>,
	) -> Result<StatusResponse, PollingError> {
		let mut attempts: u32 = 0;
		let mut consecutive_failures: u32 = 0;

		loop {
			if let Some(max) = self.config.max_attempts {
				if attempts >= max {
					warn!(
						target: TRACING_TARGET,
						tx_hash = %self.request.tx_hash,
						attempts,
						"giving up polling, attempt ceiling reached"
					);
					return Err(PollingError::AttemptsExhausted { attempts });
				}
			}

			let outcome = PollOutcome::classify(self.api.get_status(&self.request).await);
			attempts += 1;

			match outcome {
				PollOutcome::Completed(status) => {
					debug!(
						target: TRACING_TARGET,
						tx_hash = %self.request.tx_hash,
						attempts,
						"terminal status observed, polling complete"
					);
					let _ = updates.send(Some(status.clone()));
					return Ok(status);
				},
				PollOutcome::Pending(status) => {
					consecutive_failures = 0;
					debug!(
						target: TRACING_TARGET,
						tx_hash = %self.request.tx_hash,
						status = ?status.status,
						attempts,
						"transaction still pending"
					);
					let _ = updates.send(Some(status));
				},
				PollOutcome::Unreachable => {
					consecutive_failures += 1;
					warn!(
						target: TRACING_TARGET,
						tx_hash = %self.request.tx_hash,
						consecutive_failures,
						"status call failed"
					);
					if consecutive_failures >= self.config.max_consecutive_failures {
						return Err(PollingError::Unreachable {
							consecutive_failures,
						});
					}
				},
			}

			tokio::select! {
				_ = tokio::time::sleep(self.config.interval) => {},
				_ = &mut cancel => {
					debug!(
						target: TRACING_TARGET,
						tx_hash = %self.request.tx_hash,
						"polling cancelled"
					);
					return Err(PollingError::Cancelled);
				},
			}
		}
	}
}
