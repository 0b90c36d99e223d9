//! Bridge Service
//!
//! Orchestration layer for a single cross-chain swap attempt: selection
//! state, the quote/approval/send sequencer, and bounded status polling.

pub mod approval;
pub mod poller;
pub mod sequencer;
pub mod state;

#[cfg(test)]
mod fixtures;

pub use approval::ApprovalStrategy;
pub use poller::{PollHandle, PollOutcome, PollingConfig, PollingError, StatusPoller};
pub use sequencer::{SequencerError, SequencerResult, SwapPhase, SwapSequencer};
pub use state::SwapState;
