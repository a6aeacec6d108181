//! Review workflow for the Sealmart marketplace client.
//!
//! A review is an explicit asynchronous unit of work with an observable
//! outcome, not a fire-and-forget timer: [`ReviewJob::spawn`] starts the
//! simulated analysis, every state change is published on a watch channel,
//! and a [`CancelHandle`] can abort the job while it is still analyzing.
//!
//! Cancellation only stops the wait. Once the verdict write has been issued
//! to the store it is not abortable and the job runs to completion.
//!
//! No actual verification happens here. The verdict is an input and the
//! analysis delay only simulates latency; the job's value is the observable
//! lifecycle and the cancellation path.

pub mod job;

pub use job::{CancelHandle, ReviewConfig, ReviewJob, ReviewState, ReviewVerdict};
