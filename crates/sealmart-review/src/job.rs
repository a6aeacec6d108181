use std::time::Duration;

use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use sealmart_registry::RegistryWriter;
use sealmart_types::{ExtensionId, ExtensionStatus};

/// The decision a reviewer feeds into a job.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReviewVerdict {
    Approve,
    Reject,
}

impl ReviewVerdict {
    /// The terminal status this verdict applies.
    pub fn status(&self) -> ExtensionStatus {
        match self {
            Self::Approve => ExtensionStatus::Verified,
            Self::Reject => ExtensionStatus::Rejected,
        }
    }
}

/// Observable lifecycle of a review job.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReviewState {
    /// Spawned, analysis not yet started.
    Queued,
    /// Simulated analysis in progress; cancellation is still possible.
    Analyzing,
    /// Verdict applied; the record now carries this status.
    Completed(ExtensionStatus),
    /// The verdict write failed; the record is unchanged.
    Failed(String),
    /// Cancelled before the verdict write was issued.
    Cancelled,
}

impl ReviewState {
    /// Returns `true` once the job can make no further progress.
    pub fn is_final(&self) -> bool {
        !matches!(self, Self::Queued | Self::Analyzing)
    }
}

/// Tuning for the review job.
#[derive(Clone, Copy, Debug)]
pub struct ReviewConfig {
    /// How long the simulated analysis takes before the verdict is applied.
    pub analysis_delay: Duration,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            analysis_delay: Duration::from_secs(3),
        }
    }
}

/// Aborts a running review while it is still analyzing.
///
/// Dropping the handle does NOT cancel the job; cancellation is always an
/// explicit call. Cancelling after the verdict write has been issued has no
/// effect on the write.
pub struct CancelHandle {
    tx: Option<oneshot::Sender<()>>,
}

impl CancelHandle {
    /// Request cancellation. Idempotent; later calls are no-ops.
    pub fn cancel(&mut self) {
        if let Some(tx) = self.tx.take() {
            // The job may already have finished; that is fine.
            let _ = tx.send(());
        }
    }
}

/// A spawned review for one record.
///
/// The job holds the verdict as an input and, after the configured delay,
/// applies it through [`RegistryWriter::set_status`]. Progress is published
/// on a watch channel so any number of observers can follow along.
pub struct ReviewJob {
    id: ExtensionId,
    state_rx: watch::Receiver<ReviewState>,
    handle: JoinHandle<()>,
}

impl ReviewJob {
    /// Start a review. Returns the job and its cancel handle.
    pub fn spawn(
        writer: RegistryWriter,
        id: ExtensionId,
        verdict: ReviewVerdict,
        config: ReviewConfig,
    ) -> (Self, CancelHandle) {
        let (state_tx, state_rx) = watch::channel(ReviewState::Queued);
        let (cancel_tx, cancel_rx) = oneshot::channel();

        let job_id = id.clone();
        let handle = tokio::spawn(async move {
            run_review(writer, job_id, verdict, config, state_tx, cancel_rx).await;
        });

        (
            Self {
                id,
                state_rx,
                handle,
            },
            CancelHandle {
                tx: Some(cancel_tx),
            },
        )
    }

    /// The record under review.
    pub fn id(&self) -> &ExtensionId {
        &self.id
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ReviewState {
        self.state_rx.borrow().clone()
    }

    /// A receiver that observes every state change from here on.
    pub fn subscribe(&self) -> watch::Receiver<ReviewState> {
        self.state_rx.clone()
    }

    /// Wait for the job to finish and return its final state.
    pub async fn wait(self) -> ReviewState {
        if self.handle.await.is_err() {
            // Task panicked or was aborted out from under us.
            return ReviewState::Failed("review task aborted".to_string());
        }
        self.state_rx.borrow().clone()
    }
}

async fn run_review(
    writer: RegistryWriter,
    id: ExtensionId,
    verdict: ReviewVerdict,
    config: ReviewConfig,
    state_tx: watch::Sender<ReviewState>,
    cancel_rx: oneshot::Receiver<()>,
) {
    state_tx.send_replace(ReviewState::Analyzing);
    debug!(id = %id, ?verdict, "review started");

    // A dropped CancelHandle must mean "never cancelled", so a closed
    // channel parks forever instead of resolving the race arm.
    let cancelled = async move {
        if cancel_rx.await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        _ = tokio::time::sleep(config.analysis_delay) => {
            let status = verdict.status();
            match writer.set_status(&id, status).await {
                Ok(()) => {
                    debug!(id = %id, %status, "review completed");
                    state_tx.send_replace(ReviewState::Completed(status));
                }
                Err(e) => {
                    warn!(id = %id, error = %e, "review verdict write failed");
                    state_tx.send_replace(ReviewState::Failed(e.to_string()));
                }
            }
        }
        _ = cancelled => {
            debug!(id = %id, "review cancelled during analysis");
            state_tx.send_replace(ReviewState::Cancelled);
        }
    }
}
