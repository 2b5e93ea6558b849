use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::warn;

use crate::args::OutputFormat;
use crate::dispatch::OUTCOME_CHANNEL_CAPACITY;
use crate::domain::OperationOutcome;
use crate::error::AppResult;

use super::format_outcome;

/// Writes one outcome. Write failures are logged, never returned.
pub async fn report<W>(writer: &mut W, outcome: &OperationOutcome, format: OutputFormat)
where
    W: AsyncWrite + Unpin + ?Sized,
{
    let mut line = format_outcome(outcome, format);
    line.push('\n');
    let written = match writer.write_all(line.as_bytes()).await {
        Ok(()) => writer.flush().await,
        Err(err) => Err(err),
    };
    if let Err(err) = written {
        warn!("Failed to report outcome #{}: {}", outcome.index, err);
    }
}

/// Single consumer for outcomes produced by concurrent requests, so their
/// output never interleaves. A slow writer only delays reporting; request
/// tasks and launch pacing keep running.
pub struct OutcomeReporter {
    outcome_tx: mpsc::Sender<OperationOutcome>,
    task: JoinHandle<usize>,
}

impl OutcomeReporter {
    /// Spawns the writer task on the current runtime.
    pub fn spawn<W>(format: OutputFormat, mut writer: W) -> Self
    where
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let (outcome_tx, mut outcome_rx) = mpsc::channel(OUTCOME_CHANNEL_CAPACITY);
        let task = tokio::spawn(async move {
            let mut reported: usize = 0;
            while let Some(outcome) = outcome_rx.recv().await {
                report(&mut writer, &outcome, format).await;
                reported = reported.saturating_add(1);
            }
            reported
        });
        Self { outcome_tx, task }
    }

    #[must_use]
    pub fn sender(&self) -> mpsc::Sender<OperationOutcome> {
        self.outcome_tx.clone()
    }

    /// Closes the channel and waits until every queued outcome is written.
    /// Returns how many outcomes were reported.
    ///
    /// Senders handed out by [`Self::sender`] must be dropped first.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer task panicked.
    pub async fn finish(self) -> AppResult<usize> {
        drop(self.outcome_tx);
        Ok(self.task.await?)
    }
}
