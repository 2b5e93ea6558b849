use std::sync::Arc;

use futures_util::future::join_all;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::domain::{IssueOperation, OperationOutcome, OperationRequest, OutcomeResult};
use crate::error::HttpError;
use crate::http::Transport;

use super::JitterScheduler;

/// Buffer between request tasks and the outcome reporter.
pub const OUTCOME_CHANNEL_CAPACITY: usize = 256;

/// Launches every request of a batch as its own task and joins them all.
pub struct BatchDispatcher {
    transport: Arc<dyn Transport>,
    outcome_tx: Option<mpsc::Sender<OperationOutcome>>,
}

impl BatchDispatcher {
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            outcome_tx: None,
        }
    }

    /// Forwards each outcome to `outcome_tx` as soon as it resolves.
    #[must_use]
    pub fn with_outcome_sender(mut self, outcome_tx: mpsc::Sender<OperationOutcome>) -> Self {
        self.outcome_tx = Some(outcome_tx);
        self
    }

    /// Runs `requests` concurrently and waits for all of them.
    ///
    /// With `pacing`, the next launch waits for a drawn delay after the
    /// previous one; the last launch has no trailing delay. In-flight requests
    /// are never awaited before launching the next. The result holds one
    /// outcome per request, at the request's position.
    pub async fn dispatch(
        &self,
        requests: Vec<OperationRequest>,
        mut pacing: Option<&mut JitterScheduler>,
    ) -> Vec<OperationOutcome> {
        if requests.is_empty() {
            return Vec::new();
        }

        let total = requests.len();
        info!(
            "Dispatching {} request(s){}",
            total,
            if pacing.is_some() { " with jitter" } else { "" }
        );

        let mut operations = Vec::with_capacity(total);
        let mut handles = Vec::with_capacity(total);
        let mut pending = requests.into_iter().enumerate().peekable();
        while let Some((index, request)) = pending.next() {
            operations.push(request.operation());
            handles.push(self.launch(index, request));

            if pending.peek().is_some()
                && let Some(scheduler) = pacing.as_deref_mut()
            {
                let delay = scheduler.next_delay();
                debug!("Next launch in {} ms", delay.as_millis());
                sleep(delay).await;
            }
        }

        let joined = join_all(handles).await;
        let mut outcomes = Vec::with_capacity(total);
        let resolved = operations.into_iter().zip(joined).enumerate();
        for (index, (operation, joined_outcome)) in resolved {
            let outcome = match joined_outcome {
                Ok(outcome) => outcome,
                Err(err) => {
                    warn!("Request #{} ({}) task aborted: {}", index, operation, err);
                    let outcome = aborted_outcome(index, operation, &err);
                    self.forward(&outcome).await;
                    outcome
                }
            };
            outcomes.push(outcome);
        }

        let failed = outcomes.iter().filter(|outcome| !outcome.succeeded()).count();
        info!(
            "Batch finished: {} outcome(s), {} failed",
            outcomes.len(),
            failed
        );
        outcomes
    }

    fn launch(&self, index: usize, request: OperationRequest) -> JoinHandle<OperationOutcome> {
        let transport = Arc::clone(&self.transport);
        let outcome_tx = self.outcome_tx.clone();

        tokio::spawn(async move {
            let operation = request.operation();
            debug!("Launching request #{} ({})", index, operation);
            let result = transport.send(operation, request.payload()).await;
            let outcome = OperationOutcome::new(index, operation, result);
            debug!(
                "Request #{} ({}) resolved, succeeded = {}",
                index,
                operation,
                outcome.succeeded()
            );
            send_outcome(outcome_tx.as_ref(), &outcome).await;
            outcome
        })
    }

    async fn forward(&self, outcome: &OperationOutcome) {
        send_outcome(self.outcome_tx.as_ref(), outcome).await;
    }
}

async fn send_outcome(
    outcome_tx: Option<&mpsc::Sender<OperationOutcome>>,
    outcome: &OperationOutcome,
) {
    if let Some(outcome_tx) = outcome_tx
        && outcome_tx.send(outcome.clone()).await.is_err()
    {
        debug!(
            "Outcome receiver closed; request #{} not reported",
            outcome.index
        );
    }
}

fn aborted_outcome(
    index: usize,
    operation: IssueOperation,
    err: &tokio::task::JoinError,
) -> OperationOutcome {
    let error = HttpError::TaskAborted {
        message: err.to_string(),
    };
    OperationOutcome::new(
        index,
        operation,
        OutcomeResult::Failed {
            message: error.to_string(),
        },
    )
}
