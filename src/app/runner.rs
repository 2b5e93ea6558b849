use std::sync::Arc;

use chrono::Utc;
use tokio::io::AsyncWrite;
use tracing::warn;

use crate::args::OutputFormat;
use crate::dispatch::{BatchDispatcher, JitterScheduler};
use crate::domain::{BatchPlan, IssueId, IssueOperation, OperationOutcome, OperationRequest};
use crate::error::{AppError, AppResult, ValidationError};
use crate::http::Transport;
use crate::report::OutcomeReporter;

/// Runs batches against one shared transport and reports every outcome.
#[derive(Clone)]
pub struct BatchRunner {
    transport: Arc<dyn Transport>,
    format: OutputFormat,
}

impl BatchRunner {
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>, format: OutputFormat) -> Self {
        Self { transport, format }
    }

    /// Dispatches `requests` and returns once every outcome is resolved and
    /// written to `output`.
    ///
    /// # Errors
    ///
    /// Returns an error only if the reporter task panicked.
    pub async fn run<W>(
        &self,
        requests: Vec<OperationRequest>,
        pacing: Option<&mut JitterScheduler>,
        output: W,
    ) -> AppResult<Vec<OperationOutcome>>
    where
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let reporter = OutcomeReporter::spawn(self.format, output);
        let dispatcher = BatchDispatcher::new(Arc::clone(&self.transport))
            .with_outcome_sender(reporter.sender());
        let outcomes = dispatcher.dispatch(requests, pacing).await;
        drop(dispatcher);

        let reported = reporter.finish().await?;
        if reported != outcomes.len() {
            warn!("Reported {} of {} outcome(s)", reported, outcomes.len());
        }
        Ok(outcomes)
    }

    /// Creates `plan.count()` issues, pacing launches with random jitter.
    ///
    /// # Errors
    ///
    /// Returns an error only if the reporter task panicked.
    pub async fn create<W>(
        &self,
        plan: &BatchPlan,
        output: W,
    ) -> AppResult<Vec<OperationOutcome>>
    where
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let mut scheduler = JitterScheduler::new(plan.delay());
        self.create_with(plan, &mut scheduler, output).await
    }

    /// Like [`Self::create`] with a caller-supplied scheduler.
    ///
    /// # Errors
    ///
    /// Returns an error only if the reporter task panicked.
    pub async fn create_with<W>(
        &self,
        plan: &BatchPlan,
        scheduler: &mut JitterScheduler,
        output: W,
    ) -> AppResult<Vec<OperationOutcome>>
    where
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let requests = plan.requests(Utc::now().timestamp_micros());
        self.run(requests, Some(scheduler), output).await
    }

    /// Sends `operation` for every id at once.
    ///
    /// # Errors
    ///
    /// Returns `EmptyIssueList` without dispatching anything when `issue_ids`
    /// is empty, or an error if the reporter task panicked.
    pub async fn for_issues<W>(
        &self,
        operation: IssueOperation,
        issue_ids: &[IssueId],
        output: W,
    ) -> AppResult<Vec<OperationOutcome>>
    where
        W: AsyncWrite + Unpin + Send + 'static,
    {
        if issue_ids.is_empty() {
            return Err(AppError::validation(ValidationError::EmptyIssueList));
        }
        let requests = OperationRequest::for_issues(operation, issue_ids);
        self.run(requests, None, output).await
    }
}
