use super::IssueOperation;

/// What a single transport call produced.
///
/// Any HTTP response counts as `Response`, whatever its status code; only
/// problems that kept a response from arriving end up as `Failed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeResult {
    Response { status: u16, body: String },
    Failed { message: String },
}

/// Resolved result of the request at `index` within its batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationOutcome {
    pub index: usize,
    pub operation: IssueOperation,
    pub result: OutcomeResult,
}

impl OperationOutcome {
    #[must_use]
    pub const fn new(index: usize, operation: IssueOperation, result: OutcomeResult) -> Self {
        Self {
            index,
            operation,
            result,
        }
    }

    #[must_use]
    pub const fn succeeded(&self) -> bool {
        matches!(self.result, OutcomeResult::Response { .. })
    }

    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self.result {
            OutcomeResult::Response { status, .. } => Some(status),
            OutcomeResult::Failed { .. } => None,
        }
    }

    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match &self.result {
            OutcomeResult::Response { body, .. } => Some(body.as_str()),
            OutcomeResult::Failed { .. } => None,
        }
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match &self.result {
            OutcomeResult::Response { .. } => None,
            OutcomeResult::Failed { message } => Some(message.as_str()),
        }
    }
}
