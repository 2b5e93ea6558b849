use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

pub type IssueId = i64;

/// Remote action exposed under the `Issues` route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum IssueOperation {
    Create,
    GetState,
    Cancel,
}

impl IssueOperation {
    /// Path segment appended to the route prefix.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            IssueOperation::Create => "Create",
            IssueOperation::GetState => "GetState",
            IssueOperation::Cancel => "Cancel",
        }
    }
}

impl fmt::Display for IssueOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One unit of work for the dispatcher: an operation plus its JSON payload.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRequest {
    operation: IssueOperation,
    payload: Value,
}

impl OperationRequest {
    #[must_use]
    pub const fn new(operation: IssueOperation, payload: Value) -> Self {
        Self { operation, payload }
    }

    /// `Create` request with a `{ "text": ... }` body.
    #[must_use]
    pub fn create(text: &str) -> Self {
        Self::new(IssueOperation::Create, json!({ "text": text }))
    }

    /// Request addressing an existing issue with an `{ "issueId": ... }` body.
    #[must_use]
    pub fn for_issue(operation: IssueOperation, issue_id: IssueId) -> Self {
        Self::new(operation, json!({ "issueId": issue_id }))
    }

    #[must_use]
    pub fn get_state(issue_id: IssueId) -> Self {
        Self::for_issue(IssueOperation::GetState, issue_id)
    }

    #[must_use]
    pub fn cancel(issue_id: IssueId) -> Self {
        Self::for_issue(IssueOperation::Cancel, issue_id)
    }

    /// Builds one request per id, preserving the input order.
    #[must_use]
    pub fn for_issues(operation: IssueOperation, issue_ids: &[IssueId]) -> Vec<Self> {
        issue_ids
            .iter()
            .map(|issue_id| Self::for_issue(operation, *issue_id))
            .collect()
    }

    #[must_use]
    pub const fn operation(&self) -> IssueOperation {
        self.operation
    }

    #[must_use]
    pub const fn payload(&self) -> &Value {
        &self.payload
    }
}
