//! Issue operations, their outcomes, and create-batch planning.
mod operation;
mod outcome;
mod plan;


pub use operation::{IssueId, IssueOperation, OperationRequest};
pub use outcome::{OperationOutcome, OutcomeResult};
pub use plan::{BatchPlan, DelayRange};
