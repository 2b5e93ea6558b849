use reqwest::StatusCode;
use serde::Serialize;
use tracing::warn;

use crate::args::OutputFormat;
use crate::domain::{IssueOperation, OperationOutcome, OutcomeResult};

#[derive(Serialize)]
struct OutcomeRecord<'outcome> {
    index: usize,
    operation: IssueOperation,
    succeeded: bool,
    status: Option<u16>,
    body: Option<&'outcome str>,
    error: Option<&'outcome str>,
}

/// Renders one outcome. Text output is a small block preceded by a blank
/// line; JSONL output is a single line.
#[must_use]
pub fn format_outcome(outcome: &OperationOutcome, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_text(outcome),
        OutputFormat::Jsonl => format_jsonl(outcome),
    }
}

fn format_text(outcome: &OperationOutcome) -> String {
    let position = outcome.index.saturating_add(1);
    match &outcome.result {
        OutcomeResult::Response { status, body } => format!(
            "\nCall {} (request {})\n\tstatus: {};\n\tresult: {};",
            outcome.operation,
            position,
            describe_status(*status),
            body
        ),
        OutcomeResult::Failed { message } => format!(
            "\nError calling {} (request {}): \"{}\".",
            outcome.operation, position, message
        ),
    }
}

fn format_jsonl(outcome: &OperationOutcome) -> String {
    let record = OutcomeRecord {
        index: outcome.index,
        operation: outcome.operation,
        succeeded: outcome.succeeded(),
        status: outcome.status_code(),
        body: outcome.body(),
        error: outcome.error_message(),
    };
    match serde_json::to_string(&record) {
        Ok(line) => line,
        Err(err) => {
            warn!("Failed to encode outcome as JSON: {}", err);
            format_text(outcome)
        }
    }
}

fn describe_status(status: u16) -> String {
    StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .map_or_else(
            || status.to_string(),
            |reason| format!("{} {}", status, reason),
        )
}
