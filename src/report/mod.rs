//! Per-outcome output, serialized through a single writer task.
mod format;
mod reporter;


pub use format::format_outcome;
pub use reporter::{OutcomeReporter, report};
