use thiserror::Error;

#[derive(Debug, Error, Clone, Copy)]
pub enum DelayBound {
    #[error("minimum")]
    Min,
    #[error("maximum")]
    Max,
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Request count must be > 0.")]
    CountZero,
    #[error("Invalid request count '{value}': {source}")]
    InvalidCount {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Invalid {bound} delay '{value}': {source}")]
    InvalidDelay {
        value: String,
        bound: DelayBound,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Maximum delay ({max_ms} ms) must be >= minimum delay ({min_ms} ms).")]
    DelayRangeInverted { min_ms: u64, max_ms: u64 },
    #[error("Issue id list was empty.")]
    EmptyIssueList,
    #[error("Invalid issue id '{value}': {source}")]
    InvalidIssueId {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Unknown command '{value}'. Use A, G, R or Q.")]
    UnknownCommand { value: String },
}
