use crate::domain::IssueId;
use crate::error::{DelayBound, ValidationError};

/// Parses a positive request count.
///
/// # Errors
///
/// Returns an error for non-numeric input or zero.
pub fn parse_count(s: &str) -> Result<usize, ValidationError> {
    let value = s.trim();
    let count = value
        .parse::<usize>()
        .map_err(|err| ValidationError::InvalidCount {
            value: value.to_owned(),
            source: err,
        })?;
    if count == 0 {
        return Err(ValidationError::CountZero);
    }
    Ok(count)
}

/// Parses a delay in milliseconds.
///
/// # Errors
///
/// Returns an error for input that is not a non-negative integer.
pub fn parse_delay(s: &str, bound: DelayBound) -> Result<u64, ValidationError> {
    let value = s.trim();
    value
        .parse::<u64>()
        .map_err(|err| ValidationError::InvalidDelay {
            value: value.to_owned(),
            bound,
            source: err,
        })
}

pub(super) fn parse_delay_min(s: &str) -> Result<u64, ValidationError> {
    parse_delay(s, DelayBound::Min)
}

pub(super) fn parse_delay_max(s: &str) -> Result<u64, ValidationError> {
    parse_delay(s, DelayBound::Max)
}

/// Parses issue ids separated by commas and/or whitespace.
///
/// # Errors
///
/// Returns an error when any id is not an integer or the list is empty.
pub fn parse_issue_ids(s: &str) -> Result<Vec<IssueId>, ValidationError> {
    let ids = s
        .split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<IssueId>()
                .map_err(|err| ValidationError::InvalidIssueId {
                    value: part.to_owned(),
                    source: err,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;
    if ids.is_empty() {
        return Err(ValidationError::EmptyIssueList);
    }
    Ok(ids)
}
