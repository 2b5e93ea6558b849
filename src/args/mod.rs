//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;


pub use cli::{ClientArgs, Command, CreateArgs, IssueIdsArgs};
pub use defaults::{
    DEFAULT_CONFIG_FILES, DEFAULT_CREATE_COUNT, DEFAULT_DELAY_MAX_MS, DEFAULT_DELAY_MIN_MS,
};
pub use parsers::{parse_count, parse_delay, parse_issue_ids};
pub use types::OutputFormat;

pub(crate) use defaults::DEFAULT_USER_AGENT;
