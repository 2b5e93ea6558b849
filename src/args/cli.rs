use clap::{Args, Parser, Subcommand};

use crate::domain::IssueId;
use crate::error::ValidationError;

use super::parsers::{parse_count, parse_delay_max, parse_delay_min, parse_issue_ids};
use super::types::OutputFormat;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Load-testing client for an issue-tracking API: creates issues in jittered batches and queries or cancels them concurrently."
)]
pub struct ClientArgs {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Base URL of the issue-tracking API (e.g. http://localhost:5000)
    #[arg(
        long = "base-url",
        short = 'u',
        env = "ISSUE_LOADTEST_BASE_URL",
        global = true
    )]
    pub base_url: Option<String>,

    /// Path to config file (TOML or JSON)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    /// How outcomes are printed
    #[arg(long = "output-format", value_enum, global = true)]
    pub output_format: Option<OutputFormat>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Disable ANSI colors in log output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Create a batch of issues with randomized pauses between launches
    Create(CreateArgs),
    /// Query the state of issues by id
    GetState(IssueIdsArgs),
    /// Cancel issues by id
    Cancel(IssueIdsArgs),
    /// Menu-driven session (default when no command is given)
    Interactive,
}

#[derive(Debug, Args, Clone, Default)]
pub struct CreateArgs {
    /// Number of issues to create
    #[arg(long, short = 'n', value_parser = parse_count)]
    pub count: Option<usize>,

    /// Minimum pause between two launches, in milliseconds
    #[arg(long = "delay-min", value_parser = parse_delay_min)]
    pub delay_min_ms: Option<u64>,

    /// Maximum pause between two launches, in milliseconds (exclusive)
    #[arg(long = "delay-max", value_parser = parse_delay_max)]
    pub delay_max_ms: Option<u64>,
}

#[derive(Debug, Args, Clone)]
pub struct IssueIdsArgs {
    /// Issue ids, separated by commas and/or spaces
    #[arg(
        value_name = "IDS",
        required = true,
        num_args = 1..,
        allow_negative_numbers = true
    )]
    pub ids: Vec<String>,
}

impl IssueIdsArgs {
    /// # Errors
    ///
    /// Returns an error when an id does not parse or no id was given.
    pub fn issue_ids(&self) -> Result<Vec<IssueId>, ValidationError> {
        parse_issue_ids(&self.ids.join(" "))
    }
}
