use std::io::{BufRead, Write};
use std::str::FromStr;

use tokio::io::AsyncWrite;
use tokio::runtime::Runtime;
use tracing::debug;

use issue_loadtest::app::BatchRunner;
use issue_loadtest::args::{parse_count, parse_delay, parse_issue_ids};
use issue_loadtest::config::CreateDefaults;
use issue_loadtest::domain::{BatchPlan, IssueId, IssueOperation};
use issue_loadtest::error::{AppResult, DelayBound, ValidationError};
use issue_loadtest::http::EndpointConfig;

use super::Prompter;

const MENU: &str = "\nChoose a command:\n\t- A\tcreate issues;\n\t- G\tget issue state;\n\t- R\tcancel issues;\n\t- Q\tquit;";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuCommand {
    Create,
    GetState,
    Cancel,
    Quit,
}

impl FromStr for MenuCommand {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" | "add" | "create" => Ok(MenuCommand::Create),
            "g" | "get" | "get-state" => Ok(MenuCommand::GetState),
            "r" | "cancel" => Ok(MenuCommand::Cancel),
            "q" | "quit" | "exit" => Ok(MenuCommand::Quit),
            _ => Err(ValidationError::UnknownCommand {
                value: s.trim().to_owned(),
            }),
        }
    }
}

impl MenuCommand {
    const fn issue_operation(self) -> Option<IssueOperation> {
        match self {
            MenuCommand::GetState => Some(IssueOperation::GetState),
            MenuCommand::Cancel => Some(IssueOperation::Cancel),
            MenuCommand::Create | MenuCommand::Quit => None,
        }
    }
}

pub(crate) fn prompt_base_url<R, W>(
    prompter: &mut Prompter<R, W>,
) -> AppResult<Option<EndpointConfig>>
where
    R: BufRead,
    W: Write,
{
    prompter.ask_until("Base URL", EndpointConfig::parse)
}

/// Asks for count, minimum and maximum delay until they form a valid plan.
/// An empty answer takes the default shown in brackets.
pub(crate) fn prompt_batch_plan<R, W>(
    prompter: &mut Prompter<R, W>,
    defaults: CreateDefaults,
) -> AppResult<Option<BatchPlan>>
where
    R: BufRead,
    W: Write,
{
    loop {
        let Some(count) = prompter.ask_until(
            &format!("Number of requests [{}]", defaults.count),
            |answer| or_default(answer, defaults.count, parse_count),
        )?
        else {
            return Ok(None);
        };
        let Some(delay_min_ms) = prompter.ask_until(
            &format!(
                "Minimum delay between requests, ms [{}]",
                defaults.delay_min_ms
            ),
            |answer| {
                or_default(answer, defaults.delay_min_ms, |s| {
                    parse_delay(s, DelayBound::Min)
                })
            },
        )?
        else {
            return Ok(None);
        };
        let Some(delay_max_ms) = prompter.ask_until(
            &format!(
                "Maximum delay between requests, ms [{}]",
                defaults.delay_max_ms
            ),
            |answer| {
                or_default(answer, defaults.delay_max_ms, |s| {
                    parse_delay(s, DelayBound::Max)
                })
            },
        )?
        else {
            return Ok(None);
        };

        match BatchPlan::new(count, delay_min_ms, delay_max_ms) {
            Ok(plan) => return Ok(Some(plan)),
            Err(err) => prompter.say(&err.to_string())?,
        }
    }
}

pub(crate) fn prompt_issue_ids<R, W>(
    prompter: &mut Prompter<R, W>,
) -> AppResult<Option<Vec<IssueId>>>
where
    R: BufRead,
    W: Write,
{
    prompter.ask_until("Issue ids separated by commas or spaces", parse_issue_ids)
}

fn or_default<T, F>(answer: &str, default: T, parse: F) -> Result<T, ValidationError>
where
    F: FnOnce(&str) -> Result<T, ValidationError>,
{
    if answer.is_empty() {
        return Ok(default);
    }
    parse(answer)
}

/// Shows the menu until the user quits or input ends. Every accepted command
/// runs one batch to completion before the menu comes back.
pub(crate) fn run_session<R, W, O, F>(
    prompter: &mut Prompter<R, W>,
    runtime: &Runtime,
    runner: &BatchRunner,
    defaults: CreateDefaults,
    make_output: F,
) -> AppResult<()>
where
    R: BufRead,
    W: Write,
    O: AsyncWrite + Unpin + Send + 'static,
    F: Fn() -> O,
{
    loop {
        prompter.say(MENU)?;
        let Some(answer) = prompter.ask("Command")? else {
            return Ok(());
        };
        let command = match answer.parse::<MenuCommand>() {
            Ok(command) => command,
            Err(err) => {
                prompter.say(&err.to_string())?;
                continue;
            }
        };
        debug!("Menu command {:?}", command);

        if command == MenuCommand::Quit {
            return Ok(());
        }

        if let Some(operation) = command.issue_operation() {
            let Some(issue_ids) = prompt_issue_ids(prompter)? else {
                return Ok(());
            };
            runtime.block_on(runner.for_issues(operation, &issue_ids, make_output()))?;
        } else {
            let Some(plan) = prompt_batch_plan(prompter, defaults)? else {
                return Ok(());
            };
            runtime.block_on(runner.create(&plan, make_output()))?;
        }
    }
}
