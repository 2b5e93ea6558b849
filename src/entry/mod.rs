use std::io::{self, BufRead, Write};
use std::sync::Arc;

use clap::Parser;
use tokio::runtime::Runtime;
use tracing::{error, info};

use issue_loadtest::app::BatchRunner;
use issue_loadtest::args::{ClientArgs, Command};
use issue_loadtest::config::{Settings, load_config, resolve_settings};
use issue_loadtest::domain::{BatchPlan, IssueId, IssueOperation};
use issue_loadtest::error::{AppError, AppResult, ConfigError};
use issue_loadtest::http::{EndpointConfig, HttpTransport, Transport};

use crate::interactive::{Prompter, prompt_base_url, run_session};

enum RunPlan {
    Create(BatchPlan),
    Issues {
        operation: IssueOperation,
        issue_ids: Vec<IssueId>,
    },
    Interactive,
}

impl RunPlan {
    const fn is_interactive(&self) -> bool {
        matches!(self, RunPlan::Interactive)
    }
}

pub(crate) fn run() -> AppResult<()> {
    let args = ClientArgs::parse();

    crate::logger::init_logging(args.verbose, args.no_color);

    let config = load_config(args.config.as_deref())?;
    let settings = resolve_settings(&args, config);
    let plan = build_plan(args.command.as_ref(), &settings)?;

    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());
    let endpoint = resolve_endpoint(&settings, plan.is_interactive(), &mut prompter)?;
    info!("Base URL: {}", endpoint);

    let transport: Arc<dyn Transport> = Arc::new(HttpTransport::new(endpoint)?);
    let runner = BatchRunner::new(transport, settings.output_format);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    execute_plan(plan, &settings, &runtime, &runner, &mut prompter)
}

/// Validates the requested command before anything is sent.
fn build_plan(command: Option<&Command>, settings: &Settings) -> AppResult<RunPlan> {
    match command {
        Some(Command::Create(create)) => Ok(RunPlan::Create(settings.create.plan(create)?)),
        Some(Command::GetState(ids)) => Ok(RunPlan::Issues {
            operation: IssueOperation::GetState,
            issue_ids: ids.issue_ids()?,
        }),
        Some(Command::Cancel(ids)) => Ok(RunPlan::Issues {
            operation: IssueOperation::Cancel,
            issue_ids: ids.issue_ids()?,
        }),
        Some(Command::Interactive) | None => Ok(RunPlan::Interactive),
    }
}

/// Command line, environment and config come first. Interactive sessions fall
/// back to prompting, re-asking after an invalid address.
fn resolve_endpoint<R, W>(
    settings: &Settings,
    interactive: bool,
    prompter: &mut Prompter<R, W>,
) -> AppResult<EndpointConfig>
where
    R: BufRead,
    W: Write,
{
    if let Some(raw) = settings.base_url.as_deref() {
        match EndpointConfig::parse(raw) {
            Ok(endpoint) => return Ok(endpoint),
            Err(err) if interactive => prompter.say(&err.to_string())?,
            Err(err) => {
                error!("{}", err);
                return Err(AppError::config(err));
            }
        }
    }

    if !interactive {
        error!("{}", ConfigError::MissingBaseUrl);
        return Err(AppError::config(ConfigError::MissingBaseUrl));
    }
    prompt_base_url(prompter)?.ok_or_else(|| AppError::config(ConfigError::MissingBaseUrl))
}

fn execute_plan<R, W>(
    plan: RunPlan,
    settings: &Settings,
    runtime: &Runtime,
    runner: &BatchRunner,
    prompter: &mut Prompter<R, W>,
) -> AppResult<()>
where
    R: BufRead,
    W: Write,
{
    match plan {
        RunPlan::Create(batch) => {
            runtime.block_on(runner.create(&batch, tokio::io::stdout()))?;
            Ok(())
        }
        RunPlan::Issues {
            operation,
            issue_ids,
        } => {
            runtime.block_on(runner.for_issues(operation, &issue_ids, tokio::io::stdout()))?;
            Ok(())
        }
        RunPlan::Interactive => run_session(
            prompter,
            runtime,
            runner,
            settings.create,
            tokio::io::stdout,
        ),
    }
}
