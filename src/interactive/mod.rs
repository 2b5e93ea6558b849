//! Menu-driven session: collects batch parameters from the terminal.
mod menu;
mod prompt;


pub(crate) use menu::{prompt_base_url, run_session};
#[cfg(test)]
pub(crate) use menu::{MenuCommand, prompt_batch_plan, prompt_issue_ids};
pub(crate) use prompt::Prompter;
