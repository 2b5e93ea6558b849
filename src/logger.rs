use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Logs go to stderr; stdout carries prompts and outcome reports.
pub fn init_logging(verbose: bool, no_color: bool) {
    let configured = std::env::var("ISSUE_LOADTEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter(configured.as_deref(), verbose))
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}

/// An explicit filter wins; one that does not parse falls back to `info`.
fn env_filter(configured: Option<&str>, verbose: bool) -> EnvFilter {
    configured.map_or_else(
        || EnvFilter::new(default_level(verbose)),
        |value| EnvFilter::try_new(value).unwrap_or_else(|_| EnvFilter::new("info")),
    )
}

const fn default_level(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_flag_picks_the_default_level() -> Result<(), String> {
        let quiet = env_filter(None, false).to_string();
        let verbose = env_filter(None, true).to_string();
        if quiet != "info" || verbose != "debug" {
            return Err(format!("Unexpected defaults: {} / {}", quiet, verbose));
        }
        Ok(())
    }

    #[test]
    fn configured_filter_overrides_verbose() -> Result<(), String> {
        let filter = env_filter(Some("issue_loadtest=trace"), true).to_string();
        if filter != "issue_loadtest=trace" {
            return Err(format!("Unexpected filter: {}", filter));
        }
        Ok(())
    }

    #[test]
    fn unparsable_filter_falls_back_to_info() -> Result<(), String> {
        let filter = env_filter(Some("issue_loadtest=loudest"), true).to_string();
        if filter != "info" {
            return Err(format!("Unexpected filter: {}", filter));
        }
        Ok(())
    }

    #[test]
    fn init_logging_is_idempotent() {
        init_logging(false, false);
        init_logging(true, true);
    }
}
