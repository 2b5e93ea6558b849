pub(crate) const DEFAULT_USER_AGENT: &str = concat!("issue-loadtest/", env!("CARGO_PKG_VERSION"));

/// Config files checked in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILES: [&str; 2] = ["issue-loadtest.toml", "issue-loadtest.json"];

pub const DEFAULT_CREATE_COUNT: usize = 10;
pub const DEFAULT_DELAY_MIN_MS: u64 = 100;
pub const DEFAULT_DELAY_MAX_MS: u64 = 1_000;
