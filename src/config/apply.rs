use crate::args::{
    ClientArgs, CreateArgs, DEFAULT_CREATE_COUNT, DEFAULT_DELAY_MAX_MS, DEFAULT_DELAY_MIN_MS,
    OutputFormat,
};
use crate::domain::BatchPlan;
use crate::error::ValidationError;

use super::types::{ConfigFile, CreateConfig};

/// Create-batch parameters used when the command line leaves them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateDefaults {
    pub count: usize,
    pub delay_min_ms: u64,
    pub delay_max_ms: u64,
}

impl Default for CreateDefaults {
    fn default() -> Self {
        Self {
            count: DEFAULT_CREATE_COUNT,
            delay_min_ms: DEFAULT_DELAY_MIN_MS,
            delay_max_ms: DEFAULT_DELAY_MAX_MS,
        }
    }
}

impl CreateDefaults {
    fn with_config(self, config: Option<CreateConfig>) -> Self {
        let Some(config) = config else {
            return self;
        };
        Self {
            count: config.count.unwrap_or(self.count),
            delay_min_ms: config.delay_min_ms.unwrap_or(self.delay_min_ms),
            delay_max_ms: config.delay_max_ms.unwrap_or(self.delay_max_ms),
        }
    }

    /// Command-line values override the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error when the merged values do not form a valid plan.
    pub fn plan(&self, args: &CreateArgs) -> Result<BatchPlan, ValidationError> {
        BatchPlan::new(
            args.count.unwrap_or(self.count),
            args.delay_min_ms.unwrap_or(self.delay_min_ms),
            args.delay_max_ms.unwrap_or(self.delay_max_ms),
        )
    }
}

/// Effective settings after merging the command line (including its
/// environment fallbacks) over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: Option<String>,
    pub output_format: OutputFormat,
    pub create: CreateDefaults,
}

#[must_use]
pub fn resolve_settings(args: &ClientArgs, config: Option<ConfigFile>) -> Settings {
    let config = config.unwrap_or_default();
    let base_url = non_empty(args.base_url.clone()).or_else(|| non_empty(config.base_url));
    Settings {
        base_url,
        output_format: args
            .output_format
            .or(config.output_format)
            .unwrap_or_default(),
        create: CreateDefaults::default().with_config(config.create),
    }
}

fn non_empty(url: Option<String>) -> Option<String> {
    url.filter(|value| !value.trim().is_empty())
}
