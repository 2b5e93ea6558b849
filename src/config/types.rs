use serde::Deserialize;

use crate::args::OutputFormat;

#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub base_url: Option<String>,
    pub output_format: Option<OutputFormat>,
    pub create: Option<CreateConfig>,
}

/// `[create]` table: defaults for create batches.
#[derive(Debug, Default, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CreateConfig {
    pub count: Option<usize>,
    pub delay_min_ms: Option<u64>,
    pub delay_max_ms: Option<u64>,
}
