use std::fmt;
use std::str::FromStr;

use reqwest::Url;

use crate::domain::IssueOperation;
use crate::error::{ConfigError, HttpError};

/// Route prefix every operation path lives under.
pub const ROUTE_PREFIX: &str = "Issues";

/// Base address of the remote API. Fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    base: Url,
}

impl EndpointConfig {
    /// Parses and normalises an absolute `http`/`https` base address.
    ///
    /// The base path is kept and always ends in `/`, so operation paths are
    /// appended to it rather than replacing it. Query and fragment are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error when the address does not parse, uses another scheme,
    /// or has no host.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim();
        let mut base = Url::parse(trimmed).map_err(|err| ConfigError::InvalidBaseUrl {
            url: trimmed.to_owned(),
            source: err,
        })?;

        match base.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(ConfigError::UnsupportedScheme {
                    url: trimmed.to_owned(),
                    scheme: scheme.to_owned(),
                });
            }
        }
        if base.host_str().is_none_or(str::is_empty) {
            return Err(ConfigError::BaseUrlWithoutHost {
                url: trimmed.to_owned(),
            });
        }

        base.set_query(None);
        base.set_fragment(None);
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Self { base })
    }

    #[must_use]
    pub const fn base(&self) -> &Url {
        &self.base
    }

    /// `{base}/Issues/{operation}`
    ///
    /// # Errors
    ///
    /// Returns an error if the joined URL is invalid.
    pub fn operation_url(&self, operation: IssueOperation) -> Result<Url, HttpError> {
        let relative = format!("{}/{}", ROUTE_PREFIX, operation.as_str());
        self.base
            .join(&relative)
            .map_err(|err| HttpError::JoinUrlFailed {
                url: relative,
                source: err,
            })
    }
}

impl FromStr for EndpointConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for EndpointConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base.as_str())
    }
}
