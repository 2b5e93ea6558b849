use std::error::Error as StdError;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use tracing::debug;

use crate::args::DEFAULT_USER_AGENT;
use crate::domain::{IssueOperation, OutcomeResult};
use crate::error::{AppError, AppResult, HttpError};

use super::EndpointConfig;

/// Sends one operation to the remote API.
///
/// Implementations never fail: every problem is folded into
/// `OutcomeResult::Failed` so a batch can keep going.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, operation: IssueOperation, payload: &Value) -> OutcomeResult;
}

/// `reqwest`-backed transport. The client and its connection pool are built
/// once and shared by every request in every batch.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: EndpointConfig,
}

impl HttpTransport {
    /// Builds the shared HTTP client for `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be built.
    pub fn new(endpoint: EndpointConfig) -> AppResult<Self> {
        let client = Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .map_err(|err| AppError::http(HttpError::BuildClientFailed { source: err }))?;
        Ok(Self { client, endpoint })
    }

    async fn post(
        &self,
        operation: IssueOperation,
        payload: &Value,
    ) -> Result<(u16, String), HttpError> {
        let url = self.endpoint.operation_url(operation)?;
        let body =
            serde_json::to_vec(payload).map_err(|err| HttpError::SerializePayload { source: err })?;

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|err| HttpError::RequestFailed { source: err })?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|err| HttpError::ReadBody { source: err })?;
        Ok((status, text))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, operation: IssueOperation, payload: &Value) -> OutcomeResult {
        match self.post(operation, payload).await {
            Ok((status, body)) => OutcomeResult::Response { status, body },
            Err(err) => {
                let message = describe_error(&err);
                debug!("{} failed: {}", operation, message);
                OutcomeResult::Failed { message }
            }
        }
    }
}

/// Renders an error with its whole source chain, skipping causes whose text
/// is already part of the message.
pub(crate) fn describe_error(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
