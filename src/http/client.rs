use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::debug;

use crate::args::DEFAULT_USER_AGENT;
use crate::domain::{ForecastRequest, ForecastResult};
use crate::error::RequestError;

use super::wire::parse_forecast_body;

/// Exchanges a forecast request for a predicted series.
///
/// The orchestrator only talks to the service through this trait, so tests
/// can swap in scripted clients.
#[async_trait]
pub trait PredictionClient: Send + Sync {
    /// Submits `request` and returns the predicted series.
    ///
    /// # Errors
    ///
    /// Returns a transport error for network failures and non-2xx statuses,
    /// and a malformed-response error when the body does not match the
    /// expected shape.
    async fn predict(&self, request: &ForecastRequest) -> Result<ForecastResult, RequestError>;
}

#[derive(Debug, Clone)]
pub struct HttpPredictionClient {
    client: Client,
    endpoint: Url,
}

impl HttpPredictionClient {
    /// Builds a client that POSTs to `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying reqwest client cannot be built.
    pub fn new(endpoint: Url) -> Result<Self, RequestError> {
        let client = Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .map_err(|err| RequestError::BuildClient { source: err })?;
        Ok(Self { client, endpoint })
    }

    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl PredictionClient for HttpPredictionClient {
    async fn predict(&self, request: &ForecastRequest) -> Result<ForecastResult, RequestError> {
        debug!(
            "POST {} with {} month(s)",
            self.endpoint,
            request.months().len()
        );
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|err| RequestError::Transport { source: err })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RequestError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| RequestError::Transport { source: err })?;
        parse_forecast_body(&body)
    }
}
