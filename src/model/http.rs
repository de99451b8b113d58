/******************************************************************************
   Author: Skrybe SDK Contributors
   Date: 14/10/26
******************************************************************************/

use crate::application::config::Config;
use crate::application::rate_limiter::RateLimiter;
use crate::constants::USER_AGENT;
use crate::error::{AppError, TransportError};
use crate::model::form::{FormPayload, RequestOptions};
use crate::model::responses::ApiResponse;
use crate::utils::logger::{Logger, NoopLogger};
use reqwest::Client as HttpInternalClient;
use serde_json::json;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// HTTP layer of the client: pacing, form encoding and response handling
///
/// Every API operation funnels through [`HttpClient::post_form`].
#[derive(Clone)]
pub struct HttpClient {
    http_client: HttpInternalClient,
    config: Arc<Config>,
    rate_limiter: RateLimiter,
    logger: Arc<dyn Logger>,
}

impl HttpClient {
    /// Creates the HTTP layer with the SDK user agent and a no-op logger
    ///
    /// # Errors
    /// * `AppError::Transport` - If the underlying reqwest client cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .build()?;
        let rate_limiter = RateLimiter::new(&config.rate_limiter);

        Ok(Self {
            http_client,
            config: Arc::new(config),
            rate_limiter,
            logger: Arc::new(NoopLogger),
        })
    }

    /// Returns a copy bound to `logger`, sharing connection pool and pacing
    #[must_use]
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    /// Configuration in use
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Pacing state shared by this client and its copies
    #[must_use]
    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.rate_limiter
    }

    /// Dispatches `data` to `endpoint` as a form POST
    ///
    /// Waits for the pacing slot, logs the request, prefixes the API key and
    /// sends. A JSON body is parsed; any other body is returned as
    /// [`ApiResponse::Raw`]. Connection failures and non-2xx statuses are
    /// logged at error level and returned as [`AppError::Transport`].
    pub async fn post_form(
        &self,
        endpoint: &str,
        data: &RequestOptions,
    ) -> Result<ApiResponse, AppError> {
        self.rate_limiter.wait().await;

        self.logger.info(
            &format!("Making request to {endpoint}"),
            &json!({
                "endpoint": endpoint,
                "data": data.to_json(),
            }),
        );

        let payload = FormPayload::build(&self.config.credentials.api_key, data)?;
        let url = self.config.endpoint_url(endpoint);

        let body = match self.send(&url, &payload).await {
            Ok(body) => body,
            Err(e) => {
                let error = TransportError::from(e);
                self.logger.error(
                    "Request failed",
                    &json!({
                        "endpoint": endpoint,
                        "error": error.message(),
                        "code": error.code(),
                    }),
                );
                return Err(AppError::Transport(error));
            }
        };

        let response = ApiResponse::from_body(body);
        self.logger.debug(
            "Response received",
            &json!({
                "endpoint": endpoint,
                "response": response.to_json(),
            }),
        );

        Ok(response)
    }

    /// Single round trip, returning the body of a 2xx response
    ///
    /// `form` sets the `application/x-www-form-urlencoded` content type.
    async fn send(&self, url: &str, payload: &FormPayload) -> Result<String, reqwest::Error> {
        debug!("POST {}", url);

        let response = self
            .http_client
            .post(url)
            .form(payload.pairs())
            .send()
            .await?;
        debug!("Response status: {}", response.status());

        response.error_for_status()?.text().await
    }
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.config.rest_api.base_url)
            .field("rate_limiter", &self.rate_limiter)
            .finish_non_exhaustive()
    }
}
