/******************************************************************************
   Author: Skrybe SDK Contributors
   Date: 14/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::application::interfaces::audience::AudienceService;
use crate::application::interfaces::campaign::CampaignService;
use crate::application::interfaces::email::EmailService;
use crate::constants::{
    CAMPAIGN_CREATE_ENDPOINT, CAMPAIGNS_GET_ENDPOINT, EMAIL_SEND_ENDPOINT, LISTS_GET_ENDPOINT,
    SUBSCRIBER_ADD_ENDPOINT, SUBSCRIBERS_GET_ENDPOINT,
};
use crate::error::{AppError, ValidationError};
use crate::model::form::RequestOptions;
use crate::model::http::HttpClient;
use crate::model::requests::{CreateCampaignOptions, PageQuery, SendEmailOptions};
use crate::model::responses::ApiResponse;
use crate::utils::logger::Logger;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Client for the Skrybe API
///
/// Cloning is cheap; clones share the connection pool and the pacing slot.
#[derive(Clone, Debug)]
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a client for the production host
    pub fn new(api_key: impl Into<String>) -> Result<Self, AppError> {
        Self::from_config(Config::new(api_key))
    }

    /// Creates a client for a custom host
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, AppError> {
        Self::from_config(Config::with_base_url(api_key, base_url))
    }

    /// Creates a client from a full configuration
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::new(config)?);
        Ok(Self { http_client })
    }

    /// Returns a client bound to `logger`
    #[must_use]
    pub fn with_logger(self, logger: Arc<dyn Logger>) -> Self {
        let http_client = (*self.http_client).clone().with_logger(logger);
        Self {
            http_client: Arc::new(http_client),
        }
    }

    /// Configuration in use
    #[must_use]
    pub fn config(&self) -> &Config {
        self.http_client.config()
    }

    /// Underlying HTTP layer
    #[must_use]
    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }
}

fn require_list_id(list_id: &str) -> Result<(), ValidationError> {
    if list_id.is_empty() {
        Err(ValidationError::single("listId", "Field 'listId' is required"))
    } else {
        Ok(())
    }
}

#[async_trait]
impl EmailService for Client {
    async fn send_email(&self, options: &SendEmailOptions) -> Result<ApiResponse, AppError> {
        options.validate()?;
        debug!("Sending email: {}", options.subject);
        self.http_client
            .post_form(EMAIL_SEND_ENDPOINT, &options.to_request_options())
            .await
    }
}

#[async_trait]
impl CampaignService for Client {
    async fn create_campaign(
        &self,
        options: &CreateCampaignOptions,
    ) -> Result<ApiResponse, AppError> {
        options.validate()?;
        debug!("Creating campaign: {}", options.title);
        self.http_client
            .post_form(CAMPAIGN_CREATE_ENDPOINT, &options.to_request_options())
            .await
    }

    async fn get_campaigns(&self, query: &PageQuery) -> Result<ApiResponse, AppError> {
        let mut data = RequestOptions::new();
        query.apply_to(&mut data);
        self.http_client.post_form(CAMPAIGNS_GET_ENDPOINT, &data).await
    }
}

#[async_trait]
impl AudienceService for Client {
    async fn get_lists(&self, include_hidden: bool) -> Result<ApiResponse, AppError> {
        let flag = if include_hidden { "yes" } else { "no" };
        let data = RequestOptions::new().with("include_hidden", flag);
        self.http_client.post_form(LISTS_GET_ENDPOINT, &data).await
    }

    async fn get_subscribers(
        &self,
        list_id: &str,
        query: &PageQuery,
    ) -> Result<ApiResponse, AppError> {
        require_list_id(list_id)?;
        let mut data = RequestOptions::new().with("list_id", list_id);
        query.apply_to(&mut data);
        self.http_client.post_form(SUBSCRIBERS_GET_ENDPOINT, &data).await
    }

    async fn add_subscriber(
        &self,
        list_id: &str,
        subscriber: RequestOptions,
    ) -> Result<ApiResponse, AppError> {
        require_list_id(list_id)?;
        let mut data = RequestOptions::new().with("list_id", list_id);
        data.merge(subscriber);
        self.http_client.post_form(SUBSCRIBER_ADD_ENDPOINT, &data).await
    }
}
