use crate::error::AppError;
use crate::model::requests::{CreateCampaignOptions, PageQuery};
use crate::model::responses::ApiResponse;
use async_trait::async_trait;

/// Interface for the campaign service
#[async_trait]
pub trait CampaignService: Send + Sync {
    /// Creates a campaign, optionally sending or scheduling it
    ///
    /// # Errors
    /// * `AppError::Validation` - `fromEmail` is malformed or missing, or a required field is blank
    /// * `AppError::Transport` - The request could not be completed
    async fn create_campaign(
        &self,
        options: &CreateCampaignOptions,
    ) -> Result<ApiResponse, AppError>;

    /// Gets a page of campaigns, optionally filtered by status
    async fn get_campaigns(&self, query: &PageQuery) -> Result<ApiResponse, AppError>;
}
