use crate::error::AppError;
use crate::model::form::RequestOptions;
use crate::model::requests::PageQuery;
use crate::model::responses::ApiResponse;
use async_trait::async_trait;

/// Interface for list and subscriber management
#[async_trait]
pub trait AudienceService: Send + Sync {
    /// Gets the subscriber lists
    ///
    /// # Arguments
    /// * `include_hidden` - Also return hidden lists
    async fn get_lists(&self, include_hidden: bool) -> Result<ApiResponse, AppError>;

    /// Gets a page of subscribers of `list_id`
    async fn get_subscribers(
        &self,
        list_id: &str,
        query: &PageQuery,
    ) -> Result<ApiResponse, AppError>;

    /// Adds a subscriber to `list_id`
    ///
    /// `subscriber` is sent as is after the `list_id` field.
    async fn add_subscriber(
        &self,
        list_id: &str,
        subscriber: RequestOptions,
    ) -> Result<ApiResponse, AppError>;
}
