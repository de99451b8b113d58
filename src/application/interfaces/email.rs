use crate::error::AppError;
use crate::model::requests::SendEmailOptions;
use crate::model::responses::ApiResponse;
use async_trait::async_trait;

/// Interface for the email service
#[async_trait]
pub trait EmailService: Send + Sync {
    /// Sends a transactional email
    ///
    /// # Errors
    /// * `AppError::Validation` - `fromEmail` or a `to` address is malformed, or a required field is blank
    /// * `AppError::Transport` - The request could not be completed
    async fn send_email(&self, options: &SendEmailOptions) -> Result<ApiResponse, AppError>;
}
