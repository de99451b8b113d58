/******************************************************************************
   Author: Skrybe SDK Contributors
   Date: 14/10/26
******************************************************************************/

//! # Skrybe Client Prelude
//!
//! Re-exports the types and traits needed for most Skrybe API interactions.
//!
//! ## Usage
//!
//! ```rust
//! use skrybe_client::prelude::*;
//!
//! let config = Config::new("your-api-key");
//! let client = Client::from_config(config).expect("client");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Skrybe API client
pub use crate::application::config::{Config, Credentials, RateLimiterConfig, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Error types
pub use crate::error::{AppError, FieldError, TransportError, ValidationError};

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

/// Main client
pub use crate::application::client::Client;

/// Service traits implemented by the client
pub use crate::application::interfaces::audience::AudienceService;
pub use crate::application::interfaces::campaign::CampaignService;
pub use crate::application::interfaces::email::EmailService;

/// Request pacing
pub use crate::application::rate_limiter::RateLimiter;

// ============================================================================
// MODELS
// ============================================================================

/// Wire model
pub use crate::model::form::{FieldValue, FormPayload, RequestOptions};

/// Operation options
pub use crate::model::requests::{
    CreateCampaignOptions, PageQuery, RecipientVariables, SendEmailOptions,
};

/// Response wrapper
pub use crate::model::responses::ApiResponse;

// ============================================================================
// LOGGING
// ============================================================================

/// Logging collaborator and subscriber setup
pub use crate::utils::logger::{LogLevel, Logger, NoopLogger, TracingLogger, setup_logger};

// ============================================================================
// EXTERNAL DEPENDENCIES
// ============================================================================

/// Async trait support
pub use async_trait::async_trait;

/// Serialization support
pub use serde::{Deserialize, Serialize};

/// JSON support
pub use serde_json::{Value, json};
