//! # Skrybe Client
//!
//! Async client for the Skrybe email-marketing HTTP API: sending transactional
//! email, creating campaigns and managing subscriber lists.
//!
//! The client is a thin layer over [`reqwest`]. Each call validates its options
//! locally, flattens them into a form body prefixed with the API key, waits for
//! the pacing slot and POSTs the form. JSON responses are parsed; any other body
//! is handed back as raw text.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use skrybe_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let client = Client::new("your-api-key")?
//!         .with_logger(std::sync::Arc::new(TracingLogger));
//!
//!     let options = SendEmailOptions::new(
//!         "John Doe",
//!         "john@example.com",
//!         "Test Email",
//!         "<h1>Hello World!</h1>",
//!     )
//!     .with_to(vec!["recipient@example.com".to_string()]);
//!
//!     let response = client.send_email(&options).await?;
//!     println!("{response}");
//!     Ok(())
//! }
//! ```
//!
//! ## Errors
//!
//! Failed local checks surface as [`error::AppError::Validation`] before any
//! network traffic. Connection failures and non-2xx statuses surface as
//! [`error::AppError::Transport`]. A body that is not JSON is not an error.

/// Client, configuration, pacing and service interfaces
pub mod application;
/// Fixed values: endpoints, defaults and headers
pub mod constants;
/// Error types
pub mod error;
/// Request, response and wire models
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}

pub use application::client::Client;
pub use application::config::Config;
pub use error::{AppError, Result};
