/// Client implementing the API operations
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces implemented by the client
pub mod interfaces;
/// Rate limiter module for request pacing
pub mod rate_limiter;
