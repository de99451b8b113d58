/// Module containing environment variable helpers
pub mod config;
/// Module containing the logging collaborator and subscriber setup
pub mod logger;

pub use config::*;
pub use logger::*;
