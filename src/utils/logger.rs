/******************************************************************************
   Author: Skrybe SDK Contributors
   Date: 14/10/26
******************************************************************************/

//! Logging collaborator and subscriber setup
//!
//! The client reports each dispatch to a [`Logger`] supplied by the caller:
//! `info` before sending, `debug` with the response, `error` on failure. The
//! default is [`NoopLogger`]. [`TracingLogger`] routes the calls into
//! `tracing`, and [`setup_logger`] installs a subscriber for binaries.

use serde_json::Value;
use std::env;
use std::fmt;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Severity of a collaborator log call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    /// Diagnostic detail
    Debug,
    /// Normal operation
    Info,
    /// Something unexpected, the call still succeeded
    Warn,
    /// The call failed
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        f.write_str(name)
    }
}

/// Structured logger injected into the client
pub trait Logger: Send + Sync {
    /// Records `message` at `level` with a context mapping
    fn log(&self, level: LogLevel, message: &str, context: &Value);

    /// Records at debug level
    fn debug(&self, message: &str, context: &Value) {
        self.log(LogLevel::Debug, message, context);
    }

    /// Records at info level
    fn info(&self, message: &str, context: &Value) {
        self.log(LogLevel::Info, message, context);
    }

    /// Records at warn level
    fn warn(&self, message: &str, context: &Value) {
        self.log(LogLevel::Warn, message, context);
    }

    /// Records at error level
    fn error(&self, message: &str, context: &Value) {
        self.log(LogLevel::Error, message, context);
    }
}

/// Logger that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn log(&self, _level: LogLevel, _message: &str, _context: &Value) {}
}

/// Logger that emits `tracing` events under the `skrybe` target
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, message: &str, context: &Value) {
        match level {
            LogLevel::Debug => tracing::debug!(target: "skrybe", context = %context, "{message}"),
            LogLevel::Info => tracing::info!(target: "skrybe", context = %context, "{message}"),
            LogLevel::Warn => tracing::warn!(target: "skrybe", context = %context, "{message}"),
            LogLevel::Error => tracing::error!(target: "skrybe", context = %context, "{message}"),
        }
    }
}

/// Installs a global fmt subscriber once
///
/// The level comes from the `LOGLEVEL` environment variable (`DEBUG`, `INFO`,
/// `WARN`, `ERROR`, `TRACE`) and defaults to `INFO`.
pub fn setup_logger() {
    INIT.call_once(|| {
        let log_level = env::var("LOGLEVEL")
            .unwrap_or_else(|_| "INFO".to_string())
            .to_uppercase();

        let level = match log_level.as_str() {
            "DEBUG" => Level::DEBUG,
            "ERROR" => Level::ERROR,
            "WARN" => Level::WARN,
            "TRACE" => Level::TRACE,
            _ => Level::INFO,
        };

        let subscriber = FmtSubscriber::builder().with_max_level(level).finish();

        if tracing::subscriber::set_global_default(subscriber).is_err() {
            tracing::debug!("Global subscriber already set");
        }
    });
}
