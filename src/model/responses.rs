use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Body returned by an API operation
///
/// JSON bodies are parsed. Anything that does not parse is kept verbatim as
/// [`ApiResponse::Raw`]; that is not treated as a failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiResponse {
    /// Parsed JSON body
    Json(Value),
    /// Body that was not valid JSON
    Raw(String),
}

impl ApiResponse {
    /// Parses `body`, falling back to the raw text
    #[must_use]
    pub fn from_body(body: String) -> Self {
        match serde_json::from_str::<Value>(&body) {
            Ok(value) => ApiResponse::Json(value),
            Err(_) => ApiResponse::Raw(body),
        }
    }

    /// Parsed JSON, if the body was JSON
    #[must_use]
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ApiResponse::Json(value) => Some(value),
            ApiResponse::Raw(_) => None,
        }
    }

    /// Raw text, if the body was not JSON
    #[must_use]
    pub fn as_raw(&self) -> Option<&str> {
        match self {
            ApiResponse::Raw(text) => Some(text),
            ApiResponse::Json(_) => None,
        }
    }

    /// Consumes the response, returning the JSON value if any
    #[must_use]
    pub fn into_json(self) -> Option<Value> {
        match self {
            ApiResponse::Json(value) => Some(value),
            ApiResponse::Raw(_) => None,
        }
    }

    /// Top-level member `key` of a JSON object body
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_json().and_then(|value| value.get(key))
    }

    /// Whether the body is a JSON object with `"success": true`
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.get("success").and_then(Value::as_bool).unwrap_or(false)
    }

    /// Deserializes a JSON body into `T`
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        match self {
            ApiResponse::Json(value) => Ok(T::deserialize(value)?),
            ApiResponse::Raw(text) => Err(AppError::Serialization(format!(
                "response is not JSON: {text}"
            ))),
        }
    }

    /// Log-friendly view of the body
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            ApiResponse::Json(value) => value.clone(),
            ApiResponse::Raw(text) => Value::String(text.clone()),
        }
    }
}

impl fmt::Display for ApiResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiResponse::Json(value) => write!(f, "{value}"),
            ApiResponse::Raw(text) => f.write_str(text),
        }
    }
}
