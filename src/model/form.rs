/******************************************************************************
   Author: Skrybe SDK Contributors
   Date: 14/10/26
******************************************************************************/

//! Wire representation of request options
//!
//! A [`RequestOptions`] is the ordered set of fields describing one operation.
//! It is flattened into a [`FormPayload`]: scalars become strings, lists and
//! maps become inline JSON text, and the API key is always the first pair.
//! Field order is the caller's order, including options parsed from JSON.

use crate::constants::API_KEY_FIELD;
use crate::error::AppError;
use pretty_simple_display::DisplaySimple;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// A single request field value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Boolean flag, sent as `1` or `0`
    Bool(bool),
    /// Integer, sent in decimal
    Integer(i64),
    /// Text, sent as is
    Text(String),
    /// List, sent as JSON text
    List(Vec<FieldValue>),
    /// Nested mapping, sent as JSON text
    Map(BTreeMap<String, FieldValue>),
    /// Nested JSON kept verbatim, sent as JSON text
    Json(Value),
}

impl FieldValue {
    /// Whether the value counts as missing for a required field
    ///
    /// Empty text, empty collections, `false` and `0` are blank.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Bool(b) => !b,
            FieldValue::Integer(i) => *i == 0,
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::List(items) => items.is_empty(),
            FieldValue::Map(map) => map.is_empty(),
            FieldValue::Json(value) => match value {
                Value::Null => true,
                Value::Array(items) => items.is_empty(),
                Value::Object(map) => map.is_empty(),
                _ => false,
            },
        }
    }

    /// Form encoding of this value
    pub fn to_form_value(&self) -> Result<String, AppError> {
        match self {
            FieldValue::Bool(true) => Ok("1".to_string()),
            FieldValue::Bool(false) => Ok("0".to_string()),
            FieldValue::Integer(i) => Ok(i.to_string()),
            FieldValue::Text(s) => Ok(s.clone()),
            FieldValue::List(_) | FieldValue::Map(_) | FieldValue::Json(_) => {
                serde_json::to_string(self).map_err(|e| AppError::Serialization(e.to_string()))
            }
        }
    }

    /// Converts a top-level JSON value, `None` for `null`
    ///
    /// A top-level float has no form representation of its own and is kept
    /// as text. Arrays and objects are kept verbatim, nested nulls, floats
    /// and key order included.
    #[must_use]
    pub fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Bool(b) => Some(FieldValue::Bool(b)),
            Value::Number(n) => Some(match n.as_i64() {
                Some(i) => FieldValue::Integer(i),
                None => FieldValue::Text(n.to_string()),
            }),
            Value::String(s) => Some(FieldValue::Text(s)),
            nested @ (Value::Array(_) | Value::Object(_)) => Some(FieldValue::Json(nested)),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&String> for FieldValue {
    fn from(value: &String) -> Self {
        FieldValue::Text(value.clone())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::List(value.into_iter().map(FieldValue::Text).collect())
    }
}

impl From<&Vec<String>> for FieldValue {
    fn from(value: &Vec<String>) -> Self {
        FieldValue::List(value.iter().map(FieldValue::from).collect())
    }
}

impl From<BTreeMap<String, FieldValue>> for FieldValue {
    fn from(value: BTreeMap<String, FieldValue>) -> Self {
        FieldValue::Map(value)
    }
}

/// Ordered field name to value mapping for one operation
#[derive(Debug, Clone, Default, PartialEq, Deserialize, DisplaySimple)]
#[serde(from = "serde_json::Map<String, Value>")]
pub struct RequestOptions {
    fields: Vec<(String, FieldValue)>,
}

impl RequestOptions {
    /// Creates an empty set of options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key`, replacing an existing value in place
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    /// Sets `key` only when a value is present
    pub fn insert_opt<V: Into<FieldValue>>(&mut self, key: impl Into<String>, value: Option<V>) {
        if let Some(value) = value {
            self.insert(key, value);
        }
    }

    /// Builder form of [`RequestOptions::insert`]
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Value stored for `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Whether `key` is present
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Inserts every field of `other`, in order
    pub fn merge(&mut self, other: RequestOptions) {
        for (key, value) in other.fields {
            self.insert(key, value);
        }
    }

    /// Iterates over the fields in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether there are no fields
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// JSON object view, used for log context
    #[must_use]
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.fields
                .iter()
                .map(|(k, v)| (k.clone(), serde_json::to_value(v).unwrap_or(Value::Null)))
                .collect(),
        )
    }
}

impl Serialize for RequestOptions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl From<serde_json::Map<String, Value>> for RequestOptions {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        let mut options = RequestOptions::new();
        for (key, value) in map {
            options.insert_opt(key, FieldValue::from_json(value));
        }
        options
    }
}

impl TryFrom<Value> for RequestOptions {
    type Error = AppError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(map.into()),
            other => Err(AppError::Serialization(format!(
                "request options must be a JSON object, got {other}"
            ))),
        }
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for RequestOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = RequestOptions::new();
        for (k, v) in iter {
            options.insert(k, v);
        }
        options
    }
}

/// Flat, ordered form body sent to the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormPayload {
    pairs: Vec<(String, String)>,
}

impl FormPayload {
    /// Flattens `options` behind the `api_key` field
    pub fn build(api_key: &str, options: &RequestOptions) -> Result<Self, AppError> {
        let mut pairs = Vec::with_capacity(options.len() + 1);
        pairs.push((API_KEY_FIELD.to_string(), api_key.to_string()));
        for (key, value) in options.iter() {
            if key == API_KEY_FIELD {
                continue;
            }
            pairs.push((key.to_string(), value.to_form_value()?));
        }
        Ok(Self { pairs })
    }

    /// Pairs in wire order
    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Value sent for `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}
