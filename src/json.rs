//! JSON helpers for request and response bodies.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::HttpClientResult;

/// Serializes a value to a JSON string.
pub fn to_json<T: Serialize>(value: &T) -> HttpClientResult<String> {
    Ok(serde_json::to_string(value)?)
}

/// Deserializes a value from JSON bytes.
pub fn from_json<T: DeserializeOwned>(data: &[u8]) -> HttpClientResult<T> {
    Ok(serde_json::from_slice(data)?)
}
