//! Entry points between body records and the JSON wire tree.
//!
//! Every record in this crate also implements `serde::Serialize` directly, so
//! an HTTP client can hand it to its JSON body builder without going through
//! these helpers. They exist for callers that want the tree itself, and to
//! give decode failures a typed error.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::DecodeError;

/// Encode a body record into a wire tree.
///
/// Never fails for the records defined in this crate; the `Result` is
/// serde_json's, for arbitrary `Serialize` inputs.
pub fn encode<T: Serialize + ?Sized>(body: &T) -> serde_json::Result<Value> {
    serde_json::to_value(body)
}

/// Encode a body record straight to compact JSON text.
pub fn encode_to_string<T: Serialize + ?Sized>(body: &T) -> serde_json::Result<String> {
    serde_json::to_string(body)
}

/// Decode a wire tree into a record.
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T, DecodeError> {
    serde_json::from_value(value).map_err(|source| {
        let record = record_name::<T>();
        debug!(record, error = %source, "Failed to decode wire body");
        DecodeError::Shape {
            target: record,
            source,
        }
    })
}

/// Parse JSON text and decode it into a record.
pub fn decode_str<T: DeserializeOwned>(text: &str) -> Result<T, DecodeError> {
    let value: Value = serde_json::from_str(text).map_err(DecodeError::Syntax)?;
    decode(value)
}

/// Last path segment of the type name, e.g. `SyncId`
fn record_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
