//! Defensive extraction from decoded response bodies.

use serde_json::Value;

use ghpin_core::error::TransportError;
use ghpin_core::{Repo, Result};

/// Deserialize one repository node.
///
/// All repository fields are optional, so this only fails when the source
/// returns a type-mismatched value for a known field.
pub(crate) fn decode_repo(node: &Value) -> Result<Repo> {
    serde_json::from_value(node.clone()).map_err(|e| {
        TransportError::Decode {
            message: format!("repository node: {e}"),
        }
        .into()
    })
}

/// A string field with an empty-string default.
pub(crate) fn string_or_empty(value: &Value) -> String {
    value.as_str().unwrap_or("").to_string()
}
