//! GNews response decoding.

use newsgate_core::NewsEnvelope;
use serde_json::Value;

use super::GNewsError;

/// Decode a success body into the news envelope.
pub fn parse_envelope(bytes: &[u8]) -> Result<NewsEnvelope, GNewsError> {
    serde_json::from_slice(bytes).map_err(|e| GNewsError::Parse(e.to_string()))
}

/// Pull a human-readable message out of an error body.
///
/// GNews reports failures as `{"errors": [...]}` or `{"errors": {"field": "..."}}`.
/// Returns `None` for anything else.
pub fn error_message(bytes: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(bytes).ok()?;
    let messages: Vec<&str> = match value.get("errors")? {
        Value::Array(items) => items.iter().filter_map(Value::as_str).collect(),
        Value::Object(fields) => fields.values().filter_map(Value::as_str).collect(),
        Value::String(message) => vec![message.as_str()],
        _ => Vec::new(),
    };

    if messages.is_empty() { None } else { Some(messages.join("; ")) }
}
