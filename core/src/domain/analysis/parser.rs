use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use crate::domain::{
    analysis::{
        entities::AnalysisResult,
        envelope::UpstreamPayload,
        sanitizer::sanitize_response,
    },
    common::entities::app_errors::CoreError,
};

/// Outcome of decoding an upstream answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StagedParse {
    Parsed(AnalysisResult),
    /// The sanitized answer was not a JSON object. Not an error.
    Unreadable { sanitized: String },
}

/// Decodes a sanitized answer in up to two passes.
///
/// A first-pass failure is reported as [`StagedParse::Unreadable`]. A
/// failure after unwrapping an agent envelope is a [`CoreError::MalformedPayload`].
pub fn parse_staged(sanitized: &str) -> Result<StagedParse, CoreError> {
    let envelope = match decode_object::<UpstreamPayload>(sanitized) {
        Ok(UpstreamPayload::Direct(result)) => return Ok(StagedParse::Parsed(result)),
        Ok(UpstreamPayload::Envelope(envelope)) => envelope,
        Err(e) => {
            debug!("Upstream answer is not a JSON object: {}", e);
            return Ok(StagedParse::Unreadable {
                sanitized: sanitized.to_string(),
            });
        }
    };

    let payload = envelope.unwrap_payload(sanitized);
    debug!(unwrapped = payload != sanitized, "Decoding agent envelope payload");

    decode_object::<AnalysisResult>(payload)
        .map(StagedParse::Parsed)
        .map_err(|e| {
            tracing::error!("Failed to parse unwrapped payload: {}", e);
            CoreError::MalformedPayload(e.to_string())
        })
}

/// Decodes `text` into `T` only when it holds a top-level JSON object.
fn decode_object<T: DeserializeOwned>(text: &str) -> Result<T, serde_json::Error> {
    let object: Map<String, Value> = serde_json::from_str(text)?;
    serde_json::from_value(Value::Object(object))
}

/// Sanitizes then decodes a raw upstream answer.
pub fn interpret_response(raw: &str) -> Result<StagedParse, CoreError> {
    parse_staged(&sanitize_response(raw))
}
