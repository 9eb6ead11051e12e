use serde::Deserialize;
use serde::de::IgnoredAny;

use crate::domain::analysis::entities::AnalysisResult;

/// First-pass decode target for a sanitized upstream answer.
///
/// The agent envelope is tried before the direct record, so an object with
/// an array-valued `output` key is always classified as an envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum UpstreamPayload {
    Envelope(RawUpstreamEnvelope),
    Direct(AnalysisResult),
}

/// Agent/tool-call wrapper: `{"output":[{"content":[{"text":"..."}]}]}`.
#[derive(Debug, Deserialize)]
pub struct RawUpstreamEnvelope {
    pub output: Vec<Entry<OutputEntry>>,
}

/// Array element that either has the expected shape or is ignored.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Entry<T> {
    Known(T),
    Unknown(IgnoredAny),
}

impl<T> Entry<T> {
    fn known(&self) -> Option<&T> {
        match self {
            Entry::Known(value) => Some(value),
            Entry::Unknown(_) => None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct OutputEntry {
    #[serde(default)]
    pub content: Vec<Entry<ContentEntry>>,
}

#[derive(Debug, Deserialize)]
pub struct ContentEntry {
    #[serde(default)]
    pub text: Option<String>,
}

impl RawUpstreamEnvelope {
    /// Text of the first content entry of the first output entry, or an
    /// empty string when any link of that chain is missing.
    pub fn inner_text(&self) -> &str {
        self.output
            .first()
            .and_then(Entry::known)
            .and_then(|output| output.content.first())
            .and_then(Entry::known)
            .and_then(|content| content.text.as_deref())
            .unwrap_or_default()
    }

    /// Text to decode on the second pass. The inner text replaces the
    /// sanitized answer only when it looks like a JSON object.
    pub fn unwrap_payload<'a>(&'a self, sanitized: &'a str) -> &'a str {
        let inner = self.inner_text();
        if inner.starts_with('{') { inner } else { sanitized }
    }
}
