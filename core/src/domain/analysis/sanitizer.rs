use std::sync::LazyLock;

use regex::Regex;

static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```json|```").expect("code fence pattern is valid"));

/// Strips every markdown code fence marker (tagged `json` or untagged) and
/// trims the surrounding whitespace.
pub fn sanitize_response(raw: &str) -> String {
    CODE_FENCE.replace_all(raw, "").trim().to_string()
}
