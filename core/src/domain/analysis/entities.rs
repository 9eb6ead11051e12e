use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const NO_RESULT_VERDICT: &str = "no-result";
pub const NO_VERDICT: &str = "no-verdict";
pub const UNREADABLE_REASON: &str = "AI sent unreadable output";
pub const INTERNAL_ERROR_REASON: &str = "AI output broken or network issue";
pub const INTERNAL_ERROR_NOTE: &str = "⚠️ Internal error, please try again.";
pub const NO_INFO: &str = "❔ No info";

/// Ingredient safety verdict as returned to the caller.
///
/// Every field is optional: a successful upstream answer is passed through
/// as decoded, so callers must not assume any field is populated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisResult {
    #[serde(
        default,
        deserialize_with = "lenient::verdict",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>, example = "🔴 AVOID")]
    pub verdict: Option<Verdict>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub quick_reason: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::text_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub why_it_matters: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "lenient::careful",
        skip_serializing_if = "Option::is_none"
    )]
    pub who_should_be_careful: Option<WhoShouldBeCareful>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub risk_meter: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::text_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub better_swaps: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub honesty_note: Option<String>,
    /// Diagnostics for the fallback records only. Never decoded from upstream.
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub raw_debug: Option<String>,
}

/// Field decoders that never reject a value: scalars become text, anything
/// else of the wrong shape is treated as absent.
mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use super::{Verdict, WhoShouldBeCareful};

    fn scalar_text(value: Value) -> Option<String> {
        match value {
            Value::String(text) => Some(text),
            Value::Number(number) => Some(number.to_string()),
            Value::Bool(flag) => Some(flag.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(scalar_text)
    }

    pub fn verdict<'de, D>(deserializer: D) -> Result<Option<Verdict>, D::Error>
    where
        D: Deserializer<'de>,
    {
        text(deserializer).map(|label| label.map(Verdict::from))
    }

    /// A lone scalar is read as a one-item list.
    pub fn text_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Array(items) => Some(items.into_iter().filter_map(scalar_text).collect()),
            other => scalar_text(other).map(|item| vec![item]),
        })
    }

    pub fn careful<'de, D>(deserializer: D) -> Result<Option<WhoShouldBeCareful>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Value::Object(mut groups) = Value::deserialize(deserializer)? else {
            return Ok(None);
        };
        let mut take = |group: &str| groups.remove(group).and_then(scalar_text);

        Ok(Some(WhoShouldBeCareful {
            kids: take("kids"),
            diabetics: take("diabetics"),
            fitness: take("fitness"),
            elderly: take("elderly"),
        }))
    }
}

impl AnalysisResult {
    /// Record for an upstream answer that could not be decoded at all.
    pub fn unreadable(sanitized: impl Into<String>) -> Self {
        Self {
            verdict: Some(Verdict::from(NO_RESULT_VERDICT)),
            quick_reason: Some(UNREADABLE_REASON.to_string()),
            raw_debug: Some(sanitized.into()),
            ..Default::default()
        }
    }

    /// Record for a transport error or a payload broken after unwrapping.
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self {
            verdict: Some(Verdict::from(NO_VERDICT)),
            quick_reason: Some(INTERNAL_ERROR_REASON.to_string()),
            who_should_be_careful: Some(WhoShouldBeCareful::no_info()),
            honesty_note: Some(INTERNAL_ERROR_NOTE.to_string()),
            raw_debug: Some(message.into()),
            ..Default::default()
        }
    }

    pub fn verdict_level(&self) -> VerdictLevel {
        self.verdict
            .as_ref()
            .map(Verdict::level)
            .unwrap_or(VerdictLevel::Unknown)
    }
}

/// Free-text verdict label, e.g. `🟢 SAFE` or `🟡 OK SOMETIMES`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Verdict(String);

impl Verdict {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Best-effort classification of the label. Only used for logging, the
    /// label itself is returned untouched.
    pub fn level(&self) -> VerdictLevel {
        let label = self.0.to_uppercase();

        if label.contains("NO-RESULT") || label.contains("NO RESULT") {
            VerdictLevel::NoResult
        } else if label.contains("NO-VERDICT") || label.contains("NO VERDICT") {
            VerdictLevel::NoVerdict
        } else if label.contains("AVOID") {
            VerdictLevel::Avoid
        } else if label.contains("OK SOMETIMES") || label.contains("CAUTION") {
            VerdictLevel::Caution
        } else if label.contains("SAFE") {
            VerdictLevel::Safe
        } else {
            VerdictLevel::Unknown
        }
    }
}

impl From<&str> for Verdict {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Verdict {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictLevel {
    Safe,
    Caution,
    Avoid,
    NoVerdict,
    NoResult,
    Unknown,
}

impl std::fmt::Display for VerdictLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = match self {
            VerdictLevel::Safe => "safe",
            VerdictLevel::Caution => "caution",
            VerdictLevel::Avoid => "avoid",
            VerdictLevel::NoVerdict => "no-verdict",
            VerdictLevel::NoResult => "no-result",
            VerdictLevel::Unknown => "unknown",
        };
        f.write_str(level)
    }
}

/// Per-group advice. A missing key means "no information", not "safe".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WhoShouldBeCareful {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kids: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diabetics: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fitness: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elderly: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarefulGroup {
    Kids,
    Diabetics,
    Fitness,
    Elderly,
}

impl CarefulGroup {
    pub const ALL: [CarefulGroup; 4] = [
        CarefulGroup::Kids,
        CarefulGroup::Diabetics,
        CarefulGroup::Fitness,
        CarefulGroup::Elderly,
    ];
}

impl WhoShouldBeCareful {
    pub fn no_info() -> Self {
        Self {
            kids: Some(NO_INFO.to_string()),
            diabetics: Some(NO_INFO.to_string()),
            fitness: Some(NO_INFO.to_string()),
            elderly: Some(NO_INFO.to_string()),
        }
    }

    pub fn get(&self, group: CarefulGroup) -> Option<&str> {
        match group {
            CarefulGroup::Kids => self.kids.as_deref(),
            CarefulGroup::Diabetics => self.diabetics.as_deref(),
            CarefulGroup::Fitness => self.fitness.as_deref(),
            CarefulGroup::Elderly => self.elderly.as_deref(),
        }
    }

    /// Advice for `group`, falling back to the "no info" placeholder.
    pub fn advisory(&self, group: CarefulGroup) -> &str {
        self.get(group).unwrap_or(NO_INFO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_level_from_labels() {
        assert_eq!(Verdict::from("🟢 SAFE").level(), VerdictLevel::Safe);
        assert_eq!(
            Verdict::from("🟡 OK SOMETIMES").level(),
            VerdictLevel::Caution
        );
        assert_eq!(Verdict::from("caution").level(), VerdictLevel::Caution);
        assert_eq!(Verdict::from("🔴 AVOID").level(), VerdictLevel::Avoid);
        assert_eq!(Verdict::from(NO_RESULT_VERDICT).level(), VerdictLevel::NoResult);
        assert_eq!(Verdict::from(NO_VERDICT).level(), VerdictLevel::NoVerdict);
        assert_eq!(Verdict::from("maybe?").level(), VerdictLevel::Unknown);
    }

    #[test]
    fn test_unsafe_is_not_classified_as_safe() {
        assert_eq!(Verdict::from("AVOID, not safe").level(), VerdictLevel::Avoid);
    }

    #[test]
    fn test_advisory_defaults_to_no_info() {
        let careful = WhoShouldBeCareful {
            kids: Some("Limit intake".to_string()),
            ..Default::default()
        };

        assert_eq!(careful.advisory(CarefulGroup::Kids), "Limit intake");
        assert_eq!(careful.advisory(CarefulGroup::Elderly), NO_INFO);
        assert_eq!(careful.get(CarefulGroup::Elderly), None);
    }

    #[test]
    fn test_internal_error_sets_every_group() {
        let result = AnalysisResult::internal_error("boom");
        assert_eq!(result.verdict_level(), VerdictLevel::NoVerdict);
        assert_eq!(result.raw_debug.as_deref(), Some("boom"));

        let careful = result.who_should_be_careful.as_ref().expect("groups are set");
        for group in CarefulGroup::ALL {
            assert_eq!(careful.get(group), Some(NO_INFO));
        }
    }

    #[test]
    fn test_scalar_fields_are_read_as_text() {
        let result: AnalysisResult = serde_json::from_str(
            r#"{"verdict":"🔴 AVOID","risk_meter":3,"quick_reason":true,"honesty_note":null}"#,
        )
        .unwrap();

        assert_eq!(result.verdict, Some(Verdict::from("🔴 AVOID")));
        assert_eq!(result.risk_meter.as_deref(), Some("3"));
        assert_eq!(result.quick_reason.as_deref(), Some("true"));
        assert_eq!(result.honesty_note, None);
    }

    #[test]
    fn test_numeric_verdict_is_kept() {
        let result: AnalysisResult = serde_json::from_str(r#"{"verdict":7}"#).unwrap();
        assert_eq!(result.verdict, Some(Verdict::from("7")));
    }

    #[test]
    fn test_single_string_becomes_a_list() {
        let result: AnalysisResult = serde_json::from_str(
            r#"{"why_it_matters":"Contains sucralose","better_swaps":["Water",2,{"x":1},null]}"#,
        )
        .unwrap();

        assert_eq!(
            result.why_it_matters,
            Some(vec!["Contains sucralose".to_string()])
        );
        assert_eq!(
            result.better_swaps,
            Some(vec!["Water".to_string(), "2".to_string()])
        );
    }

    #[test]
    fn test_malformed_groups_are_absent() {
        let result: AnalysisResult = serde_json::from_str(
            r#"{"verdict":"🟢 SAFE","who_should_be_careful":"everyone"}"#,
        )
        .unwrap();
        assert_eq!(result.who_should_be_careful, None);

        let result: AnalysisResult = serde_json::from_str(
            r#"{"who_should_be_careful":{"kids":["a"],"elderly":"Go easy","pets":"No"}}"#,
        )
        .unwrap();
        assert_eq!(
            result.who_should_be_careful,
            Some(WhoShouldBeCareful {
                elderly: Some("Go easy".to_string()),
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_raw_debug_is_not_decoded() {
        let result: AnalysisResult =
            serde_json::from_str(r#"{"verdict":"🟢 SAFE","raw_debug":"leak"}"#).unwrap();

        assert_eq!(result.raw_debug, None);
        assert_eq!(result.verdict, Some(Verdict::from("🟢 SAFE")));
    }

    #[test]
    fn test_absent_fields_are_not_serialized() {
        let result = AnalysisResult::unreadable("not json at all");
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "verdict": "no-result",
                "quick_reason": "AI sent unreadable output",
                "raw_debug": "not json at all"
            })
        );
    }
}
