use crate::domain::{
    analysis::{entities::AnalysisResult, parser::StagedParse},
    common::entities::app_errors::CoreError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    Success,
    /// Unreadable upstream answer. A valid business outcome.
    SoftFailure,
    /// Transport error or payload broken after unwrapping.
    HardFailure,
}

impl OutcomeKind {
    pub fn is_server_error(&self) -> bool {
        matches!(self, OutcomeKind::HardFailure)
    }
}

impl std::fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            OutcomeKind::Success => "success",
            OutcomeKind::SoftFailure => "soft_failure",
            OutcomeKind::HardFailure => "hard_failure",
        };
        f.write_str(kind)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOutcome {
    pub kind: OutcomeKind,
    pub result: AnalysisResult,
}

impl AnalysisOutcome {
    pub fn success(result: AnalysisResult) -> Self {
        Self {
            kind: OutcomeKind::Success,
            result,
        }
    }

    pub fn unreadable(sanitized: impl Into<String>) -> Self {
        Self {
            kind: OutcomeKind::SoftFailure,
            result: AnalysisResult::unreadable(sanitized),
        }
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self {
            kind: OutcomeKind::HardFailure,
            result: AnalysisResult::internal_error(message),
        }
    }
}

impl From<CoreError> for AnalysisOutcome {
    fn from(error: CoreError) -> Self {
        let message = match &error {
            CoreError::ExternalServiceError(message)
            | CoreError::MalformedPayload(message)
            | CoreError::Invalid(message) => message.clone(),
            CoreError::InternalServerError => error.to_string(),
        };
        AnalysisOutcome::internal_error(message)
    }
}

/// Turns any parse outcome into the record returned to the caller.
pub fn normalize(parse: Result<StagedParse, CoreError>) -> AnalysisOutcome {
    match parse {
        Ok(StagedParse::Parsed(mut result)) => {
            result.raw_debug = None;
            AnalysisOutcome::success(result)
        }
        Ok(StagedParse::Unreadable { sanitized }) => AnalysisOutcome::unreadable(sanitized),
        Err(e) => AnalysisOutcome::from(e),
    }
}
