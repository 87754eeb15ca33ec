//! Submission form state machine. One explicit phase per instant — the
//! loading flag doubles as the mutual-exclusion guard for the single
//! in-flight request.

use crate::types::SubmissionResponse;

/// Fallback message when the service gives us nothing usable.
pub const GENERIC_FAILURE: &str = "Unsuccessful, try again later";

/// Phase of the submission form: `Idle → Loading → {Success, Error}`,
/// `Error → Idle` via retry, anything → `Idle` via reset (modal close).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Loading,
    Success,
    Error(String),
}

impl FormPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, FormPhase::Loading)
    }

    /// Enter `Loading`. Only reachable from `Idle`; returns whether the
    /// transition happened, so callers cannot start a second request.
    pub fn begin_submit(&mut self) -> bool {
        if *self == FormPhase::Idle {
            *self = FormPhase::Loading;
            true
        } else {
            false
        }
    }

    /// Resolve the in-flight request. A `result` of `"success"` lands on
    /// `Success`; anything else (including transport errors) lands on
    /// `Error` with a user-facing message.
    pub fn resolve(&mut self, outcome: Result<SubmissionResponse, String>) {
        if *self != FormPhase::Loading {
            return;
        }
        *self = match outcome {
            Ok(response) if response.result == "success" => FormPhase::Success,
            Ok(response) => FormPhase::Error(failure_message(&response)),
            Err(err) if err.trim().is_empty() => FormPhase::Error(GENERIC_FAILURE.to_string()),
            Err(err) => FormPhase::Error(err),
        };
    }

    /// Explicit retry from the error screen.
    pub fn retry(&mut self) {
        if matches!(self, FormPhase::Error(_)) {
            *self = FormPhase::Idle;
        }
    }

    /// Modal close: back to the initial state from anywhere.
    pub fn reset(&mut self) {
        *self = FormPhase::Idle;
    }
}

fn failure_message(response: &SubmissionResponse) -> String {
    if let Some(message) = response.message.as_ref().filter(|m| !m.trim().is_empty()) {
        return message.clone();
    }
    if response.result.trim().is_empty() {
        GENERIC_FAILURE.to_string()
    } else {
        response.result.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(result: &str, message: Option<&str>) -> SubmissionResponse {
        SubmissionResponse {
            result: result.to_string(),
            message: message.map(str::to_string),
        }
    }

    #[test]
    fn submit_only_reachable_from_idle() {
        let mut phase = FormPhase::Idle;
        assert!(phase.begin_submit());
        assert_eq!(phase, FormPhase::Loading);
        // already loading: second submit is refused
        assert!(!phase.begin_submit());
        assert_eq!(phase, FormPhase::Loading);

        let mut phase = FormPhase::Error("boom".to_string());
        assert!(!phase.begin_submit());
    }

    #[test]
    fn success_result_lands_on_success() {
        let mut phase = FormPhase::Loading;
        phase.resolve(Ok(response("success", None)));
        assert_eq!(phase, FormPhase::Success);
    }

    #[test]
    fn non_success_result_lands_on_error_with_message() {
        let mut phase = FormPhase::Loading;
        phase.resolve(Ok(response("failed", None)));
        assert_eq!(phase, FormPhase::Error("failed".to_string()));

        let mut phase = FormPhase::Loading;
        phase.resolve(Ok(response("failed", Some("quota exceeded"))));
        assert_eq!(phase, FormPhase::Error("quota exceeded".to_string()));
    }

    #[test]
    fn blank_failure_uses_generic_message() {
        let mut phase = FormPhase::Loading;
        phase.resolve(Ok(response("", None)));
        assert_eq!(phase, FormPhase::Error(GENERIC_FAILURE.to_string()));

        let mut phase = FormPhase::Loading;
        phase.resolve(Err(String::new()));
        assert_eq!(phase, FormPhase::Error(GENERIC_FAILURE.to_string()));
    }

    #[test]
    fn transport_error_lands_on_error() {
        let mut phase = FormPhase::Loading;
        phase.resolve(Err("connection refused".to_string()));
        assert_eq!(phase, FormPhase::Error("connection refused".to_string()));
    }

    #[test]
    fn resolve_outside_loading_is_a_no_op() {
        let mut phase = FormPhase::Idle;
        phase.resolve(Ok(response("success", None)));
        assert_eq!(phase, FormPhase::Idle);
    }

    #[test]
    fn retry_and_reset_transitions() {
        let mut phase = FormPhase::Error("boom".to_string());
        phase.retry();
        assert_eq!(phase, FormPhase::Idle);

        // retry from success does nothing; reset always returns to idle
        let mut phase = FormPhase::Success;
        phase.retry();
        assert_eq!(phase, FormPhase::Success);
        phase.reset();
        assert_eq!(phase, FormPhase::Idle);
    }
}
