//! Verification results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use warden_runtime::ScenarioOutcome;

/// The outcome of verifying one candidate guard.
///
/// Created once per verification run and returned to the caller; the
/// pipeline keeps nothing beyond it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Run id for this verification.
    pub id: Uuid,

    /// Caller-supplied candidate name.
    pub candidate: String,

    /// True iff the static check produced no blocking findings.
    pub static_pass: bool,

    /// Blocking findings rendered for regeneration feedback.
    pub blocking_messages: Vec<String>,

    /// Advisory findings: surfaced, never fatal.
    pub advisory_messages: Vec<String>,

    /// Per-scenario outcomes. Empty when `static_pass` is false — a
    /// statically-invalid candidate is never executed.
    pub scenario_results: Vec<ScenarioOutcome>,

    /// When the verdict was rendered.
    pub timestamp: DateTime<Utc>,
}

impl VerificationResult {
    /// Static pass and every scenario matched its expectation.
    pub fn passed(&self) -> bool {
        self.static_pass && self.scenario_results.iter().all(|s| s.matched)
    }

    /// Scenarios whose actual outcome diverged from the expectation
    /// (faults included).
    pub fn mismatches(&self) -> impl Iterator<Item = &ScenarioOutcome> {
        self.scenario_results.iter().filter(|s| !s.matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warden_runtime::Expected;

    fn outcome(matched: bool) -> ScenarioOutcome {
        ScenarioOutcome {
            scenario: "s".into(),
            expected: Expected::Compliant,
            actual: None,
            fault: None,
            matched,
        }
    }

    fn result(static_pass: bool, scenarios: Vec<ScenarioOutcome>) -> VerificationResult {
        VerificationResult {
            id: Uuid::new_v4(),
            candidate: "candidate".into(),
            static_pass,
            blocking_messages: vec![],
            advisory_messages: vec![],
            scenario_results: scenarios,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn passed_requires_static_and_scenarios() {
        assert!(result(true, vec![outcome(true), outcome(true)]).passed());
        assert!(!result(true, vec![outcome(true), outcome(false)]).passed());
        assert!(!result(false, vec![]).passed());
    }

    #[test]
    fn mismatches_filters() {
        let r = result(true, vec![outcome(true), outcome(false)]);
        assert_eq!(r.mismatches().count(), 1);
    }
}
