//! Guard execution harness.
//!
//! Reduces one guard call to its tagged outcome. The panic boundary is the
//! load-bearing part: a guard that crashes has not rendered a verdict, and
//! callers driving a regeneration loop must see that as an infrastructure
//! fault, distinct from both "compliant" and "violated".

use crate::scenario::{Expected, Scenario};
use crate::{FixtureApi, ScriptedOracle};
use serde::{Deserialize, Serialize};
use std::panic::{AssertUnwindSafe, catch_unwind};
use tracing::{debug, warn};
use warden_core::error::Error;
use warden_core::guard::{DomainApi, Guard, GuardContext, GuardOutcome, HistoryOracle};

/// Run one guard invocation and tag its outcome.
///
/// A panic escaping the guard becomes [`Error::GuardFault`], never a
/// verdict.
pub fn run_guard(
    guard: &dyn Guard,
    history: &dyn HistoryOracle,
    api: &dyn DomainApi,
    arguments: serde_json::Value,
) -> warden_core::Result<GuardOutcome> {
    let ctx = GuardContext {
        history,
        api,
        arguments,
    };
    match catch_unwind(AssertUnwindSafe(|| guard.check(&ctx))) {
        Ok(result) => Ok(GuardOutcome::from_check(result)),
        Err(payload) => Err(Error::GuardFault(panic_detail(payload))),
    }
}

fn panic_detail(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "guard panicked".to_string()
    }
}

/// Result of running one scenario against a candidate guard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub scenario: String,

    pub expected: Expected,

    /// The guard's actual outcome; `None` when the guard faulted.
    pub actual: Option<GuardOutcome>,

    /// Infrastructure fault detail (the guard panicked). Never a verdict.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fault: Option<String>,

    /// Whether the actual outcome matched the expectation.
    pub matched: bool,
}

/// Execute one scenario: fresh mocks, one guard call, outcome comparison.
///
/// Each call constructs its own oracle and domain fixture from the
/// scenario, so no state crosses invocations.
pub fn run_scenario(guard: &dyn Guard, scenario: &Scenario) -> ScenarioOutcome {
    let oracle = ScriptedOracle::from(&scenario.oracle);
    let api = FixtureApi::from(scenario.entities.clone());

    match run_guard(guard, &oracle, &api, scenario.arguments.clone()) {
        Ok(actual) => {
            let matched = matches!(
                (scenario.expected, &actual),
                (Expected::Compliant, GuardOutcome::Compliant)
                    | (Expected::Violated, GuardOutcome::Violated { .. })
            );
            debug!(scenario = %scenario.name, matched, "Scenario executed");
            ScenarioOutcome {
                scenario: scenario.name.clone(),
                expected: scenario.expected,
                actual: Some(actual),
                fault: None,
                matched,
            }
        }
        Err(e) => {
            warn!(scenario = %scenario.name, "Guard faulted: {e}");
            ScenarioOutcome {
                scenario: scenario.name.clone(),
                expected: scenario.expected,
                actual: None,
                fault: Some(e.to_string()),
                matched: false,
            }
        }
    }
}
