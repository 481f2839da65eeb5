//! Guard runtime contract — the interfaces every guard program is written
//! against.
//!
//! A guard inspects one pending tool invocation and renders exactly one of
//! two verdicts: return `Ok(())` to allow it, or `Err(PolicyViolation)` to
//! block it. There is no third outcome and no retry state inside a single
//! invocation. A panic escaping a guard is an infrastructure fault, never a
//! verdict; the execution harness catches it and reports it separately.
//!
//! Determinism: for a fixed oracle/domain snapshot a guard must be a pure
//! function of its inputs. Guards never read the ambient clock — any
//! time-relative policy ("within 24 hours of booking") computes elapsed time
//! from timestamps obtained through the [`DomainApi`] or the call arguments,
//! so scenarios replay identically.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The signal a guard raises on non-compliance.
///
/// Raising this is the *only* way a guard communicates "this call is
/// disallowed"; returning normally means "compliant".
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("policy violation: {message}")]
pub struct PolicyViolation {
    /// Human-readable reason the invocation is disallowed.
    pub message: String,
}

impl PolicyViolation {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Answers contextual yes/no questions about the conversation that led to
/// the tool call.
///
/// "Does the context establish fact X?" — e.g. "did the user explicitly
/// request cancellation less than 24 hours after booking?".
pub trait HistoryOracle: Send + Sync {
    fn ask_bool(&self, question: &str) -> bool;
}

/// Read-only handle onto one business vertical's entities.
///
/// The only shape the pipeline relies on: an identifier goes in, an entity
/// or a not-found signal comes out. Guards must never assume mutation
/// methods exist — relative to a guard, every vertical is query-only.
pub trait DomainApi: Send + Sync {
    /// Fetch an entity by id, or `None` if the vertical has no such entity.
    fn fetch(&self, entity_id: &str) -> Option<serde_json::Value>;
}

/// What a guard receives at call time.
///
/// Constructed once per scenario (or once per real tool call) and scoped to
/// that single invocation; it owns no long-lived state.
pub struct GuardContext<'a> {
    pub history: &'a dyn HistoryOracle,
    pub api: &'a dyn DomainApi,

    /// Call-specific tool arguments, opaque to the pipeline.
    pub arguments: serde_json::Value,
}

/// A policy guard: arbitrary read-only logic over the oracle and domain API
/// ending in one of two verdicts.
pub trait Guard: Send + Sync {
    fn check(&self, ctx: &GuardContext<'_>) -> std::result::Result<(), PolicyViolation>;
}

/// The two terminal outcomes of one guard invocation.
///
/// The tagged-result rendition of the raise-to-signal idiom: the harness
/// maps a guard's `Ok`/`Err` return onto this tag so callers match on data
/// instead of unwinding machinery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum GuardOutcome {
    Compliant,
    Violated { message: String },
}

impl GuardOutcome {
    /// Tag a guard's return value.
    pub fn from_check(result: std::result::Result<(), PolicyViolation>) -> Self {
        match result {
            Ok(()) => GuardOutcome::Compliant,
            Err(violation) => GuardOutcome::Violated {
                message: violation.message,
            },
        }
    }

    pub fn is_compliant(&self) -> bool {
        matches!(self, GuardOutcome::Compliant)
    }
}
