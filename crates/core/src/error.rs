//! Error types for the warden domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant.
//!
//! One deliberate absence: a guard raising a policy violation is *not* an
//! error of the pipeline. [`PolicyViolation`](crate::guard::PolicyViolation)
//! is the guard's normal "non-compliant" outcome and lives with the guard
//! contract, never in this taxonomy.

use thiserror::Error;

/// The top-level error type for all warden operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Static-checker pipeline errors ---
    #[error("Check error: {0}")]
    Check(#[from] CheckError),

    // --- Guard execution faults ---
    /// A panic escaped a guard. This is an infrastructure fault, never a
    /// policy verdict; callers must not conflate it with a violation.
    #[error("Guard fault: {0}")]
    GuardFault(String),

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // --- I/O ---
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // --- Generic ---
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

/// Infrastructure faults from the static-checker pipeline.
///
/// A report full of diagnostics is a *successful* check run, whatever the
/// checker's exit code was; these variants cover the runs that never
/// produced a usable report at all.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The checker's output did not parse as a diagnostics report.
    #[error("malformed checker report: {reason}")]
    MalformedReport { reason: String },

    /// A diagnostic's range does not fit the source it points into.
    ///
    /// Raised instead of silently truncating, since a mismatched range
    /// means the report and the source are out of sync and any excerpt
    /// would be confidently wrong.
    #[error("range out of bounds at {line}:{character}: {detail}")]
    RangeOutOfBounds {
        line: u32,
        character: u32,
        detail: String,
    },

    /// The checker binary or its runtime could not be started.
    #[error("checker unavailable: {0}")]
    ToolUnavailable(String),

    /// The checker exceeded its time budget and was killed.
    #[error("checker timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
