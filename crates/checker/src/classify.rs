//! Blocking/advisory partition of checker findings.

use warden_core::diagnostics::{Diagnostic, Severity};

/// Checker findings split by whether they fail verification outright.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classified {
    /// Error-severity findings: these fail verification.
    pub blocking: Vec<Diagnostic>,

    /// Warnings and information: surfaced, never fatal.
    pub advisory: Vec<Diagnostic>,
}

/// Partition diagnostics into blocking vs. advisory.
///
/// A diagnostic is blocking iff its severity is `error`. Which rule
/// categories are *allowed* to produce an error is decided ahead of the run
/// by [`CheckerSettings`](crate::settings::CheckerSettings); keeping this
/// partition trivial keeps severity policy out of the parsing path.
pub fn classify(diagnostics: &[Diagnostic]) -> Classified {
    let mut out = Classified::default();
    for diag in diagnostics {
        match diag.severity {
            Severity::Error => out.blocking.push(diag.clone()),
            Severity::Warning | Severity::Information => out.advisory.push(diag.clone()),
        }
    }
    out
}
