//! Human-actionable messages from checker findings.
//!
//! Turns a partition of diagnostics into "what's wrong and where" strings,
//! each carrying the exact source excerpt its range points at. Overlapping
//! rule passes sometimes flag the same span twice with re-phrased wording;
//! identical rendered messages are reported once, first occurrence kept.

use crate::classify::classify;
use crate::resolve::resolve_text;
use std::collections::HashSet;
use warden_core::diagnostics::{Diagnostic, DiagnosticsReport};
use warden_core::error::CheckError;

/// Render the blocking findings of a report for regeneration feedback.
///
/// Output order is stable for a stable input set; callers needing a total
/// order should sort.
pub fn to_messages(
    report: &DiagnosticsReport,
    content: &str,
) -> std::result::Result<Vec<String>, CheckError> {
    let classified = classify(&report.general_diagnostics);
    render(&classified.blocking, content, "Syntax/type error")
}

/// Render the advisory findings of a report (surfaced, never fatal).
pub fn advisory_messages(
    report: &DiagnosticsReport,
    content: &str,
) -> std::result::Result<Vec<String>, CheckError> {
    let classified = classify(&report.general_diagnostics);
    render(&classified.advisory, content, "Advisory")
}

fn render(
    diagnostics: &[Diagnostic],
    content: &str,
    prefix: &str,
) -> std::result::Result<Vec<String>, CheckError> {
    let mut seen = HashSet::new();
    let mut messages = Vec::new();
    for diag in diagnostics {
        let excerpt = resolve_text(content, &diag.range)?;
        let message = format!("{prefix}: `{}`. code block: '{excerpt}'", diag.message);
        if seen.insert(message.clone()) {
            messages.push(message);
        }
    }
    Ok(messages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use warden_core::diagnostics::{Position, Range, Severity, Summary};

    const SOURCE: &str = "def guard(history, api, booking_id):\n    booking = api.fetch(booking_id)\n    if booking.travel_insurance == \"no\":\n        raise PolicyViolation(\"late cancellation\")\n";

    fn report_with(diagnostics: Vec<Diagnostic>) -> DiagnosticsReport {
        let errors = diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count() as u32;
        DiagnosticsReport {
            version: "1.1.400".into(),
            time: "0".into(),
            summary: Summary {
                files_analyzed: 1,
                error_count: errors,
                warning_count: 0,
                information_count: diagnostics.len() as u32 - errors,
                time_in_sec: 0.1,
            },
            general_diagnostics: diagnostics,
        }
    }

    fn diag(severity: Severity, message: &str, range: Range) -> Diagnostic {
        Diagnostic {
            file: "guard_candidate.py".into(),
            severity,
            message: message.into(),
            range,
            rule: None,
        }
    }

    fn span(line: u32, from: u32, to: u32) -> Range {
        Range {
            start: Position { line, character: from },
            end: Position { line, character: to },
        }
    }

    #[test]
    fn message_carries_excerpt() {
        let report = report_with(vec![diag(
            Severity::Error,
            "Cannot access attribute \"travel_insurance\"",
            span(2, 7, 31),
        )]);
        let messages = to_messages(&report, SOURCE).unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(
            messages[0],
            "Syntax/type error: `Cannot access attribute \"travel_insurance\"`. code block: 'booking.travel_insurance'"
        );
    }

    #[test]
    fn identical_renderings_deduplicate() {
        let d = diag(Severity::Error, "duplicate finding", span(0, 0, 3));
        let report = report_with(vec![d.clone(), d]);
        let messages = to_messages(&report, SOURCE).unwrap();
        assert_eq!(messages.len(), 1);
    }

    #[test]
    fn advisory_findings_do_not_leak_into_blocking() {
        let report = report_with(vec![
            diag(Severity::Error, "hard failure", span(0, 0, 3)),
            diag(Severity::Information, "possibly unbound", span(1, 4, 11)),
        ]);
        let blocking = to_messages(&report, SOURCE).unwrap();
        let advisory = advisory_messages(&report, SOURCE).unwrap();
        assert_eq!(blocking.len(), 1);
        assert!(blocking[0].contains("hard failure"));
        assert_eq!(advisory.len(), 1);
        assert!(advisory[0].contains("possibly unbound"));
        assert!(advisory[0].starts_with("Advisory:"));
    }

    #[test]
    fn out_of_sync_range_is_an_error_not_a_truncation() {
        let report = report_with(vec![diag(
            Severity::Error,
            "phantom finding",
            span(40, 0, 4),
        )]);
        let err = to_messages(&report, SOURCE).unwrap_err();
        assert!(matches!(err, CheckError::RangeOutOfBounds { .. }));
    }
}
