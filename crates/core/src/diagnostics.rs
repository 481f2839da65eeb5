//! Diagnostics model — the structured output of one static-checker run.
//!
//! These types mirror the checker's JSON report schema field for field, so a
//! parsed report can be re-serialized without loss. A report is created once
//! per checker invocation, validated, consumed for messages and a verdict,
//! and then discarded; nothing here mutates after parse.

use crate::error::CheckError;
use serde::{Deserialize, Serialize};

/// A zero-based cursor in a text file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Zero-based line index.
    pub line: u32,

    /// Zero-based character offset relative to the start of `line`.
    pub character: u32,
}

/// A half-open span of text between two positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    /// Whether this range starts and ends on the same line.
    pub fn is_single_line(&self) -> bool {
        self.start.line == self.end.line
    }

    /// Whether `end` comes before `start`.
    pub fn is_backwards(&self) -> bool {
        self.end.line < self.start.line
            || (self.end.line == self.start.line && self.end.character < self.start.character)
    }
}

/// Severity of one checker finding.
///
/// The set is closed: a report carrying any other value fails to
/// deserialize, which surfaces checker version drift immediately instead of
/// misclassifying findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Information,
}

/// One finding from the static checker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Path of the file the finding points into.
    pub file: String,

    pub severity: Severity,

    /// The checker's human-readable description of the finding.
    pub message: String,

    /// Exact source span the finding refers to.
    pub range: Range,

    /// Named rule that produced the finding; absent for built-in checks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
}

/// Aggregate statistics for one checker run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub files_analyzed: u32,
    pub error_count: u32,
    pub warning_count: u32,
    pub information_count: u32,
    pub time_in_sec: f64,
}

/// The full parsed output of one checker run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticsReport {
    pub version: String,
    pub time: String,

    /// Findings in the order the checker reported them.
    pub general_diagnostics: Vec<Diagnostic>,

    pub summary: Summary,
}

impl DiagnosticsReport {
    /// Parse a report from the checker's JSON output and validate it.
    pub fn from_json(raw: &str) -> std::result::Result<Self, CheckError> {
        let report: DiagnosticsReport =
            serde_json::from_str(raw).map_err(|e| CheckError::MalformedReport {
                reason: e.to_string(),
            })?;
        report.validate()?;
        Ok(report)
    }

    /// Check the invariants serde cannot express: no diagnostic may carry a
    /// range whose end precedes its start.
    pub fn validate(&self) -> std::result::Result<(), CheckError> {
        for diag in &self.general_diagnostics {
            if diag.range.is_backwards() {
                let (s, e) = (diag.range.start, diag.range.end);
                return Err(CheckError::MalformedReport {
                    reason: format!(
                        "diagnostic in {} has a backwards range ({}:{} to {}:{})",
                        diag.file, s.line, s.character, e.line, e.character
                    ),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "version": "1.1.400",
        "time": "1754000000000",
        "generalDiagnostics": [
            {
                "file": "/work/guard_candidate.py",
                "severity": "error",
                "message": "Cannot access attribute \"travel_insurance\" for class \"Reservation\"",
                "range": {
                    "start": { "line": 2, "character": 7 },
                    "end": { "line": 2, "character": 35 }
                },
                "rule": "reportAttributeAccessIssue"
            },
            {
                "file": "/work/guard_candidate.py",
                "severity": "information",
                "message": "\"created_at\" is possibly unbound",
                "range": {
                    "start": { "line": 5, "character": 4 },
                    "end": { "line": 5, "character": 14 }
                }
            }
        ],
        "summary": {
            "filesAnalyzed": 1,
            "errorCount": 1,
            "warningCount": 0,
            "informationCount": 1,
            "timeInSec": 0.41
        }
    }"#;

    #[test]
    fn parse_preserves_order_and_fields() {
        let report = DiagnosticsReport::from_json(FIXTURE).unwrap();
        assert_eq!(report.version, "1.1.400");
        assert_eq!(report.general_diagnostics.len(), 2);
        assert_eq!(report.general_diagnostics[0].severity, Severity::Error);
        assert_eq!(
            report.general_diagnostics[0].rule.as_deref(),
            Some("reportAttributeAccessIssue")
        );
        assert!(report.general_diagnostics[1].rule.is_none());
        assert_eq!(report.summary.files_analyzed, 1);
        assert_eq!(report.summary.error_count, 1);
    }

    #[test]
    fn parse_then_reserialize_round_trips() {
        let report = DiagnosticsReport::from_json(FIXTURE).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        let again = DiagnosticsReport::from_json(&json).unwrap();
        assert_eq!(report, again);
    }

    #[test]
    fn unknown_severity_rejects() {
        let raw = FIXTURE.replace("\"information\"", "\"fatal\"");
        let err = DiagnosticsReport::from_json(&raw).unwrap_err();
        assert!(matches!(err, CheckError::MalformedReport { .. }));
    }

    #[test]
    fn missing_summary_rejects() {
        let raw = FIXTURE.replace("\"summary\"", "\"stats\"");
        let err = DiagnosticsReport::from_json(&raw).unwrap_err();
        assert!(matches!(err, CheckError::MalformedReport { .. }));
    }

    #[test]
    fn backwards_range_rejects() {
        let raw = FIXTURE.replace(
            "\"start\": { \"line\": 2, \"character\": 7 }",
            "\"start\": { \"line\": 2, \"character\": 40 }",
        );
        let err = DiagnosticsReport::from_json(&raw).unwrap_err();
        assert!(matches!(err, CheckError::MalformedReport { .. }));
        assert!(err.to_string().contains("backwards"));
    }

    #[test]
    fn single_line_detection() {
        let range = Range {
            start: Position { line: 3, character: 0 },
            end: Position { line: 3, character: 9 },
        };
        assert!(range.is_single_line());
        let multi = Range {
            start: Position { line: 3, character: 0 },
            end: Position { line: 5, character: 2 },
        };
        assert!(!multi.is_single_line());
    }
}
