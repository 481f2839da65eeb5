//! Guard runtime — the scenario convention guards are validated against.
//!
//! Every guard test is a fixed (mocked oracle, mocked domain state,
//! expected outcome) triple. This crate supplies the in-memory stand-ins
//! for the two capabilities ([`ScriptedOracle`], [`FixtureApi`]), the
//! TOML-loadable scenario model, and the harness that reduces one guard
//! call to its tagged [`GuardOutcome`](warden_core::GuardOutcome) — with a
//! panic boundary so a crashing guard surfaces as an infrastructure fault,
//! never as a verdict.
//!
//! # Example suite
//!
//! ```toml
//! [[scenarios]]
//! name = "late-cancellation-without-insurance"
//! expected = "violated"
//!
//! [scenarios.oracle]
//! default = false
//!
//! [scenarios.entities.RES-100]
//! created_at = "2026-01-01T00:00:00Z"
//! insurance = "no"
//!
//! [scenarios.arguments]
//! reservation_id = "RES-100"
//! requested_at = "2026-01-03T00:00:00Z"
//! ```
//!
//! Timestamps in fixtures are RFC 3339 strings; guards parse them from the
//! entity rather than reading any clock, so every replay is identical.

mod domain;
mod harness;
mod oracle;
mod scenario;

pub use domain::FixtureApi;
pub use harness::{ScenarioOutcome, run_guard, run_scenario};
pub use oracle::ScriptedOracle;
pub use scenario::{Expected, OracleScript, Scenario, ScenarioSuite};

/// Errors from the scenario subsystem.
#[derive(Debug, thiserror::Error)]
pub enum SuiteError {
    #[error("invalid scenario '{name}': {reason}")]
    InvalidScenario { name: String, reason: String },

    #[error("scenario file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}
