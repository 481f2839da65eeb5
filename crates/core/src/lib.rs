//! # Warden Core
//!
//! Domain types, traits, and error definitions for the warden policy-guard
//! verification pipeline. This crate has **zero framework dependencies** — it
//! defines the domain model that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! The capabilities a guard runs against ([`HistoryOracle`], [`DomainApi`])
//! and the contract it fulfills ([`Guard`]) are defined as traits here.
//! Implementations live in their respective crates. This enables:
//! - Scenario testing with in-memory stub implementations
//! - Verifying against several checker runtimes in one process
//! - Clean dependency graph (all crates depend inward on core)

pub mod diagnostics;
pub mod error;
pub mod guard;

// Re-export key types at crate root for ergonomics
pub use diagnostics::{Diagnostic, DiagnosticsReport, Position, Range, Severity, Summary};
pub use error::{CheckError, Error, Result};
pub use guard::{
    DomainApi, Guard, GuardContext, GuardOutcome, HistoryOracle, PolicyViolation,
};
