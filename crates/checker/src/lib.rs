//! Static-checker pipeline for candidate guard sources.
//!
//! Drives the external static type-checker against one candidate source file
//! and turns its structured report into actionable messages:
//!
//! ```text
//! CheckerSettings ──▶ write_config ──┐
//!                                    ▼
//! candidate source ──▶ CheckRunner ──▶ DiagnosticsReport
//!                                          │ classify
//!                               ┌──────────┴──────────┐
//!                           blocking              advisory
//!                               │ to_messages
//!                               ▼
//!                    "Syntax/type error: ..."
//! ```
//!
//! The settings decide *ahead of the run* which rule categories may produce
//! a blocking (error-severity) finding; the classifier itself stays a
//! trivial partition on severity.

pub mod classify;
pub mod invoke;
pub mod messages;
pub mod resolve;
pub mod settings;

pub use classify::{Classified, classify};
pub use invoke::CheckRunner;
pub use messages::{advisory_messages, to_messages};
pub use resolve::resolve_text;
pub use settings::{CheckerSettings, RuleSeverity};
