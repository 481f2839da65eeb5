//! Verification orchestrator — the single entry point that takes a candidate
//! guard and produces a verdict.
//!
//! ```text
//! ┌───────────────┐    ┌───────────────┐    ┌────────────────┐
//! │   candidate    │───▶│  CheckRunner  │───▶│   classify +   │
//! │ (own workdir)  │    │  (subprocess) │    │  to_messages   │
//! └───────────────┘    └───────────────┘    └────────────────┘
//!                                                  │
//!                                   static_pass?   │
//!                              ┌────────no─────────┤
//!                              ▼                   ▼ yes
//!                      scenarios skipped     run_scenario × N
//! ```
//!
//! Verification runs are independent: each candidate gets its own working
//! directory and its own checker invocation, so a batch fans out over a
//! bounded worker pool with no shared mutable state. A statically-invalid
//! candidate is never executed — guard code runs against live business
//! systems in production, so nothing unverified is ever dynamically
//! invoked here either.

mod report;

pub use report::VerificationResult;
pub use warden_runtime::{Expected, Scenario, ScenarioOutcome, ScenarioSuite};

use std::path::Path;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{info, warn};
use uuid::Uuid;
use warden_checker::{CheckRunner, CheckerSettings, advisory_messages, classify, to_messages};
use warden_core::guard::Guard;
use warden_core::{Error, Result};
use warden_runtime::run_scenario;

/// File name the candidate source is written under in its working
/// directory.
pub const CANDIDATE_FILE: &str = "guard_candidate.py";

/// A candidate guard awaiting verification.
///
/// Pairs the source text the static checker sees with the callable the
/// scenario harness executes. In the production authoring flow the two are
/// the same artifact; keeping them paired is the caller's job, same as
/// producing them.
#[derive(Clone)]
pub struct GuardCandidate {
    /// Name used in logs and results.
    pub name: String,

    /// Candidate source text handed to the static checker.
    pub source: String,

    /// The guard the scenario harness calls once the static check passes.
    pub guard: Arc<dyn Guard>,
}

impl GuardCandidate {
    pub fn new(name: impl Into<String>, source: impl Into<String>, guard: Arc<dyn Guard>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            guard,
        }
    }
}

/// Orchestrates the full verification of candidate guards.
#[derive(Clone)]
pub struct Verifier {
    runner: CheckRunner,
    settings: CheckerSettings,
    max_concurrency: usize,
}

impl Verifier {
    pub fn new(runner: CheckRunner) -> Self {
        Self {
            runner,
            settings: CheckerSettings::default(),
            max_concurrency: 4,
        }
    }

    /// Override the rule-severity settings.
    pub fn with_settings(mut self, settings: CheckerSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Bound the batch worker pool.
    pub fn with_max_concurrency(mut self, max: usize) -> Self {
        self.max_concurrency = max.max(1);
        self
    }

    /// Verify one candidate against a scenario suite.
    ///
    /// Sequence: own working directory, emit config, invoke and parse the
    /// checker, classify and extract messages, and — only on a clean static
    /// pass — execute every scenario. Infrastructure faults (unparseable
    /// report, missing checker, timeout) abort this candidate's
    /// verification with an error; blocking findings and scenario
    /// mismatches are *results*, not errors.
    pub async fn verify(
        &self,
        candidate: &GuardCandidate,
        suite: &ScenarioSuite,
    ) -> Result<VerificationResult> {
        let workdir = tempfile::tempdir()?;
        let target = workdir.path().join(CANDIDATE_FILE);
        tokio::fs::write(&target, &candidate.source).await?;
        self.settings.write_config(workdir.path()).await?;

        let report = self.runner.run(workdir.path(), &target).await?;
        let classified = classify(&report.general_diagnostics);
        let blocking_messages = to_messages(&report, &candidate.source)?;
        let advisory = advisory_messages(&report, &candidate.source)?;
        let static_pass = classified.blocking.is_empty();

        let scenario_results = if static_pass {
            info!(
                candidate = %candidate.name,
                scenarios = suite.len(),
                "Static check passed, executing scenarios"
            );
            suite
                .scenarios
                .iter()
                .map(|scenario| run_scenario(candidate.guard.as_ref(), scenario))
                .collect()
        } else {
            warn!(
                candidate = %candidate.name,
                blocking = blocking_messages.len(),
                "Static check failed, scenarios skipped"
            );
            Vec::new()
        };

        Ok(VerificationResult {
            id: Uuid::new_v4(),
            candidate: candidate.name.clone(),
            static_pass,
            blocking_messages,
            advisory_messages: advisory,
            scenario_results,
            timestamp: chrono::Utc::now(),
        })
    }

    /// Run only the static half of the pipeline against an existing source
    /// file (no scenario execution). Used by callers that have source but
    /// no executable guard, e.g. the CLI.
    pub async fn check_source(&self, source_path: &Path) -> Result<VerificationResult> {
        // The checker resolves relative targets against its own working
        // directory, which is ours, not the caller's.
        let source_path = tokio::fs::canonicalize(source_path).await?;
        let source = tokio::fs::read_to_string(&source_path).await?;
        let workdir = tempfile::tempdir()?;
        self.settings.write_config(workdir.path()).await?;

        let report = self.runner.run(workdir.path(), &source_path).await?;
        let classified = classify(&report.general_diagnostics);
        let blocking_messages = to_messages(&report, &source)?;
        let advisory = advisory_messages(&report, &source)?;

        Ok(VerificationResult {
            id: Uuid::new_v4(),
            candidate: source_path.display().to_string(),
            static_pass: classified.blocking.is_empty(),
            blocking_messages,
            advisory_messages: advisory,
            scenario_results: Vec::new(),
            timestamp: chrono::Utc::now(),
        })
    }

    /// Verify many candidates with a bounded worker pool.
    ///
    /// Results come back in input order, one per candidate. A timed-out or
    /// otherwise faulted checker run is that candidate's failed
    /// verification; it never aborts the rest of the batch.
    pub async fn verify_batch(
        &self,
        candidates: Vec<GuardCandidate>,
        suite: &ScenarioSuite,
    ) -> Vec<Result<VerificationResult>> {
        let permits = Arc::new(Semaphore::new(self.max_concurrency));
        let mut tasks = JoinSet::new();

        let total = candidates.len();
        for (index, candidate) in candidates.into_iter().enumerate() {
            let verifier = self.clone();
            let suite = suite.clone();
            let permits = Arc::clone(&permits);
            tasks.spawn(async move {
                let _permit = permits.acquire_owned().await.expect("semaphore closed");
                (index, verifier.verify(&candidate, &suite).await)
            });
        }

        let mut results: Vec<Option<Result<VerificationResult>>> =
            (0..total).map(|_| None).collect();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, result)) => results[index] = Some(result),
                Err(e) => warn!("Verification task aborted: {e}"),
            }
        }

        results
            .into_iter()
            .map(|slot| {
                slot.unwrap_or_else(|| Err(Error::Internal("verification task aborted".into())))
            })
            .collect()
    }
}
