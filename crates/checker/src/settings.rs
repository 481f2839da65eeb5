//! Checker configuration emitter.
//!
//! Writes the rule-severity override map into the checker's configuration
//! file before each run. The default policy: member/attribute access on a
//! symbol the runtime contract does not expose is always blocking (it means
//! the candidate references a field that is not actually there), while most
//! "may be missing a value" categories are advisory — they point at
//! defensive-coding opportunities, not contract breaks.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use warden_core::error::CheckError;

/// File name the checker looks for in its working directory.
pub const CONFIG_FILE: &str = "pyrightconfig.json";

/// Target severity for one rule category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSeverity {
    Error,
    Warning,
    Information,
    /// Suppress the rule entirely.
    None,
}

impl RuleSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleSeverity::Error => "error",
            RuleSeverity::Warning => "warning",
            RuleSeverity::Information => "information",
            RuleSeverity::None => "none",
        }
    }
}

/// Rule-severity overrides emitted into the checker config before a run.
///
/// Kept ordered so the emitted config is byte-stable across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckerSettings {
    rules: BTreeMap<String, RuleSeverity>,
}

impl Default for CheckerSettings {
    fn default() -> Self {
        let mut rules = BTreeMap::new();

        // Upgraded to blocking: access to attributes/members the declared
        // type does not have. These mean the candidate guard is written
        // against a contract that does not exist.
        rules.insert("reportAttributeAccessIssue".into(), RuleSeverity::Error);
        rules.insert("reportUndefinedVariable".into(), RuleSeverity::Error);

        // Downgraded to advisory: possibly-absent values. Worth surfacing,
        // not worth rejecting a candidate over.
        rules.insert("reportOptionalMemberAccess".into(), RuleSeverity::Information);
        rules.insert("reportOptionalSubscript".into(), RuleSeverity::Information);
        rules.insert("reportOptionalCall".into(), RuleSeverity::Information);
        rules.insert("reportPossiblyUnbound".into(), RuleSeverity::Information);

        Self { rules }
    }
}

impl CheckerSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an empty override map (checker defaults apply).
    pub fn empty() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// Override one rule's target severity.
    pub fn with_rule(mut self, rule: impl Into<String>, severity: RuleSeverity) -> Self {
        self.rules.insert(rule.into(), severity);
        self
    }

    pub fn rules(&self) -> &BTreeMap<String, RuleSeverity> {
        &self.rules
    }

    /// Render the checker configuration document.
    pub fn to_config_json(&self) -> serde_json::Value {
        let mut doc = serde_json::Map::new();
        doc.insert("typeCheckingMode".into(), "standard".into());
        for (rule, severity) in &self.rules {
            doc.insert(rule.clone(), severity.as_str().into());
        }
        serde_json::Value::Object(doc)
    }

    /// Write the configuration file into `dir` (the working directory the
    /// checker will be invoked from). Returns the path written.
    pub async fn write_config(&self, dir: &Path) -> std::result::Result<PathBuf, CheckError> {
        let path = dir.join(CONFIG_FILE);
        let body = serde_json::to_string_pretty(&self.to_config_json())
            .map_err(|e| CheckError::MalformedReport {
                reason: format!("could not render checker config: {e}"),
            })?;
        tokio::fs::write(&path, body).await?;
        Ok(path)
    }
}
