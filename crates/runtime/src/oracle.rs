//! Scripted history oracle for scenario fixtures.

use crate::scenario::OracleScript;
use std::collections::HashMap;
use warden_core::guard::HistoryOracle;

/// A [`HistoryOracle`] that answers from a fixed question→answer map.
///
/// Questions outside the map get the default answer, so a scenario only
/// scripts the facts it actually cares about.
#[derive(Debug, Clone, Default)]
pub struct ScriptedOracle {
    answers: HashMap<String, bool>,
    default_answer: bool,
}

impl ScriptedOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the answer for every unscripted question.
    pub fn with_default(mut self, answer: bool) -> Self {
        self.default_answer = answer;
        self
    }

    /// Script one question.
    pub fn with_answer(mut self, question: impl Into<String>, answer: bool) -> Self {
        self.answers.insert(question.into(), answer);
        self
    }
}

impl From<&OracleScript> for ScriptedOracle {
    fn from(script: &OracleScript) -> Self {
        Self {
            answers: script.answers.clone(),
            default_answer: script.default,
        }
    }
}

impl HistoryOracle for ScriptedOracle {
    fn ask_bool(&self, question: &str) -> bool {
        self.answers
            .get(question)
            .copied()
            .unwrap_or(self.default_answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_answer_wins_over_default() {
        let oracle = ScriptedOracle::new()
            .with_default(true)
            .with_answer("was this cancellation agent-approved", false);
        assert!(!oracle.ask_bool("was this cancellation agent-approved"));
        assert!(oracle.ask_bool("anything else"));
    }

    #[test]
    fn default_answer_is_false() {
        let oracle = ScriptedOracle::new();
        assert!(!oracle.ask_bool("unscripted question"));
    }
}
