//! Scenario fixtures — (mocked oracle, mocked domain state, expected
//! outcome) triples, loadable from TOML.

use crate::SuiteError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The outcome a scenario expects from the guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Expected {
    Compliant,
    Violated,
}

/// Oracle script for one scenario.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OracleScript {
    /// Answer for every unscripted question.
    #[serde(default)]
    pub default: bool,

    #[serde(default)]
    pub answers: HashMap<String, bool>,
}

/// One guard test scenario.
///
/// Each scenario owns its complete fixture state: nothing is shared across
/// scenarios, so any subset may run in any order (or concurrently) with
/// identical results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Unique name within its suite.
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub expected: Expected,

    #[serde(default)]
    pub oracle: OracleScript,

    /// Domain entities keyed by id. Timestamp fields are RFC 3339 strings.
    #[serde(default)]
    pub entities: HashMap<String, serde_json::Value>,

    /// Tool arguments handed to the guard.
    #[serde(default = "empty_arguments")]
    pub arguments: serde_json::Value,
}

fn empty_arguments() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

impl Scenario {
    pub fn new(name: impl Into<String>, expected: Expected) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            expected,
            oracle: OracleScript::default(),
            entities: HashMap::new(),
            arguments: empty_arguments(),
        }
    }

    /// Script one oracle answer.
    pub fn with_answer(mut self, question: impl Into<String>, answer: bool) -> Self {
        self.oracle.answers.insert(question.into(), answer);
        self
    }

    /// Add one domain entity.
    pub fn with_entity(mut self, id: impl Into<String>, entity: serde_json::Value) -> Self {
        self.entities.insert(id.into(), entity);
        self
    }

    /// Set the tool arguments for the invocation.
    pub fn with_arguments(mut self, arguments: serde_json::Value) -> Self {
        self.arguments = arguments;
        self
    }

    /// Validate that the scenario is well-formed.
    pub fn validate(&self) -> std::result::Result<(), SuiteError> {
        if self.name.is_empty() {
            return Err(SuiteError::InvalidScenario {
                name: "(empty)".into(),
                reason: "scenario name cannot be empty".into(),
            });
        }
        if !self.arguments.is_object() {
            return Err(SuiteError::InvalidScenario {
                name: self.name.clone(),
                reason: "arguments must be a table".into(),
            });
        }
        Ok(())
    }
}

/// A set of scenarios validating one guard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSuite {
    #[serde(default)]
    pub scenarios: Vec<Scenario>,
}

impl ScenarioSuite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a suite from a TOML string.
    pub fn from_toml(toml_str: &str) -> std::result::Result<Self, SuiteError> {
        let suite: ScenarioSuite = toml::from_str(toml_str)?;
        suite.validate()?;
        Ok(suite)
    }

    /// Add a scenario to the suite.
    pub fn add(&mut self, scenario: Scenario) {
        self.scenarios.push(scenario);
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Validate all scenarios and reject duplicate names.
    pub fn validate(&self) -> std::result::Result<(), SuiteError> {
        let mut names = std::collections::HashSet::new();
        for scenario in &self.scenarios {
            scenario.validate()?;
            if !names.insert(scenario.name.as_str()) {
                return Err(SuiteError::InvalidScenario {
                    name: scenario.name.clone(),
                    reason: "duplicate scenario name".into(),
                });
            }
        }
        Ok(())
    }
}
