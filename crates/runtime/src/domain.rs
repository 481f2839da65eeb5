//! In-memory domain API for scenario fixtures.

use std::collections::HashMap;
use warden_core::guard::DomainApi;

/// A [`DomainApi`] backed by a fixed id→entity map.
///
/// Entities are plain JSON values: the pipeline never depends on any
/// vertical's fields, and neither does this fixture.
#[derive(Debug, Clone, Default)]
pub struct FixtureApi {
    entities: HashMap<String, serde_json::Value>,
}

impl FixtureApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one entity under an id.
    pub fn with_entity(mut self, id: impl Into<String>, entity: serde_json::Value) -> Self {
        self.entities.insert(id.into(), entity);
        self
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl From<HashMap<String, serde_json::Value>> for FixtureApi {
    fn from(entities: HashMap<String, serde_json::Value>) -> Self {
        Self { entities }
    }
}

impl DomainApi for FixtureApi {
    fn fetch(&self, entity_id: &str) -> Option<serde_json::Value> {
        self.entities.get(entity_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_hit_and_miss() {
        let api = FixtureApi::new().with_entity(
            "RES-100",
            serde_json::json!({"insurance": "no", "created_at": "2026-01-01T00:00:00Z"}),
        );
        let entity = api.fetch("RES-100").unwrap();
        assert_eq!(entity["insurance"], "no");
        assert!(api.fetch("RES-404").is_none());
    }

    #[test]
    fn empty_fixture_finds_nothing() {
        let api = FixtureApi::new();
        assert!(api.is_empty());
        assert!(api.fetch("anything").is_none());
    }
}
