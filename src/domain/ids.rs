// src/domain/ids.rs
//
// Backend-assigned identifiers.
//
// The catalog backend owns identity. Ids are opaque strings (the backend
// happens to use document ids) and are never generated on this side.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier assigned by the catalog backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Join ids the way the backend expects them in list filters (`a,b,c`)
    pub fn join(ids: &[EntityId]) -> String {
        ids.iter()
            .map(EntityId::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<String> for EntityId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_uses_commas_without_spaces() {
        let ids = vec![EntityId::from("3"), EntityId::from("7")];
        assert_eq!(EntityId::join(&ids), "3,7");
        assert_eq!(EntityId::join(&[]), "");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = EntityId::from("65a1f0c2");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"65a1f0c2\"");

        let parsed: EntityId = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(parsed.as_str(), "abc");
    }
}
