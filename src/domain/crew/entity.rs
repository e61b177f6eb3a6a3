use serde::{Deserialize, Serialize};

use crate::domain::EntityId;

/// A person involved with one or more movies.
///
/// "Director" and "cast member" are roles a movie assigns, not attributes of
/// the person: the same CrewMember can direct one movie and act in another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewMember {
    /// Backend-assigned identifier
    pub id: EntityId,

    /// Display name, also the natural key used for matching
    pub name: String,
}

impl CrewMember {
    pub fn new(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
