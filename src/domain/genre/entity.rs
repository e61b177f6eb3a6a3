use serde::{Deserialize, Serialize};

use crate::domain::EntityId;

/// A genre tag a movie can carry (Thriller, Crime, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: EntityId,

    /// Natural key used for matching
    pub name: String,
}

impl Genre {
    pub fn new(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
