use serde::{Deserialize, Serialize};

use crate::domain::EntityId;

/// A movie as stored by the catalog backend.
///
/// References are id-based: exactly one director, and possibly empty cast and
/// genre sets. Field names on the wire follow the backend (`image_url`,
/// `user_rating`, `directed_by`, `genre`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: EntityId,

    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Poster image location
    #[serde(rename = "image_url", default)]
    pub poster_url: Option<String>,

    #[serde(default)]
    pub release_year: Option<i32>,

    /// Audience rating, 0 to 100; the backend may send integers or decimals
    #[serde(rename = "user_rating", default)]
    pub audience_rating: Option<f64>,

    pub directed_by: EntityId,

    #[serde(default)]
    pub cast: Vec<EntityId>,

    #[serde(rename = "genre", default)]
    pub genres: Vec<EntityId>,
}

impl Movie {
    /// Whether the given crew member directed or appears in this movie
    pub fn involves(&self, crew_id: &EntityId) -> bool {
        &self.directed_by == crew_id || self.cast.contains(crew_id)
    }
}

/// Id-based creation request for a movie.
///
/// This is what ingestion produces once every name reference has been
/// resolved. The backend assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMovie {
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,

    #[serde(rename = "image_url", skip_serializing_if = "Option::is_none", default)]
    pub poster_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub release_year: Option<i32>,

    #[serde(rename = "user_rating", skip_serializing_if = "Option::is_none", default)]
    pub audience_rating: Option<f64>,

    pub directed_by: EntityId,

    pub cast: Vec<EntityId>,

    #[serde(rename = "genre")]
    pub genres: Vec<EntityId>,
}

impl NewMovie {
    pub fn new(title: impl Into<String>, directed_by: EntityId) -> Self {
        Self {
            title: title.into(),
            description: None,
            poster_url: None,
            release_year: None,
            audience_rating: None,
            directed_by,
            cast: Vec::new(),
            genres: Vec::new(),
        }
    }

    /// Turn the backend's answer into a full Movie, keeping our field values
    pub fn into_movie(self, id: EntityId) -> Movie {
        Movie {
            id,
            title: self.title,
            description: self.description,
            poster_url: self.poster_url,
            release_year: self.release_year,
            audience_rating: self.audience_rating,
            directed_by: self.directed_by,
            cast: self.cast,
            genres: self.genres,
        }
    }
}

/// Remove repeated ids while keeping first-seen order
pub fn dedup_ids(ids: Vec<EntityId>) -> Vec<EntityId> {
    let mut seen = std::collections::HashSet::with_capacity(ids.len());
    ids.into_iter().filter(|id| seen.insert(id.clone())).collect()
}
