// src/domain/query/value_objects.rs
//
// Read-path value objects.
//
// A FilterSpec is what a person types (names, a title fragment, a year).
// A MovieQuery is what the backend understands (id lists). Translation
// between the two lives in MovieQueryService.

use serde::{Deserialize, Serialize};

use crate::domain::EntityId;

// ============================================================================
// FILTER SPEC (NAME-BASED)
// ============================================================================

/// Name-based movie filter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Title substring
    pub title: Option<String>,

    /// Director name (exact)
    pub director: Option<String>,

    /// Cast member name (exact)
    pub cast: Option<String>,

    /// Genre name (exact)
    pub genre: Option<String>,

    pub year: Option<i32>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_director(mut self, name: impl Into<String>) -> Self {
        self.director = Some(name.into());
        self
    }

    pub fn with_cast(mut self, name: impl Into<String>) -> Self {
        self.cast = Some(name.into());
        self
    }

    pub fn with_genre(mut self, name: impl Into<String>) -> Self {
        self.genre = Some(name.into());
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn title_fragment(&self) -> Option<&str> {
        present(&self.title)
    }

    pub fn director_name(&self) -> Option<&str> {
        present(&self.director)
    }

    pub fn cast_name(&self) -> Option<&str> {
        present(&self.cast)
    }

    pub fn genre_name(&self) -> Option<&str> {
        present(&self.genre)
    }

    /// True when no field constrains the result
    pub fn is_unconstrained(&self) -> bool {
        self.title_fragment().is_none()
            && self.director_name().is_none()
            && self.cast_name().is_none()
            && self.genre_name().is_none()
            && self.year.is_none()
    }
}

/// Blank strings count as "not provided"; non-blank values are kept verbatim
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

// ============================================================================
// MOVIE QUERY (ID-BASED)
// ============================================================================

/// Id-based query understood by the movie collection.
///
/// `None` means the field is not constrained and is left out of the request.
/// An id list is never empty: an empty list would read as "no filter" on the
/// backend, which is why translation short-circuits instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieQuery {
    pub title: Option<String>,
    pub directed_by_ids: Option<Vec<EntityId>>,
    pub cast_ids: Option<Vec<EntityId>>,
    pub genre_ids: Option<Vec<EntityId>>,
    pub release_year: Option<i32>,
}

impl MovieQuery {
    /// Query matching every movie
    pub fn all() -> Self {
        Self::default()
    }

    /// Movies directed by one person
    pub fn directed_by(id: EntityId) -> Self {
        Self {
            directed_by_ids: Some(vec![id]),
            ..Self::default()
        }
    }

    /// Movies featuring one person in the cast
    pub fn starring(id: EntityId) -> Self {
        Self {
            cast_ids: Some(vec![id]),
            ..Self::default()
        }
    }

    /// Query-string pairs, omitting every absent field
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(title) = &self.title {
            pairs.push(("title", title.clone()));
        }
        if let Some(ids) = self.directed_by_ids.as_deref().filter(|ids| !ids.is_empty()) {
            pairs.push(("directed_by_ids", EntityId::join(ids)));
        }
        if let Some(ids) = self.cast_ids.as_deref().filter(|ids| !ids.is_empty()) {
            pairs.push(("cast_ids", EntityId::join(ids)));
        }
        if let Some(ids) = self.genre_ids.as_deref().filter(|ids| !ids.is_empty()) {
            pairs.push(("genre_ids", EntityId::join(ids)));
        }
        if let Some(year) = self.release_year {
            pairs.push(("release_year", year.to_string()));
        }

        pairs
    }
}

// ============================================================================
// TRANSLATION OUTCOME
// ============================================================================

/// Result of translating a FilterSpec
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TranslatedQuery {
    /// Send this query to the movie collection
    Query(MovieQuery),

    /// A name filter matched nothing; no movie can satisfy the filter
    EmptyResult,
}

impl TranslatedQuery {
    pub fn is_empty_result(&self) -> bool {
        matches!(self, TranslatedQuery::EmptyResult)
    }

    pub fn query(&self) -> Option<&MovieQuery> {
        match self {
            TranslatedQuery::Query(q) => Some(q),
            TranslatedQuery::EmptyResult => None,
        }
    }
}
