use serde::{Deserialize, Serialize};

/// A movie described by names instead of ids.
///
/// Preset records only exist to drive ingestion: director, cast and genres
/// are free-text names that the resolver turns into backend ids. JSON keys
/// match the preset files (`overview`, `poster`, `rating`, `year`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetRecord {
    pub title: String,

    #[serde(default)]
    pub overview: Option<String>,

    /// Director name
    pub director: String,

    #[serde(default)]
    pub poster: Option<String>,

    /// Audience rating, 0 to 100
    #[serde(default)]
    pub rating: Option<f64>,

    #[serde(default)]
    pub year: Option<i32>,

    /// Cast member names, in listed order
    #[serde(default)]
    pub cast: Vec<String>,

    /// Genre names, in listed order
    #[serde(default)]
    pub genres: Vec<String>,
}

impl PresetRecord {
    pub fn new(title: impl Into<String>, director: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            overview: None,
            director: director.into(),
            poster: None,
            rating: None,
            year: None,
            cast: Vec::new(),
            genres: Vec::new(),
        }
    }

    pub fn with_cast<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cast = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_genres<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = names.into_iter().map(Into::into).collect();
        self
    }

    /// Number of name references this record will resolve
    pub fn reference_count(&self) -> usize {
        self.genres.len() + self.cast.len() + 1
    }
}
