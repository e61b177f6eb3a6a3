use std::collections::HashSet;

use super::entity::NewMovie;
use crate::domain::{DomainError, DomainResult, EntityId};

/// Highest accepted audience rating
pub const MAX_AUDIENCE_RATING: f64 = 100.0;

/// Validates a movie creation request before it is sent to the backend
pub fn validate_new_movie(movie: &NewMovie) -> DomainResult<()> {
    validate_title(&movie.title)?;
    validate_director(&movie.directed_by)?;
    validate_unique_ids("cast", &movie.cast)?;
    validate_unique_ids("genre", &movie.genres)?;
    validate_rating(movie.audience_rating)?;
    Ok(())
}

fn validate_title(title: &str) -> DomainResult<()> {
    if title.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Movie title cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// A movie always has exactly one director
fn validate_director(director: &EntityId) -> DomainResult<()> {
    if director.is_blank() {
        return Err(DomainError::InvariantViolation(
            "Movie must reference exactly one director".to_string(),
        ));
    }
    Ok(())
}

fn validate_unique_ids(field: &str, ids: &[EntityId]) -> DomainResult<()> {
    let mut seen = HashSet::with_capacity(ids.len());
    for id in ids {
        if id.is_blank() {
            return Err(DomainError::InvariantViolation(format!(
                "Movie {} list contains an empty id",
                field
            )));
        }
        if !seen.insert(id) {
            return Err(DomainError::InvariantViolation(format!(
                "Movie {} list contains duplicate id {}",
                field, id
            )));
        }
    }
    Ok(())
}

/// Whether a rating lies within 0..=100 (NaN never does)
pub fn is_valid_rating(rating: f64) -> bool {
    (0.0..=MAX_AUDIENCE_RATING).contains(&rating)
}

fn validate_rating(rating: Option<f64>) -> DomainResult<()> {
    match rating {
        Some(value) if !is_valid_rating(value) => Err(DomainError::InvariantViolation(
            format!("Audience rating {} is outside 0..={}", value, MAX_AUDIENCE_RATING),
        )),
        _ => Ok(()),
    }
}

/// Invariants that must hold true for Movie domain:
///
/// 1. Title cannot be empty
/// 2. Exactly one director id
/// 3. Cast and genre sets may be empty but never hold duplicates
/// 4. Rating, when present, lies within 0..=100
/// 5. Movies are never updated, only created (or cleared with the catalog)

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewMovie {
        let mut movie = NewMovie::new("The Matrix", EntityId::from("lana"));
        movie.cast = vec![EntityId::from("keanu"), EntityId::from("carrie")];
        movie.genres = vec![EntityId::from("action")];
        movie.audience_rating = Some(82.0);
        movie
    }

    #[test]
    fn test_valid_movie() {
        assert!(validate_new_movie(&sample()).is_ok());
    }

    #[test]
    fn test_empty_cast_and_genres_are_allowed() {
        let movie = NewMovie::new("Short Film", EntityId::from("d"));
        assert!(validate_new_movie(&movie).is_ok());
    }

    #[test]
    fn test_missing_director_fails() {
        let mut movie = sample();
        movie.directed_by = EntityId::from(" ");
        assert!(validate_new_movie(&movie).is_err());
    }

    #[test]
    fn test_duplicate_cast_fails() {
        let mut movie = sample();
        movie.cast.push(EntityId::from("keanu"));
        assert!(validate_new_movie(&movie).is_err());
    }

    #[test]
    fn test_duplicate_genre_fails() {
        let mut movie = sample();
        movie.genres.push(EntityId::from("action"));
        assert!(validate_new_movie(&movie).is_err());
    }

    #[test]
    fn test_rating_above_hundred_fails() {
        let mut movie = sample();
        movie.audience_rating = Some(100.5);
        assert!(validate_new_movie(&movie).is_err());

        movie.audience_rating = Some(100.0);
        assert!(validate_new_movie(&movie).is_ok());

        movie.audience_rating = Some(64.5);
        assert!(validate_new_movie(&movie).is_ok());
    }

    #[test]
    fn test_negative_or_nan_rating_fails() {
        let mut movie = sample();
        movie.audience_rating = Some(-1.0);
        assert!(validate_new_movie(&movie).is_err());

        movie.audience_rating = Some(f64::NAN);
        assert!(validate_new_movie(&movie).is_err());
    }

    #[test]
    fn test_blank_title_fails() {
        let mut movie = sample();
        movie.title = "  ".to_string();
        assert!(validate_new_movie(&movie).is_err());
    }
}
