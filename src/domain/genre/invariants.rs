use super::entity::Genre;
use crate::domain::{DomainError, DomainResult};

pub fn validate_genre(genre: &Genre) -> DomainResult<()> {
    if genre.id.is_blank() {
        return Err(DomainError::InvariantViolation(
            "Genre id cannot be empty".to_string(),
        ));
    }
    validate_genre_name(&genre.name)
}

pub fn validate_genre_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Genre name cannot be empty".to_string(),
        ));
    }
    Ok(())
}
