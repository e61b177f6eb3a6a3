use super::entity::PresetRecord;
use crate::domain::{is_valid_rating, DomainError, DomainResult, MAX_AUDIENCE_RATING};

/// Validates a preset record before any of its names are resolved.
///
/// Blank names would otherwise reach the resolver, which treats them as a
/// caller error.
pub fn validate_preset_record(record: &PresetRecord) -> DomainResult<()> {
    if record.title.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Preset title cannot be empty".to_string(),
        ));
    }

    if record.director.trim().is_empty() {
        return Err(DomainError::InvariantViolation(format!(
            "Preset '{}' has no director",
            record.title
        )));
    }

    if let Some(position) = record.cast.iter().position(|n| n.trim().is_empty()) {
        return Err(DomainError::InvariantViolation(format!(
            "Preset '{}' has an empty cast name at position {}",
            record.title, position
        )));
    }

    if let Some(position) = record.genres.iter().position(|n| n.trim().is_empty()) {
        return Err(DomainError::InvariantViolation(format!(
            "Preset '{}' has an empty genre name at position {}",
            record.title, position
        )));
    }

    if let Some(rating) = record.rating {
        if !is_valid_rating(rating) {
            return Err(DomainError::InvariantViolation(format!(
                "Preset '{}' rating {} is outside 0..={}",
                record.title, rating, MAX_AUDIENCE_RATING
            )));
        }
    }

    Ok(())
}
