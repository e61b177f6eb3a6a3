use super::entity::CrewMember;
use crate::domain::{DomainError, DomainResult};

/// Validates all CrewMember invariants
pub fn validate_crew_member(member: &CrewMember) -> DomainResult<()> {
    if member.id.is_blank() {
        return Err(DomainError::InvariantViolation(
            "Crew member id cannot be empty".to_string(),
        ));
    }
    validate_crew_name(&member.name)
}

/// Crew names are natural keys and cannot be blank
pub fn validate_crew_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Crew member name cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Invariants that must hold true for CrewMember domain:
///
/// 1. Identity is assigned by the backend and never changes
/// 2. Name cannot be empty
/// 3. Name matching is exact and case-sensitive
/// 4. No role is stored on the member itself
