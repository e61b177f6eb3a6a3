// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod crew;
pub mod genre;
pub mod ids;
pub mod movie;
pub mod preset;
pub mod query;
pub mod resolution;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use ids::EntityId;

// Crew Domain
pub use crew::{validate_crew_member, validate_crew_name, CrewMember};

// Genre Domain
pub use genre::{validate_genre, validate_genre_name, Genre};

// Movie Domain
pub use movie::{
    dedup_ids, is_valid_rating, validate_new_movie, Movie, NewMovie, MAX_AUDIENCE_RATING,
};

// Preset Domain (ingestion input)
pub use preset::{validate_preset_record, PresetRecord};

// Query Domain (read path)
pub use query::{FilterSpec, MovieQuery, TranslatedQuery};

// Resolution
pub use resolution::{ReferenceKind, ResolutionOutcome, ResolvedReference};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Empty {kind} name")]
    EmptyName { kind: ReferenceKind },
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
