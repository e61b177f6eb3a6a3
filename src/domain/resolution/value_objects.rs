// src/domain/resolution/value_objects.rs
//
// Resolution Value Objects
//
// Pure data describing the outcome of turning a name into a backend id.
//
// INVARIANTS:
// - Immutable once built
// - No I/O
// - Clone + Debug + Serialize for traceability

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::EntityId;

// ============================================================================
// REFERENCE KIND
// ============================================================================

/// Which backend collection a name refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    CrewMember,
    Genre,
}

impl ReferenceKind {
    /// Collection name used in logs and events
    pub fn collection(&self) -> &'static str {
        match self {
            ReferenceKind::CrewMember => "crew",
            ReferenceKind::Genre => "genre",
        }
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceKind::CrewMember => write!(f, "crew member"),
            ReferenceKind::Genre => write!(f, "genre"),
        }
    }
}

// ============================================================================
// RESOLUTION OUTCOME
// ============================================================================

/// Whether resolution found an existing entity or had to create one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionOutcome {
    /// No entity had this name; one was created
    Created,

    /// An entity with this name already existed (first match wins)
    Reused,
}

impl fmt::Display for ResolutionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionOutcome::Created => write!(f, "created"),
            ResolutionOutcome::Reused => write!(f, "reused"),
        }
    }
}

// ============================================================================
// RESOLVED REFERENCE
// ============================================================================

/// A name that has been mapped to a backend id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedReference {
    pub kind: ReferenceKind,
    pub name: String,
    pub id: EntityId,
    pub outcome: ResolutionOutcome,
}

impl ResolvedReference {
    pub fn created(kind: ReferenceKind, name: impl Into<String>, id: EntityId) -> Self {
        Self {
            kind,
            name: name.into(),
            id,
            outcome: ResolutionOutcome::Created,
        }
    }

    pub fn reused(kind: ReferenceKind, name: impl Into<String>, id: EntityId) -> Self {
        Self {
            kind,
            name: name.into(),
            id,
            outcome: ResolutionOutcome::Reused,
        }
    }

    pub fn was_created(&self) -> bool {
        self.outcome == ResolutionOutcome::Created
    }
}
