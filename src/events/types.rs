// src/events/types.rs
//
// Catalog domain events.
// Each event represents an immutable fact that has already occurred in the
// backend (or was observed there).
//
// RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{EntityId, ReferenceKind};

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// CATALOG MAINTENANCE
// ============================================================================

/// Emitted after every movie, crew member and genre has been deleted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogCleared {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
}

impl CatalogCleared {
    pub fn new() -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
        }
    }
}

impl Default for CatalogCleared {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainEvent for CatalogCleared {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "CatalogCleared" }
}

// ============================================================================
// REFERENCE RESOLUTION EVENTS
// ============================================================================

/// Emitted when the resolver creates a crew member for an unmatched name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewMemberCreated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub crew_id: EntityId,
    pub name: String,
}

impl CrewMemberCreated {
    pub fn new(crew_id: EntityId, name: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            crew_id,
            name,
        }
    }
}

impl DomainEvent for CrewMemberCreated {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "CrewMemberCreated" }
}

/// Emitted when the resolver creates a genre for an unmatched name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenreCreated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub genre_id: EntityId,
    pub name: String,
}

impl GenreCreated {
    pub fn new(genre_id: EntityId, name: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            genre_id,
            name,
        }
    }
}

impl DomainEvent for GenreCreated {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "GenreCreated" }
}

/// Emitted when a name matched an existing entity and nothing was created
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceReused {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub kind: ReferenceKind,
    pub entity_id: EntityId,
    pub name: String,
}

impl ReferenceReused {
    pub fn new(kind: ReferenceKind, entity_id: EntityId, name: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            kind,
            entity_id,
            name,
        }
    }
}

impl DomainEvent for ReferenceReused {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "ReferenceReused" }
}
