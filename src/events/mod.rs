// src/events/mod.rs
//
// Internal Event System - Public API

pub mod bus;
pub mod ingestion_events;
pub mod types;

pub use types::DomainEvent;

pub use types::{
    // Maintenance
    CatalogCleared,
    // Resolution
    CrewMemberCreated,
    GenreCreated,
    ReferenceReused,
};

pub use ingestion_events::{IngestionBatchCompleted, IngestionFailed, MovieIngested};

pub use bus::{EventBus, EventLogEntry};

/// Initialize a new event bus
pub fn create_event_bus() -> EventBus {
    EventBus::new()
}
