// src/events/ingestion_events.rs
//
// Ingestion Events
//
// Emitted by IngestionService while a preset batch is loaded. They are
// emitted AFTER the backend accepted the corresponding write.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::types::DomainEvent;
use crate::domain::EntityId;

/// Emitted when one preset record became a movie in the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieIngested {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub movie_id: EntityId,
    pub title: String,

    /// 1-based position of the record within its batch
    pub position: usize,
    pub total: usize,
}

impl MovieIngested {
    pub fn new(movie_id: EntityId, title: String, position: usize, total: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            movie_id,
            title,
            position,
            total,
        }
    }
}

impl DomainEvent for MovieIngested {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "MovieIngested" }
}

/// Emitted when every record of a batch was ingested
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestionBatchCompleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub total_records: usize,
    pub movies_created: usize,
    pub crew_created: usize,
    pub genres_created: usize,
    pub duration_ms: u64,
}

impl IngestionBatchCompleted {
    pub fn new(
        total_records: usize,
        movies_created: usize,
        crew_created: usize,
        genres_created: usize,
        duration_ms: u64,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            total_records,
            movies_created,
            crew_created,
            genres_created,
            duration_ms,
        }
    }
}

impl DomainEvent for IngestionBatchCompleted {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "IngestionBatchCompleted" }
}

/// Emitted when a batch stopped at a failing record.
/// Records before `position` stay in the backend; later ones were never tried.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestionFailed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub position: usize,
    pub total: usize,
    pub title: String,
    pub reason: String,
}

impl IngestionFailed {
    pub fn new(position: usize, total: usize, title: String, reason: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            position,
            total,
            title,
            reason,
        }
    }
}

impl DomainEvent for IngestionFailed {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "IngestionFailed" }
}
