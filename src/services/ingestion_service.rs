// src/services/ingestion_service.rs
//
// Ingestion Service
//
// Loads a batch of name-based preset records into the backend as id-based
// movies, after clearing the catalog.
//
// RULES:
// - The catalog is cleared exactly once, before the first movie is created
// - Records are processed strictly one after another
// - Per record: genres, then cast, then director, then the movie itself
// - Each create is awaited before the next lookup, so a name created for an
//   earlier record is found (not re-created) by later ones
// - The first failure aborts the batch; nothing already written is undone
// - Only one batch operation (ingest or reset) runs at a time

use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;

use crate::domain::{
    dedup_ids, validate_new_movie, validate_preset_record, EntityId, Movie, NewMovie,
    PresetRecord, ReferenceKind, ResolutionOutcome, ResolvedReference,
};
use crate::error::{AppResult, CatalogError};
use crate::events::{
    CatalogCleared, EventBus, IngestionBatchCompleted, IngestionFailed, MovieIngested,
};
use crate::repositories::{MaintenanceRepository, MovieRepository};
use crate::services::ReferenceResolver;

// ============================================================================
// PROGRESS REPORTING
// ============================================================================

/// Progress notification delivered to the caller's callback.
///
/// `Display` renders the human-readable line shown to an operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IngestionProgress {
    CatalogCleared,

    ResetFailed {
        reason: String,
    },

    /// A record is about to be processed
    RecordStarted {
        position: usize,
        total: usize,
        title: String,
        references: usize,
    },

    /// A name reference was resolved, either to a new or an existing entity
    ReferenceResolved(ResolvedReference),

    CreatingMovie {
        title: String,
    },

    MovieCreated {
        title: String,
        movie_id: EntityId,
    },

    /// Emitted after each created movie
    Progress {
        completed: usize,
        total: usize,
    },

    Aborted {
        position: usize,
        total: usize,
        title: String,
        reason: String,
    },
}

impl fmt::Display for IngestionProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngestionProgress::CatalogCleared => write!(f, "Cleared all data in catalog"),
            IngestionProgress::ResetFailed { reason } => {
                write!(f, "Failed to clear catalog: {}", reason)
            }
            IngestionProgress::RecordStarted {
                position,
                total,
                title,
                references,
            } => write!(
                f,
                "Processing '{}' ({}/{}, {} references)",
                title, position, total, references
            ),
            IngestionProgress::ReferenceResolved(resolved) => match resolved.outcome {
                ResolutionOutcome::Created => {
                    write!(f, "Creating {} '{}'", resolved.kind, resolved.name)
                }
                ResolutionOutcome::Reused => {
                    write!(f, "Reusing existing {} '{}'", resolved.kind, resolved.name)
                }
            },
            IngestionProgress::CreatingMovie { title } => write!(f, "Creating movie '{}'", title),
            IngestionProgress::MovieCreated { title, movie_id } => {
                write!(f, "Inserted movie '{}' ({})", title, movie_id)
            }
            IngestionProgress::Progress { completed, total } => {
                write!(f, "Progress: {}/{}", completed, total)
            }
            IngestionProgress::Aborted {
                position,
                total,
                title,
                reason,
            } => write!(
                f,
                "Aborted at record {}/{} ('{}'): {}",
                position, total, title, reason
            ),
        }
    }
}

// ============================================================================
// REPORT
// ============================================================================

/// Summary of a completed batch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngestionReport {
    pub total: usize,
    pub movies_created: usize,
    pub crew_created: usize,
    pub crew_reused: usize,
    pub genres_created: usize,
    pub genres_reused: usize,

    /// Ids of the created movies, in record order
    pub movie_ids: Vec<EntityId>,
    pub duration_ms: u64,
}

impl IngestionReport {
    fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    fn tally(&mut self, resolved: &ResolvedReference) {
        match (resolved.kind, resolved.outcome) {
            (ReferenceKind::CrewMember, ResolutionOutcome::Created) => self.crew_created += 1,
            (ReferenceKind::CrewMember, ResolutionOutcome::Reused) => self.crew_reused += 1,
            (ReferenceKind::Genre, ResolutionOutcome::Created) => self.genres_created += 1,
            (ReferenceKind::Genre, ResolutionOutcome::Reused) => self.genres_reused += 1,
        }
    }
}

// ============================================================================
// INGESTION SERVICE
// ============================================================================

pub struct IngestionService {
    resolver: Arc<ReferenceResolver>,
    movie_repo: Arc<dyn MovieRepository>,
    maintenance_repo: Arc<dyn MaintenanceRepository>,
    event_bus: Arc<EventBus>,
    batch_lock: Mutex<()>,
}

impl IngestionService {
    pub fn new(
        resolver: Arc<ReferenceResolver>,
        movie_repo: Arc<dyn MovieRepository>,
        maintenance_repo: Arc<dyn MaintenanceRepository>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            resolver,
            movie_repo,
            maintenance_repo,
            event_bus,
            batch_lock: Mutex::new(()),
        }
    }

    /// Delete every movie, crew member and genre in the backend
    pub async fn reset_all<P>(&self, mut progress: P) -> AppResult<()>
    where
        P: FnMut(&IngestionProgress) + Send,
    {
        let _batch = self.batch_lock.lock().await;
        self.clear_catalog(&mut progress).await
    }

    /// Clear the catalog, then ingest `records` in order.
    ///
    /// Stops at the first failing record and returns its error; movies
    /// created before it stay in the backend.
    pub async fn ingest<P>(&self, records: &[PresetRecord], mut progress: P) -> AppResult<IngestionReport>
    where
        P: FnMut(&IngestionProgress) + Send,
    {
        let _batch = self.batch_lock.lock().await;
        let start_time = Instant::now();
        let total = records.len();

        log::info!("Ingesting {} preset records", total);
        self.clear_catalog(&mut progress).await?;

        let mut report = IngestionReport::new(total);

        for (index, record) in records.iter().enumerate() {
            let position = index + 1;
            progress(&IngestionProgress::RecordStarted {
                position,
                total,
                title: record.title.clone(),
                references: record.reference_count(),
            });

            match self.ingest_record(record, &mut report, &mut progress).await {
                Ok(movie) => {
                    report.movies_created += 1;
                    report.movie_ids.push(movie.id.clone());

                    self.event_bus.emit(MovieIngested::new(
                        movie.id,
                        movie.title,
                        position,
                        total,
                    ));
                    progress(&IngestionProgress::Progress {
                        completed: position,
                        total,
                    });
                }
                Err(err) => {
                    log::warn!(
                        "Ingestion aborted at record {}/{} ('{}'): {}",
                        position,
                        total,
                        record.title,
                        err
                    );
                    progress(&IngestionProgress::Aborted {
                        position,
                        total,
                        title: record.title.clone(),
                        reason: err.to_string(),
                    });
                    self.event_bus.emit(IngestionFailed::new(
                        position,
                        total,
                        record.title.clone(),
                        err.to_string(),
                    ));
                    return Err(err);
                }
            }
        }

        report.duration_ms = start_time.elapsed().as_millis() as u64;

        self.event_bus.emit(IngestionBatchCompleted::new(
            total,
            report.movies_created,
            report.crew_created,
            report.genres_created,
            report.duration_ms,
        ));
        log::info!(
            "Ingested {} movies ({} crew created, {} genres created) in {} ms",
            report.movies_created,
            report.crew_created,
            report.genres_created,
            report.duration_ms
        );

        Ok(report)
    }

    // ========================================================================
    // INTERNAL
    // ========================================================================

    async fn clear_catalog<P>(&self, progress: &mut P) -> AppResult<()>
    where
        P: FnMut(&IngestionProgress) + Send,
    {
        if let Err(err) = self.maintenance_repo.clear_all().await {
            log::warn!("Failed to clear catalog: {}", err);
            progress(&IngestionProgress::ResetFailed {
                reason: err.to_string(),
            });
            return Err(err);
        }

        self.event_bus.emit(CatalogCleared::new());
        progress(&IngestionProgress::CatalogCleared);
        Ok(())
    }

    async fn ingest_record<P>(
        &self,
        record: &PresetRecord,
        report: &mut IngestionReport,
        progress: &mut P,
    ) -> AppResult<Movie>
    where
        P: FnMut(&IngestionProgress) + Send,
    {
        validate_preset_record(record).map_err(CatalogError::Validation)?;

        let mut genre_ids = Vec::with_capacity(record.genres.len());
        for name in &record.genres {
            let resolved = self.resolver.resolve(ReferenceKind::Genre, name).await?;
            genre_ids.push(self.record_resolution(resolved, report, progress));
        }

        let mut cast_ids = Vec::with_capacity(record.cast.len());
        for name in &record.cast {
            let resolved = self.resolver.resolve(ReferenceKind::CrewMember, name).await?;
            cast_ids.push(self.record_resolution(resolved, report, progress));
        }

        let resolved = self
            .resolver
            .resolve(ReferenceKind::CrewMember, &record.director)
            .await?;
        let director_id = self.record_resolution(resolved, report, progress);

        let new_movie = Self::build_movie(record, director_id, cast_ids, genre_ids);
        validate_new_movie(&new_movie).map_err(CatalogError::Validation)?;

        progress(&IngestionProgress::CreatingMovie {
            title: new_movie.title.clone(),
        });
        let movie = self.movie_repo.create(&new_movie).await?;
        progress(&IngestionProgress::MovieCreated {
            title: movie.title.clone(),
            movie_id: movie.id.clone(),
        });

        Ok(movie)
    }

    fn record_resolution<P>(
        &self,
        resolved: ResolvedReference,
        report: &mut IngestionReport,
        progress: &mut P,
    ) -> EntityId
    where
        P: FnMut(&IngestionProgress) + Send,
    {
        report.tally(&resolved);
        let id = resolved.id.clone();
        progress(&IngestionProgress::ReferenceResolved(resolved));
        id
    }

    /// Assemble the id-based create request; repeated names collapse to one id
    fn build_movie(
        record: &PresetRecord,
        director_id: EntityId,
        cast_ids: Vec<EntityId>,
        genre_ids: Vec<EntityId>,
    ) -> NewMovie {
        NewMovie {
            title: record.title.clone(),
            description: record.overview.clone(),
            poster_url: record.poster.clone().filter(|p| !p.trim().is_empty()),
            release_year: record.year,
            audience_rating: record.rating,
            directed_by: director_id,
            cast: dedup_ids(cast_ids),
            genres: dedup_ids(genre_ids),
        }
    }
}
