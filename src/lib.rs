// src/lib.rs
// Cinedex - name-based client for a movie catalog backend
//
// Architecture:
// - Domain-centric: entities, invariants and value objects live in domain/
// - Backend-agnostic services: repositories are traits, HTTP is one implementation
// - Event-driven: services report what they did on the event bus
// - Explicit: no caching, no retries, no implicit behavior

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod domain;
pub mod error;
pub mod events;
pub mod integrations;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;
pub mod presets;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    validate_new_movie, validate_preset_record, CrewMember, DomainError, EntityId, FilterSpec,
    Genre, Movie, MovieQuery, NewMovie, PresetRecord, ReferenceKind, ResolutionOutcome,
    ResolvedReference, TranslatedQuery,
};

// ============================================================================
// PUBLIC API - Errors & Config
// ============================================================================

pub use config::CatalogConfig;
pub use error::{AppResult, CatalogError};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus, CatalogCleared, CrewMemberCreated, DomainEvent, EventBus, EventLogEntry,
    GenreCreated, IngestionBatchCompleted, IngestionFailed, MovieIngested, ReferenceReused,
};

// ============================================================================
// PUBLIC API - Repositories & Integrations
// ============================================================================

pub use integrations::CatalogApiClient;
pub use repositories::{
    CrewRepository, GenreRepository, HttpCrewRepository, HttpGenreRepository,
    HttpMaintenanceRepository, HttpMovieRepository, MaintenanceRepository, MovieRepository,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    CrewDetails, IngestionProgress, IngestionReport, IngestionService, MovieQueryService,
    ReferenceResolver,
};

pub use application::AppState;
pub use presets::{load_preset_file, Preset};
