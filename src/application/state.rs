// src/application/state.rs

use std::sync::Arc;

use crate::config::CatalogConfig;
use crate::error::AppResult;
use crate::events::{create_event_bus, EventBus};
use crate::integrations::CatalogApiClient;
use crate::repositories::{
    CrewRepository, GenreRepository, HttpCrewRepository, HttpGenreRepository,
    HttpMaintenanceRepository, HttpMovieRepository, MaintenanceRepository, MovieRepository,
};
use crate::services::{IngestionService, MovieQueryService, ReferenceResolver};

/// Everything a command needs, shared through `Arc`s
pub struct AppState {
    pub config: CatalogConfig,
    pub client: Arc<CatalogApiClient>,
    pub event_bus: Arc<EventBus>,
    pub resolver: Arc<ReferenceResolver>,
    pub ingestion_service: Arc<IngestionService>,
    pub query_service: Arc<MovieQueryService>,
}

impl AppState {
    /// Wire the HTTP repositories and services for the configured backend.
    ///
    /// No request is made here; use `check_backend` to probe the server.
    pub fn connect(config: &CatalogConfig) -> AppResult<Self> {
        let client = Arc::new(CatalogApiClient::new(config)?);

        Ok(Self::with_repositories(
            config.clone(),
            client.clone(),
            Arc::new(HttpCrewRepository::new(client.clone())),
            Arc::new(HttpGenreRepository::new(client.clone())),
            Arc::new(HttpMovieRepository::new(client.clone())),
            Arc::new(HttpMaintenanceRepository::new(client)),
        ))
    }

    /// Wire services over arbitrary repository implementations
    pub fn with_repositories(
        config: CatalogConfig,
        client: Arc<CatalogApiClient>,
        crew_repo: Arc<dyn CrewRepository>,
        genre_repo: Arc<dyn GenreRepository>,
        movie_repo: Arc<dyn MovieRepository>,
        maintenance_repo: Arc<dyn MaintenanceRepository>,
    ) -> Self {
        let event_bus = Arc::new(create_event_bus());

        let resolver = Arc::new(ReferenceResolver::new(
            crew_repo.clone(),
            genre_repo.clone(),
            event_bus.clone(),
        ));
        let ingestion_service = Arc::new(IngestionService::new(
            resolver.clone(),
            movie_repo.clone(),
            maintenance_repo,
            event_bus.clone(),
        ));
        let query_service = Arc::new(MovieQueryService::new(movie_repo, crew_repo, genre_repo));

        log::debug!("Application state ready for {}", client.base_url());

        Self {
            config,
            client,
            event_bus,
            resolver,
            ingestion_service,
            query_service,
        }
    }
}
