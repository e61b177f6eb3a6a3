// src/services/test_support.rs
//
// In-memory catalog backend for service tests.
//
// Implements every repository trait over one shared state and records each
// call in order, so tests can assert on what reached the backend (how many
// creates, whether the movie collection was queried, what came first).

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::{CrewMember, EntityId, Genre, Movie, MovieQuery, NewMovie};
use crate::error::{AppResult, CatalogError};
use crate::events::EventBus;
use crate::repositories::{CrewRepository, GenreRepository, MaintenanceRepository, MovieRepository};
use crate::services::{IngestionService, MovieQueryService, ReferenceResolver};

/// A backend call, in the order it happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    ListCrew(String),
    ListAllCrew,
    GetCrew(EntityId),
    CreateCrew(String),
    ListGenres(String),
    ListAllGenres,
    GetGenre(EntityId),
    CreateGenre(String),
    ListMovies(MovieQuery),
    GetMovie(EntityId),
    CreateMovie(String),
    ClearAll,
}

/// Where the fake backend should answer with a 500
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailurePoint {
    /// Any name lookup (crew or genre) for this name
    Lookup(String),
    /// Creating the movie with this title
    CreateMovie(String),
    Clear,
}

#[derive(Default)]
struct CatalogState {
    next_id: u64,
    crew: Vec<CrewMember>,
    genres: Vec<Genre>,
    movies: Vec<Movie>,
    calls: Vec<BackendCall>,
    failures: Vec<FailurePoint>,
}

impl CatalogState {
    fn next_id(&mut self, prefix: &str) -> EntityId {
        self.next_id += 1;
        EntityId::new(format!("{}-{}", prefix, self.next_id))
    }

    fn fails_at(&self, point: &FailurePoint) -> bool {
        self.failures.contains(point)
    }
}

fn backend_failure() -> CatalogError {
    CatalogError::Backend {
        status: 500,
        message: "injected failure".to_string(),
    }
}

#[derive(Default)]
pub struct InMemoryCatalog {
    state: Mutex<CatalogState>,
}

impl InMemoryCatalog {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    // ------------------------------------------------------------------
    // Seeding (not recorded as calls)
    // ------------------------------------------------------------------

    pub fn seed_crew(&self, name: &str) -> EntityId {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id("crew");
        state.crew.push(CrewMember::new(id.clone(), name));
        id
    }

    pub fn seed_genre(&self, name: &str) -> EntityId {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id("genre");
        state.genres.push(Genre::new(id.clone(), name));
        id
    }

    pub fn seed_movie(&self, movie: NewMovie) -> EntityId {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id("movie");
        state.movies.push(movie.into_movie(id.clone()));
        id
    }

    pub fn fail_at(&self, point: FailurePoint) {
        self.state.lock().unwrap().failures.push(point);
    }

    // ------------------------------------------------------------------
    // Inspection
    // ------------------------------------------------------------------

    pub fn calls(&self) -> Vec<BackendCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn count_calls(&self, pred: impl Fn(&BackendCall) -> bool) -> usize {
        self.calls().iter().filter(|c| pred(c)).count()
    }

    pub fn crew_named(&self, name: &str) -> Vec<CrewMember> {
        let state = self.state.lock().unwrap();
        state.crew.iter().filter(|c| c.name == name).cloned().collect()
    }

    pub fn genres_named(&self, name: &str) -> Vec<Genre> {
        let state = self.state.lock().unwrap();
        state.genres.iter().filter(|g| g.name == name).cloned().collect()
    }

    pub fn crew_count(&self) -> usize {
        self.state.lock().unwrap().crew.len()
    }

    pub fn genre_count(&self) -> usize {
        self.state.lock().unwrap().genres.len()
    }

    pub fn movies(&self) -> Vec<Movie> {
        self.state.lock().unwrap().movies.clone()
    }

    pub fn movie_titled(&self, title: &str) -> Option<Movie> {
        self.movies().into_iter().find(|m| m.title == title)
    }

    fn record(&self, call: BackendCall) -> std::sync::MutexGuard<'_, CatalogState> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        state
    }
}

fn movie_matches(movie: &Movie, query: &MovieQuery) -> bool {
    let any_of = |ids: &Option<Vec<EntityId>>, candidates: &[EntityId]| match ids {
        Some(ids) => ids.iter().any(|id| candidates.contains(id)),
        None => true,
    };

    query.title.as_deref().map_or(true, |t| movie.title.contains(t))
        && any_of(&query.directed_by_ids, std::slice::from_ref(&movie.directed_by))
        && any_of(&query.cast_ids, &movie.cast)
        && any_of(&query.genre_ids, &movie.genres)
        && query.release_year.map_or(true, |y| movie.release_year == Some(y))
}

#[async_trait]
impl CrewRepository for InMemoryCatalog {
    async fn list_by_name(&self, name: &str) -> AppResult<Vec<CrewMember>> {
        let state = self.record(BackendCall::ListCrew(name.to_string()));
        if state.fails_at(&FailurePoint::Lookup(name.to_string())) {
            return Err(backend_failure());
        }
        Ok(state.crew.iter().filter(|c| c.name == name).cloned().collect())
    }

    async fn list_all(&self) -> AppResult<Vec<CrewMember>> {
        Ok(self.record(BackendCall::ListAllCrew).crew.clone())
    }

    async fn get_by_id(&self, id: &EntityId) -> AppResult<Option<CrewMember>> {
        let state = self.record(BackendCall::GetCrew(id.clone()));
        Ok(state.crew.iter().find(|c| &c.id == id).cloned())
    }

    async fn create(&self, name: &str) -> AppResult<CrewMember> {
        let mut state = self.record(BackendCall::CreateCrew(name.to_string()));
        let id = state.next_id("crew");
        let member = CrewMember::new(id, name);
        state.crew.push(member.clone());
        Ok(member)
    }
}

#[async_trait]
impl GenreRepository for InMemoryCatalog {
    async fn list_by_name(&self, name: &str) -> AppResult<Vec<Genre>> {
        let state = self.record(BackendCall::ListGenres(name.to_string()));
        if state.fails_at(&FailurePoint::Lookup(name.to_string())) {
            return Err(backend_failure());
        }
        Ok(state.genres.iter().filter(|g| g.name == name).cloned().collect())
    }

    async fn list_all(&self) -> AppResult<Vec<Genre>> {
        Ok(self.record(BackendCall::ListAllGenres).genres.clone())
    }

    async fn get_by_id(&self, id: &EntityId) -> AppResult<Option<Genre>> {
        let state = self.record(BackendCall::GetGenre(id.clone()));
        Ok(state.genres.iter().find(|g| &g.id == id).cloned())
    }

    async fn create(&self, name: &str) -> AppResult<Genre> {
        let mut state = self.record(BackendCall::CreateGenre(name.to_string()));
        let id = state.next_id("genre");
        let genre = Genre::new(id, name);
        state.genres.push(genre.clone());
        Ok(genre)
    }
}

#[async_trait]
impl MovieRepository for InMemoryCatalog {
    async fn list(&self, query: &MovieQuery) -> AppResult<Vec<Movie>> {
        let state = self.record(BackendCall::ListMovies(query.clone()));
        Ok(state
            .movies
            .iter()
            .filter(|m| movie_matches(m, query))
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: &EntityId) -> AppResult<Option<Movie>> {
        let state = self.record(BackendCall::GetMovie(id.clone()));
        Ok(state.movies.iter().find(|m| &m.id == id).cloned())
    }

    async fn create(&self, movie: &NewMovie) -> AppResult<Movie> {
        let mut state = self.record(BackendCall::CreateMovie(movie.title.clone()));
        if state.fails_at(&FailurePoint::CreateMovie(movie.title.clone())) {
            return Err(backend_failure());
        }
        let id = state.next_id("movie");
        let created = movie.clone().into_movie(id);
        state.movies.push(created.clone());
        Ok(created)
    }
}

#[async_trait]
impl MaintenanceRepository for InMemoryCatalog {
    async fn clear_all(&self) -> AppResult<()> {
        let mut state = self.record(BackendCall::ClearAll);
        if state.fails_at(&FailurePoint::Clear) {
            return Err(backend_failure());
        }
        state.crew.clear();
        state.genres.clear();
        state.movies.clear();
        Ok(())
    }
}

/// Services wired to one in-memory catalog
pub struct TestServices {
    pub catalog: Arc<InMemoryCatalog>,
    pub event_bus: Arc<EventBus>,
    pub resolver: Arc<ReferenceResolver>,
    pub ingestion: IngestionService,
    pub queries: MovieQueryService,
}

pub fn services() -> TestServices {
    services_for(InMemoryCatalog::new())
}

pub fn services_for(catalog: Arc<InMemoryCatalog>) -> TestServices {
    let event_bus = Arc::new(EventBus::new());
    let crew_repo: Arc<dyn CrewRepository> = catalog.clone();
    let genre_repo: Arc<dyn GenreRepository> = catalog.clone();
    let movie_repo: Arc<dyn MovieRepository> = catalog.clone();
    let maintenance_repo: Arc<dyn MaintenanceRepository> = catalog.clone();

    let resolver = Arc::new(ReferenceResolver::new(
        crew_repo.clone(),
        genre_repo.clone(),
        event_bus.clone(),
    ));
    let ingestion = IngestionService::new(
        resolver.clone(),
        movie_repo.clone(),
        maintenance_repo,
        event_bus.clone(),
    );
    let queries = MovieQueryService::new(movie_repo, crew_repo, genre_repo);

    TestServices {
        catalog,
        event_bus,
        resolver,
        ingestion,
        queries,
    }
}
