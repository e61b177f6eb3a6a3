// src/services/movie_query_service.rs
//
// Movie Query Service - the read path
//
// Translates name-based filters into id-based backend queries and serves the
// browsing views (movie list, movie details, crew member details).
//
// RULES:
// - Lookup only: this service never creates entities
// - A name filter considers EVERY entity bearing that name, not just the first
// - A name filter with no match short-circuits to an empty result; the movie
//   collection is not queried, since an empty id list would read as
//   "unconstrained" on the backend
// - Backend failures propagate unchanged

use serde::Serialize;
use std::sync::Arc;

use crate::domain::{
    dedup_ids, CrewMember, EntityId, FilterSpec, Genre, Movie, MovieQuery, TranslatedQuery,
};
use crate::error::{AppResult, CatalogError};
use crate::repositories::{CrewRepository, GenreRepository, MovieRepository};

/// A crew member together with the movies they directed and appeared in
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrewDetails {
    pub member: CrewMember,
    pub directed: Vec<Movie>,
    pub starring: Vec<Movie>,
}

pub struct MovieQueryService {
    movie_repo: Arc<dyn MovieRepository>,
    crew_repo: Arc<dyn CrewRepository>,
    genre_repo: Arc<dyn GenreRepository>,
}

impl MovieQueryService {
    pub fn new(
        movie_repo: Arc<dyn MovieRepository>,
        crew_repo: Arc<dyn CrewRepository>,
        genre_repo: Arc<dyn GenreRepository>,
    ) -> Self {
        Self {
            movie_repo,
            crew_repo,
            genre_repo,
        }
    }

    /// Translate a name-based filter into a backend query.
    ///
    /// Name filters are looked up in the order director, cast, genre; the
    /// first one without any match ends translation with `EmptyResult`.
    pub async fn translate(&self, filter: &FilterSpec) -> AppResult<TranslatedQuery> {
        let mut query = MovieQuery {
            title: filter.title_fragment().map(str::to_string),
            release_year: filter.year,
            ..MovieQuery::default()
        };

        if let Some(name) = filter.director_name() {
            let ids = self.crew_ids_named(name).await?;
            if ids.is_empty() {
                log::debug!("No crew member named '{}'; director filter matches nothing", name);
                return Ok(TranslatedQuery::EmptyResult);
            }
            query.directed_by_ids = Some(ids);
        }

        if let Some(name) = filter.cast_name() {
            let ids = self.crew_ids_named(name).await?;
            if ids.is_empty() {
                log::debug!("No crew member named '{}'; cast filter matches nothing", name);
                return Ok(TranslatedQuery::EmptyResult);
            }
            query.cast_ids = Some(ids);
        }

        if let Some(name) = filter.genre_name() {
            let ids = self.genre_ids_named(name).await?;
            if ids.is_empty() {
                log::debug!("No genre named '{}'; genre filter matches nothing", name);
                return Ok(TranslatedQuery::EmptyResult);
            }
            query.genre_ids = Some(ids);
        }

        Ok(TranslatedQuery::Query(query))
    }

    /// Movies matching a name-based filter
    pub async fn search(&self, filter: &FilterSpec) -> AppResult<Vec<Movie>> {
        match self.translate(filter).await? {
            TranslatedQuery::Query(query) => self.movie_repo.list(&query).await,
            TranslatedQuery::EmptyResult => Ok(Vec::new()),
        }
    }

    pub async fn list_movies(&self) -> AppResult<Vec<Movie>> {
        self.movie_repo.list(&MovieQuery::all()).await
    }

    pub async fn get_movie(&self, id: &EntityId) -> AppResult<Movie> {
        self.movie_repo
            .get_by_id(id)
            .await?
            .ok_or(CatalogError::NotFound)
    }

    /// A person plus the movies they directed and the ones they star in
    pub async fn crew_details(&self, id: &EntityId) -> AppResult<CrewDetails> {
        let member = self
            .crew_repo
            .get_by_id(id)
            .await?
            .ok_or(CatalogError::NotFound)?;

        let directed = self.movie_repo.list(&MovieQuery::directed_by(id.clone())).await?;
        let starring = self.movie_repo.list(&MovieQuery::starring(id.clone())).await?;

        Ok(CrewDetails {
            member,
            directed,
            starring,
        })
    }

    pub async fn list_crew(&self) -> AppResult<Vec<CrewMember>> {
        self.crew_repo.list_all().await
    }

    pub async fn list_genres(&self) -> AppResult<Vec<Genre>> {
        self.genre_repo.list_all().await
    }

    // ========================================================================
    // INTERNAL
    // ========================================================================

    async fn crew_ids_named(&self, name: &str) -> AppResult<Vec<EntityId>> {
        let members = self.crew_repo.list_by_name(name).await?;
        Ok(dedup_ids(members.into_iter().map(|m| m.id).collect()))
    }

    async fn genre_ids_named(&self, name: &str) -> AppResult<Vec<EntityId>> {
        let genres = self.genre_repo.list_by_name(name).await?;
        Ok(dedup_ids(genres.into_iter().map(|g| g.id).collect()))
    }
}
