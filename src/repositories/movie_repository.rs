// src/repositories/movie_repository.rs
//
// Movie persistence (remote collection `/api/movies`)

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{EntityId, Movie, MovieQuery, NewMovie};
use crate::error::AppResult;
use crate::integrations::{CatalogApiClient, CreatedEntity};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// List movies matching an id-based query. Absent fields are unconstrained.
    async fn list(&self, query: &MovieQuery) -> AppResult<Vec<Movie>>;
    async fn get_by_id(&self, id: &EntityId) -> AppResult<Option<Movie>>;
    async fn create(&self, movie: &NewMovie) -> AppResult<Movie>;
}

pub struct HttpMovieRepository {
    client: Arc<CatalogApiClient>,
}

impl HttpMovieRepository {
    pub fn new(client: Arc<CatalogApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MovieRepository for HttpMovieRepository {
    async fn list(&self, query: &MovieQuery) -> AppResult<Vec<Movie>> {
        self.client
            .get_json(&["api", "movies"], &query.to_query_pairs())
            .await
    }

    async fn get_by_id(&self, id: &EntityId) -> AppResult<Option<Movie>> {
        self.client.get_optional(&["api", "movies", id.as_str()]).await
    }

    async fn create(&self, movie: &NewMovie) -> AppResult<Movie> {
        let created: CreatedEntity = self.client.post_json(&["api", "movies"], movie).await?;
        Ok(movie.clone().into_movie(created.id))
    }
}
