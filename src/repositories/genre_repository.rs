// src/repositories/genre_repository.rs
//
// Genre persistence (remote collection `/api/genre`)

use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

use crate::domain::{DomainError, EntityId, Genre, ReferenceKind};
use crate::error::{AppResult, CatalogError};
use crate::integrations::{CatalogApiClient, CreatedEntity};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenreRepository: Send + Sync {
    /// Exact, case-sensitive name lookup
    async fn list_by_name(&self, name: &str) -> AppResult<Vec<Genre>>;
    async fn list_all(&self) -> AppResult<Vec<Genre>>;
    async fn get_by_id(&self, id: &EntityId) -> AppResult<Option<Genre>>;
    async fn create(&self, name: &str) -> AppResult<Genre>;
}

pub struct HttpGenreRepository {
    client: Arc<CatalogApiClient>,
}

impl HttpGenreRepository {
    pub fn new(client: Arc<CatalogApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl GenreRepository for HttpGenreRepository {
    async fn list_by_name(&self, name: &str) -> AppResult<Vec<Genre>> {
        if name.trim().is_empty() {
            return Err(CatalogError::Validation(DomainError::EmptyName {
                kind: ReferenceKind::Genre,
            }));
        }
        self.client
            .get_json(&["api", "genre"], &[("name", name.to_string())])
            .await
    }

    async fn list_all(&self) -> AppResult<Vec<Genre>> {
        self.client.get_json(&["api", "genre"], &[]).await
    }

    async fn get_by_id(&self, id: &EntityId) -> AppResult<Option<Genre>> {
        self.client.get_optional(&["api", "genre", id.as_str()]).await
    }

    async fn create(&self, name: &str) -> AppResult<Genre> {
        let created: CreatedEntity = self
            .client
            .post_json(&["api", "genre"], &json!({ "name": name }))
            .await?;
        Ok(Genre::new(created.id, name))
    }
}
