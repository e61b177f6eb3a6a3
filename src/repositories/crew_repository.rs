// src/repositories/crew_repository.rs
//
// Crew member persistence (remote collection `/api/crew`)

use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

use crate::domain::{CrewMember, DomainError, EntityId, ReferenceKind};
use crate::error::{AppResult, CatalogError};
use crate::integrations::{CatalogApiClient, CreatedEntity};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CrewRepository: Send + Sync {
    /// Exact, case-sensitive name lookup. Order is whatever the backend returns.
    async fn list_by_name(&self, name: &str) -> AppResult<Vec<CrewMember>>;
    async fn list_all(&self) -> AppResult<Vec<CrewMember>>;
    async fn get_by_id(&self, id: &EntityId) -> AppResult<Option<CrewMember>>;
    async fn create(&self, name: &str) -> AppResult<CrewMember>;
}

pub struct HttpCrewRepository {
    client: Arc<CatalogApiClient>,
}

impl HttpCrewRepository {
    pub fn new(client: Arc<CatalogApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CrewRepository for HttpCrewRepository {
    async fn list_by_name(&self, name: &str) -> AppResult<Vec<CrewMember>> {
        // A blank name would be dropped from the query and list everyone
        if name.trim().is_empty() {
            return Err(CatalogError::Validation(DomainError::EmptyName {
                kind: ReferenceKind::CrewMember,
            }));
        }
        self.client
            .get_json(&["api", "crew"], &[("name", name.to_string())])
            .await
    }

    async fn list_all(&self) -> AppResult<Vec<CrewMember>> {
        self.client.get_json(&["api", "crew"], &[]).await
    }

    async fn get_by_id(&self, id: &EntityId) -> AppResult<Option<CrewMember>> {
        self.client.get_optional(&["api", "crew", id.as_str()]).await
    }

    async fn create(&self, name: &str) -> AppResult<CrewMember> {
        let created: CreatedEntity = self
            .client
            .post_json(&["api", "crew"], &json!({ "name": name }))
            .await?;
        Ok(CrewMember::new(created.id, name))
    }
}
