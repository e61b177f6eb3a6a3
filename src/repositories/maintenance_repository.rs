// src/repositories/maintenance_repository.rs
//
// Whole-catalog operations

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::AppResult;
use crate::integrations::CatalogApiClient;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MaintenanceRepository: Send + Sync {
    /// Delete every movie, crew member and genre. No selective scope.
    async fn clear_all(&self) -> AppResult<()>;
}

pub struct HttpMaintenanceRepository {
    client: Arc<CatalogApiClient>,
}

impl HttpMaintenanceRepository {
    pub fn new(client: Arc<CatalogApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MaintenanceRepository for HttpMaintenanceRepository {
    async fn clear_all(&self) -> AppResult<()> {
        self.client.post_empty(&["api", "clear"]).await
    }
}
